//! Hexadecimal color strings (`#rgb` and `#rrggbb`).

use rgb::RGB8;
use crate::Error;

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0' ..= b'9' => Some(c - b'0'),
        b'a' ..= b'f' => Some(c - b'a' + 10),
        b'A' ..= b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Parse a color written `#rgb`, `#rrggbb`, `rgb` or `rrggbb`.  The
/// shorthand form duplicates each digit, so `#0f0` is `#00ff00`.
///
/// # Example
///
/// ```
/// use color_ramp::hex_to_rgb;
/// let c = hex_to_rgb("#0f0").unwrap();
/// assert_eq!((c.r, c.g, c.b), (0, 255, 0));
/// assert!(hex_to_rgb("not-a-color").is_err());
/// ```
pub fn hex_to_rgb(s: &str) -> Result<RGB8, Error> {
    let invalid = || Error::InvalidFormat(s.to_string());
    let digits = s.strip_prefix('#').unwrap_or(s).as_bytes();
    let mut d = [0u8; 6];
    match digits.len() {
        3 => for (i, &c) in digits.iter().enumerate() {
            let x = nibble(c).ok_or_else(invalid)?;
            d[2 * i] = x;
            d[2 * i + 1] = x;
        },
        6 => for (i, &c) in digits.iter().enumerate() {
            d[i] = nibble(c).ok_or_else(invalid)?;
        },
        _ => return Err(invalid()),
    }
    Ok(RGB8 { r: d[0] << 4 | d[1], g: d[2] << 4 | d[3], b: d[4] << 4 | d[5] })
}

/// Format `c` as `#rrggbb` (lowercase).  This is the inverse of
/// [`hex_to_rgb`] on 6 digit strings, up to case.
pub fn rgb_to_hex(c: RGB8) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_digits() {
        assert_eq!(hex_to_rgb("#3B82F6"), Ok(RGB8::new(59, 130, 246)));
        assert_eq!(hex_to_rgb("3b82f6"), Ok(RGB8::new(59, 130, 246)));
        assert_eq!(hex_to_rgb("#000000"), Ok(RGB8::new(0, 0, 0)));
    }

    #[test]
    fn shorthand_expands() {
        assert_eq!(hex_to_rgb("#0f0"), Ok(RGB8::new(0, 255, 0)));
        assert_eq!(rgb_to_hex(hex_to_rgb("#abc").unwrap()), "#aabbcc");
    }

    #[test]
    fn rejects_garbage() {
        for s in ["not-a-color", "", "#", "#12", "#1234", "#12345g",
                  "##123456", "#1234567", "0x1234",
                  " #000000 ", "#fff ", " 3b82f6", "#3b 82f"] {
            assert_eq!(hex_to_rgb(s), Err(Error::InvalidFormat(s.into())),
                       "{s:?} accepted");
        }
    }

    #[test]
    fn hex_round_trip() {
        for r in (0 ..= 255).step_by(15) {
            for g in (0 ..= 255).step_by(17) {
                for b in [0, 1, 9, 10, 15, 16, 127, 128, 254, 255] {
                    let hex = format!("#{r:02X}{g:02X}{b:02X}");
                    let c = hex_to_rgb(&hex).unwrap();
                    assert!(rgb_to_hex(c).eq_ignore_ascii_case(&hex));
                }
            }
        }
    }
}
