//! Named colors for registration as design tokens or styles.

use crate::{RGBColor, Ramp};

/// A ramp color named `"<name>/<weight>"`.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// Hierarchical identifier, e.g. `"primary/500"`.
    pub path: String,
    pub weight: u16,
    /// `#rrggbb`
    pub hex: String,
    /// Red, green and blue in \[0, 1\].
    pub rgb: [f64; 3],
}

impl Token {
    /// The path as a CSS custom property name: `--primary-500`.
    pub fn css_variable(&self) -> String {
        let name: String = self.path.chars()
            .map(|c| if c == '/' || c.is_whitespace() { '-' } else { c })
            .collect();
        format!("--{name}")
    }
}

impl<Color: RGBColor> Ramp<Color> {
    /// Name every color of the ramp `"<name>/<weight>"`, in ramp order.
    ///
    /// # Example
    ///
    /// ```
    /// use color_ramp::{generate_ramp, DEFAULT_WEIGHTS};
    /// let ramp = generate_ramp("#3b82f6", &DEFAULT_WEIGHTS).unwrap();
    /// let tokens = ramp.tokens("primary");
    /// assert_eq!(tokens[0].path, "primary/50");
    /// assert_eq!(tokens[10].css_variable(), "--primary-950");
    /// ```
    pub fn tokens(&self, name: &str) -> Vec<Token> {
        self.iter().map(|(weight, c)| {
            let rgba = c.to_rgba();
            Token {
                path: format!("{name}/{weight}"),
                weight: *weight,
                hex: c.to_hex(),
                rgb: [rgba.r / 255., rgba.g / 255., rgba.b / 255.],
            }
        }).collect()
    }
}


#[cfg(test)]
mod tests {
    use rgb::RGB8;
    use crate::{generate_ramp, DEFAULT_WEIGHTS};

    #[test]
    fn names_and_values() {
        let ramp = generate_ramp("#3B82F6", &DEFAULT_WEIGHTS).unwrap();
        let tokens = ramp.tokens("brand");
        assert_eq!(tokens.len(), 11);
        for (t, &(w, c)) in tokens.iter().zip(ramp.iter()) {
            assert_eq!(t.weight, w);
            assert_eq!(t.path, format!("brand/{w}"));
            assert_eq!(t.hex, crate::rgb_to_hex(c));
            let RGB8 { r, g, b } = c;
            assert_eq!(t.rgb, [r as f64 / 255., g as f64 / 255.,
                               b as f64 / 255.]);
            assert!(t.rgb.iter().all(|x| (0. ..= 1.).contains(x)));
        }
    }

    #[test]
    fn css_names() {
        let ramp = generate_ramp("#0f0", &DEFAULT_WEIGHTS).unwrap();
        let tokens = ramp.tokens("brand green");
        assert_eq!(tokens[4].css_variable(), "--brand-green-400");
    }
}
