//! Tonal color ramps derived from a single seed color.
//!
//! - [`generate_ramp`] / [`RGBColor::ramp`]
//! - [`Hsl`]
//!
//! A [`Ramp`] has one color per weight of a [`WeightTable`] (by
//! default [`struct@DEFAULT_WEIGHTS`]: 50, 100, 200, …, 900, 950).  The
//! seed is matched to the weight whose target lightness is nearest,
//! and its deviation from the target curves at that weight is carried
//! over to every other weight, keeping the seed's hue.
//!
//! [`Ramp::tokens`] names the colors `"<name>/<weight>"` for
//! registration as design tokens.

use rgb::{RGBA, RGB8, RGBA8};

mod error;
mod hex;
mod ramp;
mod tokens;
mod weights;
pub use error::Error;
pub use hex::{hex_to_rgb, rgb_to_hex};
pub use ramp::{generate_ramp, Ramp};
pub use tokens::Token;
pub use weights::DEFAULT_WEIGHTS;
pub use weights::ty::{WeightStep, WeightTable};

/// Specifies the methods a RGB color encoding must provide.
pub trait RGBColor: Sized {
    /// Return the red, green, blue and alpha components of the color
    /// (in \[0, 255\]).
    fn to_rgba(&self) -> RGBA<f64>;

    /// Create a color from its RGBA components (in \[0, 255\]).
    fn from_rgba(rgba: RGBA<f64>) -> Self;

    /// Return the HSL representation of the color (alpha is dropped).
    #[inline]
    fn to_hsl(&self) -> Hsl { Hsl::from_rgb(self.to_rgba()) }

    /// Create an opaque color from its HSL representation.
    #[inline]
    fn from_hsl(hsl: Hsl) -> Self { Self::from_rgba(hsl.to_rgba()) }

    /// Parse a `#rgb` or `#rrggbb` string (the `#` is optional).
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGBA8;
    /// use color_ramp::RGBColor;
    /// let c = RGBA8::from_hex("#3b82f6").unwrap();
    /// assert_eq!(c, RGBA8::new(59, 130, 246, 255));
    /// ```
    fn from_hex(s: &str) -> Result<Self, Error> {
        let RGB8 { r, g, b } = hex_to_rgb(s)?;
        Ok(Self::from_rgba(RGBA { r: r as f64, g: g as f64, b: b as f64,
                                  a: 255. }))
    }

    /// Return the color as `#rrggbb`, rounding the channels.
    fn to_hex(&self) -> String { rgb_to_hex(to_rgb8(self.to_rgba())) }

    /// Return the ramp generated from this color as seed.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use color_ramp::{RGBColor, DEFAULT_WEIGHTS};
    /// let blue = RGB8::new(0x3b, 0x82, 0xf6);
    /// let ramp = blue.ramp(&DEFAULT_WEIGHTS);
    /// assert_eq!(ramp.len(), 11);
    /// assert_eq!(ramp.anchor(), 400);
    /// ```
    fn ramp(&self, weights: &WeightTable) -> Ramp<Self> {
        Ramp::from_seed(self.to_rgba(), weights)
    }

    /// Convert the color to grayscale.
    fn to_gray(&self) -> Self {
        let RGBA{ r, g, b, a } = Self::to_rgba(self);
        let x = 0.299 * r + 0.587 * g + 0.114 * b;
        Self::from_rgba(RGBA{ r: x, g: x, b: x, a })
    }
}

fn to_rgb8(c: RGBA<f64>) -> RGB8 {
    let ch = |x: f64| x.round().clamp(0., 255.) as u8;
    RGB8 { r: ch(c.r), g: ch(c.g), b: ch(c.b) }
}

impl RGBColor for RGBA<f64> {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> { *self }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self { c }
}

impl RGBColor for RGB8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64, a: 255. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self { to_rgb8(c) }
}

impl RGBColor for RGBA8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64,
              a: self.a as f64 }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        let RGB8 { r, g, b } = to_rgb8(c);
        RGBA8 { r, g, b, a: c.a.round().clamp(0., 255.) as u8 }
    }
}

/// The type for colors in the HSL (hue, saturation, lightness)
/// color space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    /// The hue in \[0, 1), cyclic (0 is red, 1/3 green, 2/3 blue).
    pub h: f64,
    /// The saturation in \[0, 1\].
    pub s: f64,
    /// The lightness in \[0, 1\].
    pub l: f64,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self { Hsl { h, s, l } }

    /// Convert RGB components in \[0, 255\] (alpha ignored).
    /// Achromatic colors get `h = 0` and `s = 0`.
    pub fn from_rgb(c: RGBA<f64>) -> Hsl {
        let r = c.r / 255.;
        let g = c.g / 255.;
        let b = c.b / 255.;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.;
        if max == min {
            return Hsl { h: 0., s: 0., l }
        }
        let d = max - min;
        let s = if l > 0.5 { d / (2. - max - min) } else { d / (max + min) };
        let h = {
            if max == r { (g - b) / d + if g < b { 6. } else { 0. } }
            else if max == g { (b - r) / d + 2. }
            else { (r - g) / d + 4. } };
        Hsl { h: h / 6., s, l }
    }

    /// Return the opaque RGBA components, rounded to integers in
    /// \[0, 255\].
    pub fn to_rgba(&self) -> RGBA<f64> {
        let ch = |x: f64| (255. * x).round().clamp(0., 255.);
        if self.s == 0. {
            let v = ch(self.l);
            return RGBA { r: v, g: v, b: v, a: 255. }
        }
        let Hsl { h, s, l } = *self;
        let q = if l < 0.5 { l * (1. + s) } else { l + s - l * s };
        let p = 2. * l - q;
        RGBA { r: ch(hue_to_rgb(p, q, h + 1. / 3.)),
               g: ch(hue_to_rgb(p, q, h)),
               b: ch(hue_to_rgb(p, q, h - 1. / 3.)),
               a: 255. }
    }
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.);
    if t < 1. / 6. { p + (q - p) * 6. * t }
    else if t < 0.5 { q }
    else if t < 2. / 3. { p + (q - p) * (2. / 3. - t) * 6. }
    else { p }
}
