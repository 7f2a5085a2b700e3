//! Ramp synthesis from a seed color.

use rgb::{RGBA, RGB8};
use log::debug;
use crate::{Error, Hsl, RGBColor, WeightTable, hex_to_rgb};

/// Colors generated from one seed, one per weight of a [`WeightTable`]
/// and in the same order.
///
/// Created by [`generate_ramp`] or [`RGBColor::ramp`].
#[derive(Clone, Debug, PartialEq)]
pub struct Ramp<Color> {
    anchor: u16,
    steps: Vec<(u16, Color)>,
}

/// Parse `seed_hex` and return its ramp over `weights`.  Nothing is
/// generated if the seed is not a valid `#rgb` or `#rrggbb` color.
///
/// # Example
///
/// ```
/// use color_ramp::{generate_ramp, Error, DEFAULT_WEIGHTS};
/// let ramp = generate_ramp("#3B82F6", &DEFAULT_WEIGHTS).unwrap();
/// assert_eq!(ramp.weights().collect::<Vec<_>>(),
///            [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950]);
/// assert!(matches!(generate_ramp("nope", &DEFAULT_WEIGHTS),
///                  Err(Error::InvalidFormat(_))));
/// ```
pub fn generate_ramp(seed_hex: &str, weights: &WeightTable)
                     -> Result<Ramp<RGB8>, Error> {
    let seed = hex_to_rgb(seed_hex)?;
    Ok(seed.ramp(weights))
}

impl<Color: RGBColor> Ramp<Color> {
    /// Ramp of opaque colors generated from the seed `hsl`.
    pub fn from_hsl(hsl: Hsl, weights: &WeightTable) -> Self {
        Self::synthesize(hsl, 255., weights)
    }

    /// Ramp generated from a seed given by its RGBA components (in
    /// \[0, 255\]).  The seed's alpha is kept on every color.
    pub(crate) fn from_seed(seed: RGBA<f64>, weights: &WeightTable) -> Self {
        Self::synthesize(Hsl::from_rgb(seed), seed.a, weights)
    }

    fn synthesize(seed: Hsl, alpha: f64, weights: &WeightTable) -> Self {
        let Hsl { h, s, l } = seed;
        let anchor = weights.nearest(l);
        let dl = l - anchor.lightness;
        // Relative to the seed's own saturation at the anchor.
        let ds = s - anchor.saturation * s;
        debug!("seed {seed:?} anchored at {}, Δl = {dl:.4}, Δs = {ds:.4}",
               anchor.weight);
        let steps = weights.iter().map(|w| {
            let l = (w.lightness + dl).clamp(0., 1.);
            let s = (w.saturation * s + ds).clamp(0., 1.);
            let mut rgba = Hsl { h, s, l }.to_rgba();
            rgba.a = alpha;
            (w.weight, Color::from_rgba(rgba))
        }).collect();
        Ramp { anchor: anchor.weight, steps }
    }
}

impl<Color> Ramp<Color> {
    /// The weight whose target lightness is nearest to the seed's.
    pub fn anchor(&self) -> u16 { self.anchor }

    /// Number of colors (the length of the weight table).
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.steps.len() }

    /// Iterate over `(weight, color)` in table order.
    pub fn iter(&self) -> std::slice::Iter<'_, (u16, Color)> {
        self.steps.iter()
    }

    /// The weight labels, in table order.
    pub fn weights(&self) -> impl Iterator<Item = u16> + '_ {
        self.steps.iter().map(|&(w, _)| w)
    }

    /// Return the color generated for `weight`, if the table has it.
    pub fn get(&self, weight: u16) -> Option<&Color> {
        self.steps.iter().find(|(w, _)| *w == weight).map(|(_, c)| c)
    }

    /// Returns the colors of the ramp.
    pub fn colors(&self) -> Vec<Color> where Color: Clone {
        self.steps.iter().map(|(_, c)| c.clone()).collect()
    }

    /// Consume the ramp, returning its `(weight, color)` pairs in table
    /// order.
    pub fn into_vec(self) -> Vec<(u16, Color)> { self.steps }
}

impl<Color> IntoIterator for Ramp<Color> {
    type Item = (u16, Color);
    type IntoIter = std::vec::IntoIter<(u16, Color)>;

    fn into_iter(self) -> Self::IntoIter { self.steps.into_iter() }
}

impl<'a, Color> IntoIterator for &'a Ramp<Color> {
    type Item = &'a (u16, Color);
    type IntoIter = std::slice::Iter<'a, (u16, Color)>;

    fn into_iter(self) -> Self::IntoIter { self.steps.iter() }
}
