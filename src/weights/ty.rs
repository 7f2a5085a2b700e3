use crate::Error;

/// One position of a ramp together with its target curve values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightStep {
    /// Label of the step, e.g. `500`.  Higher is darker.
    pub weight: u16,
    /// Target lightness in \[0, 1\].
    pub lightness: f64,
    /// Target saturation factor in \[0, 1\].
    pub saturation: f64,
}

impl WeightStep {
    pub const fn new(weight: u16, lightness: f64, saturation: f64) -> Self {
        Self { weight, lightness, saturation }
    }
}

/// An ordered table of target lightness and saturation per weight.
///
/// Invariants: non-empty, distinct weights, all values in \[0, 1\],
/// lightness strictly decreasing in table order.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightTable {
    steps: Vec<WeightStep>, // Invariant: see above
}

impl WeightTable {
    /// Check the table invariants and build the table.
    pub fn new(steps: Vec<WeightStep>) -> Result<Self, Error> {
        if steps.is_empty() {
            return Err(Error::InvalidTable("no weights"))
        }
        let unit = |x: f64| (0. ..= 1.).contains(&x);
        if !steps.iter().all(|s| unit(s.lightness) && unit(s.saturation)) {
            return Err(Error::InvalidTable("value outside [0, 1]"))
        }
        if !steps.windows(2).all(|w| w[0].lightness > w[1].lightness) {
            return Err(Error::InvalidTable(
                "lightness must strictly decrease"))
        }
        for (i, s) in steps.iter().enumerate() {
            if steps[.. i].iter().any(|t| t.weight == s.weight) {
                return Err(Error::InvalidTable("duplicate weight"))
            }
        }
        Ok(Self { steps })
    }

    /// Number of weights (at least 1).
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.steps.len() }

    pub fn iter(&self) -> std::slice::Iter<'_, WeightStep> {
        self.steps.iter()
    }

    /// The weight labels in table order.
    pub fn weights(&self) -> impl Iterator<Item = u16> + '_ {
        self.steps.iter().map(|s| s.weight)
    }

    /// Return the step labelled `weight`, if any.
    pub fn get(&self, weight: u16) -> Option<&WeightStep> {
        self.steps.iter().find(|s| s.weight == weight)
    }

    /// Return the step whose target lightness is closest to
    /// `lightness`.  The table is scanned in order and only a strictly
    /// smaller difference replaces the current best, so ties go to
    /// the lighter (earlier) step.
    pub fn nearest(&self, lightness: f64) -> &WeightStep {
        let mut best = &self.steps[0];
        let mut best_diff = (lightness - best.lightness).abs();
        for s in &self.steps[1 ..] {
            let diff = (lightness - s.lightness).abs();
            if diff < best_diff {
                best = s;
                best_diff = diff;
            }
        }
        best
    }
}

impl<'a> IntoIterator for &'a WeightTable {
    type Item = &'a WeightStep;
    type IntoIter = std::slice::Iter<'a, WeightStep>;

    fn into_iter(self) -> Self::IntoIter { self.steps.iter() }
}
