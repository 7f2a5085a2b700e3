//! Target lightness and saturation curves.

use lazy_static::lazy_static;
pub(crate) mod ty;
use ty::*;

lazy_static! {
    /// The 11 step table 50, 100, 200, …, 900, 950.
    ///
    /// Lightness goes from 0.97 down to 0.06; saturation rises from
    /// 0.80 to 1.00 on 400–600 and falls back to 0.85.
    pub static ref DEFAULT_WEIGHTS: WeightTable = {
        WeightTable::new(vec![
            WeightStep::new(50,  0.97, 0.80),
            WeightStep::new(100, 0.93, 0.85),
            WeightStep::new(200, 0.86, 0.90),
            WeightStep::new(300, 0.76, 0.95),
            WeightStep::new(400, 0.65, 1.00),
            WeightStep::new(500, 0.54, 1.00),
            WeightStep::new(600, 0.45, 1.00),
            WeightStep::new(700, 0.36, 0.95),
            WeightStep::new(800, 0.27, 0.90),
            WeightStep::new(900, 0.18, 0.87),
            WeightStep::new(950, 0.06, 0.85),
        ]).unwrap_or_else(|e| unreachable!("built-in table: {e}"))
    };
}
