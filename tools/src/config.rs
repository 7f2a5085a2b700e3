//! Hjson configuration: the seeds to expand and an optional weight
//! table.
//!
//! ```hjson
//! {
//!   palettes: { primary: "#3B82F6", accent: "#f0f" }
//!   weights: [ { weight: 50, lightness: 0.97, saturation: 0.8 }, ... ]
//! }
//! ```

use std::{io::Read, string::String};
use color_ramp::{WeightStep, WeightTable, DEFAULT_WEIGHTS};
use serde_hjson::Value::{self, *};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot parse configuration: {0}")]
    Parse(#[from] serde_hjson::Error),
    #[error("configuration: {0}")]
    Shape(String),
    #[error(transparent)]
    Table(#[from] color_ramp::Error),
}

fn shape<T>(msg: impl Into<String>) -> Result<T, ConfigError> {
    Err(ConfigError::Shape(msg.into()))
}

#[derive(Debug)]
pub struct Config {
    /// `(name, seed)` pairs sorted by name (Hjson objects are read into
    /// a `BTreeMap`, so the file order is lost).  Seeds are trimmed but
    /// not validated here.
    pub palettes: Vec<(String, String)>,
    pub weights: WeightTable,
}

impl Config {
    pub fn from_reader(rd: impl Read) -> Result<Self, ConfigError> {
        Self::from_value(serde_hjson::from_reader(rd)?)
    }

    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        Self::from_value(serde_hjson::from_str(s)?)
    }

    fn from_value(json: Value) -> Result<Self, ConfigError> {
        let m = match json {
            Object(m) => m,
            _ => return shape("top level must be an object") };
        let palettes = match m.get("palettes") {
            Some(Object(p)) => p.iter().map(|(name, seed)| match seed {
                String(seed) => Ok((name.clone(), seed.trim().to_string())),
                _ => shape(format!("seed of “{name}” must be a string")),
            }).collect::<Result<Vec<_>, _>>()?,
            Some(_) => return shape("“palettes” must be an object"),
            None => return shape("missing “palettes”"),
        };
        let weights = match m.get("weights") {
            Some(Array(a)) => WeightTable::new(
                a.iter().map(weight_step).collect::<Result<_, _>>()?)?,
            Some(_) => return shape("“weights” must be an array"),
            None => (*DEFAULT_WEIGHTS).clone(),
        };
        Ok(Config { palettes, weights })
    }
}

fn number(v: Option<&Value>) -> Option<f64> {
    match v {
        Some(F64(x)) => Some(*x),
        Some(I64(x)) => Some(*x as f64),
        Some(U64(x)) => Some(*x as f64),
        _ => None,
    }
}

fn weight_step(v: &Value) -> Result<WeightStep, ConfigError> {
    let o = match v {
        Object(o) => o,
        _ => return shape("each weight must be an object") };
    let weight = match number(o.get("weight")) {
        Some(w) if w.fract() == 0. && (0. ..= u16::MAX as f64).contains(&w)
            => w as u16,
        _ => return shape("“weight” must be an integer label"),
    };
    match (number(o.get("lightness")), number(o.get("saturation"))) {
        (Some(l), Some(s)) => Ok(WeightStep::new(weight, l, s)),
        _ => shape(format!("weight {weight}: missing lightness or saturation")),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_with_default_weights() {
        let c = Config::parse(r##"
        {
          palettes: {
            primary: "#3B82F6"
            accent: "#f0f"
          }
        }"##).unwrap();
        assert_eq!(c.palettes, [("accent".to_string(), "#f0f".to_string()),
                                ("primary".to_string(), "#3B82F6".to_string())]);
        assert_eq!(c.weights, *DEFAULT_WEIGHTS);
    }

    #[test]
    fn padded_seeds_are_trimmed() {
        let c = Config::parse(r##"
        {
          palettes: {
            p: "  #3B82F6 "
          }
        }"##).unwrap();
        assert_eq!(c.palettes[0].1, "#3B82F6");
    }

    #[test]
    fn custom_weights() {
        let c = Config::parse(r##"
        {
          palettes: {
            p: "#123456"
          }
          weights: [
            {
              weight: 1
              lightness: 0.9
              saturation: 1
            }
            {
              weight: 2
              lightness: 0.1
              saturation: 0.5
            }
          ]
        }"##).unwrap();
        assert_eq!(c.weights.weights().collect::<Vec<_>>(), [1, 2]);
        assert_eq!(c.weights.get(2).unwrap().saturation, 0.5);
    }

    #[test]
    fn bad_shapes() {
        assert!(matches!(Config::parse("{\n  weights: []\n}"),
                         Err(ConfigError::Shape(_))));
        assert!(matches!(Config::parse("{\n  palettes: {\n    p: 3\n  }\n}"),
                         Err(ConfigError::Shape(_))));
        assert!(matches!(Config::parse(r##"
        {
          palettes: {}
          weights: [
            {
              weight: 1
              lightness: 0.2
              saturation: 1
            }
            {
              weight: 2
              lightness: 0.8
              saturation: 1
            }
          ]
        }"##), Err(ConfigError::Table(_))));
    }
}
