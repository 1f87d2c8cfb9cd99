//! Visual property values carried by motion descriptors.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered property name -> value mapping (e.g. `opacity`, `y`, `scale`).
pub type PropertyMap = IndexMap<String, MotionValue>;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum MotionValue {
    Number(f64),
    /// Ordered keyframes for oscillating or looping effects.
    Keyframes(Vec<f64>),
    /// CSS function values such as `blur(10px)`.
    Text(String),
}

impl From<f64> for MotionValue {
    fn from(v: f64) -> Self {
        MotionValue::Number(v)
    }
}

impl From<Vec<f64>> for MotionValue {
    fn from(v: Vec<f64>) -> Self {
        MotionValue::Keyframes(v)
    }
}

impl From<&str> for MotionValue {
    fn from(v: &str) -> Self {
        MotionValue::Text(v.to_string())
    }
}

/// Build a [`PropertyMap`] preserving the given order.
pub fn props<const N: usize>(pairs: [(&str, MotionValue); N]) -> PropertyMap {
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untagged_serde_shapes() {
        let m = props([
            ("opacity", 0.0.into()),
            ("scale", vec![1.0, 1.05, 1.0].into()),
            ("filter", "blur(10px)".into()),
        ]);
        let s = serde_json::to_string(&m).unwrap();
        assert_eq!(s, r#"{"opacity":0.0,"scale":[1.0,1.05,1.0],"filter":"blur(10px)"}"#);
        let back: PropertyMap = serde_json::from_str(&s).unwrap();
        assert_eq!(back, m);
        assert_eq!(back.get_index(1).map(|(k, _)| k.as_str()), Some("scale"));
    }
}
