//! Doubles on the structured command surface.
//!
//! JSON numbers cannot hold NaN or infinities, so those travel as the
//! strings `"NaN"`, `"inf"` and `"-inf"`. Finite values stay JSON numbers.

use models::Elapsed;

use serde::de::Error as DeError;
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

const NAN: &str = "NaN";
const INFINITY: &str = "inf";
const NEG_INFINITY: &str = "-inf";

pub fn to_value(number: f64) -> Value {
    if number.is_nan() {
        Value::from(NAN)
    } else if number == f64::INFINITY {
        Value::from(INFINITY)
    } else if number == f64::NEG_INFINITY {
        Value::from(NEG_INFINITY)
    } else {
        Value::from(number)
    }
}

pub fn from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => match text.as_str() {
            NAN => Some(f64::NAN),
            INFINITY => Some(f64::INFINITY),
            NEG_INFINITY => Some(f64::NEG_INFINITY),
            _ => None,
        },
        _ => None,
    }
}

/// `#[serde(with = "values")]` for a `Vec<f64>` that may hold non-finite values.
pub mod values {
    use super::*;

    pub fn serialize<S>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(values.len()))?;
        for value in values {
            seq.serialize_element(&to_value(*value))?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<Value>::deserialize(deserializer)?
            .iter()
            .map(|value| {
                from_value(value)
                    .ok_or_else(|| D::Error::custom(format!("expected a double, got {value}")))
            })
            .collect()
    }
}

/// Return value of a command: `[values, {"secs": s, "nanos": n}]`.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandReturn(#[serde(with = "values")] pub Vec<f64>, pub Elapsed);
