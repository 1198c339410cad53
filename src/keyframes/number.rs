use serde::de::{self, Deserializer, Unexpected, Visitor};

/// Parse a numeric string the way keyframe authors write them (`"1.5"`, `" 2 "`, `"-3e2"`).
///
/// Non-finite spellings (`"nan"`, `"inf"`) are rejected: NaN and infinities have no JSON
/// number form, so the resolved record could not be emitted faithfully.
pub fn parse_numeric_str(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Deserialize a present parameter into `Some(f64)`.
///
/// Used together with `#[serde(default)]`, so an absent key stays `None` while a present
/// `null`, boolean or non-numeric string fails the whole payload.
pub(crate) fn param<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(ParamVisitor).map(Some)
}

struct ParamVisitor;

impl<'de> Visitor<'de> for ParamVisitor {
    type Value = f64;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("a finite number or a numeric string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
        if v.is_finite() {
            Ok(v)
        } else {
            Err(E::invalid_value(Unexpected::Float(v), &self))
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
        parse_numeric_str(v).ok_or_else(|| E::invalid_value(Unexpected::Str(v), &self))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/keyframes/number.rs"]
mod tests;
