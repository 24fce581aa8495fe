use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Integer parsed from a loosely typed request field.
///
/// Parsing never fails: input that carries no leading integer becomes the
/// not-a-number marker, which serializes as `null`. This leniency is
/// intentional and callers must not turn it into a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Numeric(Option<i64>);

impl Numeric {
    pub const NAN: Numeric = Numeric(None);

    pub fn new(value: i64) -> Self {
        Self(Some(value))
    }

    pub fn value(&self) -> Option<i64> {
        self.0
    }

    pub fn is_nan(&self) -> bool {
        self.0.is_none()
    }

    /// Numeric equality; not-a-number equals nothing, itself included.
    pub fn same_as(&self, other: &Numeric) -> bool {
        matches!((self.0, other.0), (Some(a), Some(b)) if a == b)
    }

    /// Strict greater-than; false whenever either side is not-a-number.
    pub fn greater_than(&self, other: &Numeric) -> bool {
        matches!((self.0, other.0), (Some(a), Some(b)) if a > b)
    }

    pub fn parse_value(value: &Value) -> Self {
        match value {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::new(i)
                } else {
                    n.as_f64()
                        .filter(|f| f.is_finite())
                        .map(|f| Self::new(f.trunc() as i64))
                        .unwrap_or(Self::NAN)
                }
            }
            Value::String(s) => Self::parse_str(s),
            _ => Self::NAN,
        }
    }

    /// Reads an optional sign followed by the leading run of digits,
    /// ignoring whatever comes after it (`"12abc"` is 12).
    pub fn parse_str(input: &str) -> Self {
        let trimmed = input.trim_start();
        let (negative, rest) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let digits_end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        if digits_end == 0 {
            return Self::NAN;
        }

        match rest[..digits_end].parse::<i64>() {
            Ok(n) if negative => Self::new(-n),
            Ok(n) => Self::new(n),
            Err(_) => Self::NAN,
        }
    }
}
