use serde::{Serialize, Serializer};
use serde_json::Value;

/// One element of a descriptor's `data` array.
///
/// Object fields are kept as an ordered list so positional fallbacks
/// ("first declared field") are deterministic.
#[derive(Debug, Clone, PartialEq)]
pub enum DataPoint {
    /// `[x, y]` (or any array; only the first two entries are read).
    Sequence(Vec<Value>),
    /// `{"name": value, ...}` in declaration order.
    Fields(Vec<(String, Value)>),
    /// Anything else: a bare number, string, bool or null.
    Scalar(Value),
}

impl DataPoint {
    /// Value of the named field. Only objects have named fields.
    pub fn field(&self, name: &str) -> Option<&Value> {
        match self {
            DataPoint::Fields(fields) => fields.iter().find(|(k, _)| k == name).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Positional value: array index, or the nth declared object field.
    pub fn nth(&self, idx: usize) -> Option<&Value> {
        match self {
            DataPoint::Sequence(values) => values.get(idx),
            DataPoint::Fields(fields) => fields.get(idx).map(|(_, v)| v),
            DataPoint::Scalar(_) => None,
        }
    }
}

impl From<Value> for DataPoint {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(values) => DataPoint::Sequence(values),
            // serde_json is built with `preserve_order`, so this is declaration order.
            Value::Object(map) => DataPoint::Fields(map.into_iter().collect()),
            other => DataPoint::Scalar(other),
        }
    }
}

impl Serialize for DataPoint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            DataPoint::Sequence(values) => serializer.collect_seq(values),
            DataPoint::Fields(fields) => serializer.collect_map(fields.iter().map(|(k, v)| (k, v))),
            DataPoint::Scalar(value) => value.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn object_fields_keep_declaration_order() {
        let point = DataPoint::from(json!({"zeta": 1, "alpha": 2, "mid": 3}));
        assert_eq!(point.nth(0), Some(&json!(1)));
        assert_eq!(point.nth(1), Some(&json!(2)));
        assert_eq!(point.field("mid"), Some(&json!(3)));
        assert_eq!(point.field("missing"), None);
    }

    #[test]
    fn sequences_and_scalars() {
        let pair = DataPoint::from(json!(["A", 1]));
        assert_eq!(pair.nth(1), Some(&json!(1)));
        assert_eq!(pair.field("A"), None);

        let scalar = DataPoint::from(json!(42));
        assert_eq!(scalar, DataPoint::Scalar(json!(42)));
        assert_eq!(scalar.nth(0), None);
    }
}
