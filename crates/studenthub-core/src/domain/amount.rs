//! Prices arrive as JSON numbers or, from decimal columns, as strings.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    #[derive(serde::Deserialize)]
    struct Priced {
        #[serde(default, deserialize_with = "super::deserialize")]
        price: Option<f64>,
    }

    #[test]
    fn number_or_string() {
        let a: Priced = serde_json::from_str(r#"{"price": 12.5}"#).unwrap();
        let b: Priced = serde_json::from_str(r#"{"price": "12.50"}"#).unwrap();
        let c: Priced = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(a.price, Some(12.5));
        assert_eq!(b.price, Some(12.5));
        assert_eq!(c.price, None);
    }
}
