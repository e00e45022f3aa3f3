//! Lenient field decoders for payloads whose shape the backend does not keep
//! consistent between endpoints.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrVec {
    One(String),
    Many(Vec<String>),
}

/// Accepts `"a, b"`, `["a", "b"]` or `null`.
pub fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<StringOrVec>::deserialize(deserializer)?;
    Ok(match raw {
        None => Vec::new(),
        Some(StringOrVec::One(s)) => split_tags(&s),
        Some(StringOrVec::Many(v)) => v
            .into_iter()
            .flat_map(|s| split_tags(&s))
            .collect(),
    })
}

/// Comma separated tag input to a clean list.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

/// Number that may arrive as a JSON string (multipart round trips) or `null`.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_opt_f64(deserializer)?.unwrap_or_default())
}

pub fn lenient_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<NumberOrString>::deserialize(deserializer)?;
    Ok(match raw {
        None => None,
        Some(NumberOrString::Number(n)) => Some(n),
        Some(NumberOrString::Text(s)) => s.trim().parse().ok(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "string_or_vec")]
        tags: Vec<String>,
        #[serde(default, deserialize_with = "lenient_f64")]
        price: f64,
        #[serde(default, deserialize_with = "lenient_opt_f64")]
        weight: Option<f64>,
    }

    #[test]
    fn tags_from_string_or_array() {
        let a: Probe = serde_json::from_str(r#"{"tags":"x, y ,,z"}"#).unwrap();
        assert_eq!(a.tags, vec!["x", "y", "z"]);
        let b: Probe = serde_json::from_str(r#"{"tags":["x","y"]}"#).unwrap();
        assert_eq!(b.tags, vec!["x", "y"]);
        let c: Probe = serde_json::from_str(r#"{"tags":null}"#).unwrap();
        assert!(c.tags.is_empty());
        let d: Probe = serde_json::from_str(r#"{}"#).unwrap();
        assert!(d.tags.is_empty());
    }

    #[test]
    fn numbers_from_strings() {
        let p: Probe = serde_json::from_str(r#"{"price":"19.99","weight":"abc"}"#).unwrap();
        assert_eq!(p.price, 19.99);
        assert_eq!(p.weight, None);
        let q: Probe = serde_json::from_str(r#"{"price":5,"weight":1.5}"#).unwrap();
        assert_eq!(q.price, 5.0);
        assert_eq!(q.weight, Some(1.5));
    }
}
