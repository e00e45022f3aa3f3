//! Text part of multipart bodies sent to the admin endpoints.
//!
//! The file parts are browser objects and are appended by the frontend; this
//! module only decides which text fields go on the wire and under which keys.

/// Ordered `(key, value)` text fields of a multipart body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartFields {
    fields: Vec<(&'static str, String)>,
}

impl MultipartFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the field unless the trimmed value is empty. Blank inputs are left
    /// off so the backend keeps its own defaults on update.
    pub fn text(mut self, key: &'static str, value: &str) -> Self {
        let value = value.trim();
        if !value.is_empty() {
            self.fields.push((key, value.to_string()));
        }
        self
    }

    pub fn optional(self, key: &'static str, value: Option<&str>) -> Self {
        match value {
            Some(v) => self.text(key, v),
            None => self,
        }
    }

    pub fn number(mut self, key: &'static str, value: Option<f64>) -> Self {
        if let Some(v) = value {
            self.fields.push((key, format_number(v)));
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Whole numbers go out without a trailing `.0`.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Parses an optional numeric form input. Blank means absent.
pub fn parse_number(raw: &str, label: &str) -> Result<Option<f64>, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    let value: f64 = raw
        .parse()
        .map_err(|_| format!("{label} must be a number"))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("{label} must be zero or more"));
    }
    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_skipped() {
        let fields = MultipartFields::new()
            .text("name", "  Lamp ")
            .text("brand", "   ")
            .optional("sku", None)
            .optional("tags", Some("home, light"))
            .number("weight", None)
            .number("price", Some(12.0))
            .number("originalPrice", Some(12.5));

        let collected: Vec<_> = fields.iter().collect();
        assert_eq!(
            collected,
            vec![
                ("name", "Lamp"),
                ("tags", "home, light"),
                ("price", "12"),
                ("originalPrice", "12.5"),
            ]
        );
    }

    #[test]
    fn parse_number_accepts_blank_and_rejects_negative() {
        assert_eq!(parse_number("", "Price"), Ok(None));
        assert_eq!(parse_number(" 4.5 ", "Price"), Ok(Some(4.5)));
        assert!(parse_number("-1", "Price").is_err());
        assert!(parse_number("abc", "Price").unwrap_err().contains("Price"));
    }
}
