use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Validation failures keyed by the name of the offending field, so that
/// clients can render them inline next to their inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn merge(&mut self, other: FieldErrors) {
        for (field, messages) in other.0 {
            self.0.entry(field).or_default().extend(messages);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Keeps the value of `result`, recording its errors instead when it failed.
    pub fn collect<T>(&mut self, result: Result<T, FieldErrors>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(errors) => {
                self.merge(errors);
                None
            }
        }
    }

    /// `Ok(value)` when nothing was recorded.
    pub fn finish<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{}: {}", field, message)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Non-empty, trimmed text of at most `max_len` characters.
pub fn required_text(field: &str, raw: &str, max_len: usize) -> Result<String, FieldErrors> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(FieldErrors::single(field, "This field may not be blank."));
    }
    optional_text(field, value, max_len)
}

pub fn optional_text(field: &str, raw: &str, max_len: usize) -> Result<String, FieldErrors> {
    let value = raw.trim();
    if value.chars().count() > max_len {
        return Err(FieldErrors::single(
            field,
            format!("Ensure this field has no more than {} characters.", max_len),
        ));
    }
    Ok(value.to_string())
}

/// Parses a quantity-like input that must be an integer `>= 0`.
/// An empty input means zero.
pub fn parse_non_negative(field: &str, raw: &str) -> Result<i64, FieldErrors> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }
    match raw.parse::<i64>() {
        Ok(n) if n >= 0 => Ok(n),
        Ok(_) => Err(FieldErrors::single(
            field,
            "Ensure this value is greater than or equal to 0.",
        )),
        Err(_) => Err(FieldErrors::single(field, "A valid integer is required.")),
    }
}

/// Like [`parse_non_negative`], but a blank input is rejected.
pub fn parse_required_non_negative(field: &str, raw: &str) -> Result<i64, FieldErrors> {
    if raw.trim().is_empty() {
        return Err(FieldErrors::single(field, "This field is required."));
    }
    parse_non_negative(field, raw)
}

/// Parses an integer input that must be `> 0`. Blank is rejected.
pub fn parse_positive(field: &str, raw: &str) -> Result<i64, FieldErrors> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FieldErrors::single(field, "This field is required."));
    }
    match raw.parse::<i64>() {
        Ok(n) if n > 0 => Ok(n),
        Ok(_) => Err(FieldErrors::single(
            field,
            "Ensure this value is greater than 0.",
        )),
        Err(_) => Err(FieldErrors::single(field, "A valid integer is required.")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_non_negative() {
        assert_eq!(parse_non_negative("quantity", "12").unwrap(), 12);
        assert_eq!(parse_non_negative("quantity", " 0 ").unwrap(), 0);
        assert_eq!(parse_non_negative("quantity", "").unwrap(), 0);

        let err = parse_non_negative("quantity", "-1").unwrap_err();
        assert!(err.contains("quantity"));
        let err = parse_non_negative("quantity", "1.5").unwrap_err();
        assert_eq!(err.get("quantity").unwrap(), ["A valid integer is required."]);
    }

    #[test]
    fn test_parse_required_non_negative_rejects_blank() {
        assert_eq!(parse_required_non_negative("quantity", "0").unwrap(), 0);
        let err = parse_required_non_negative("quantity", "  ").unwrap_err();
        assert_eq!(err.get("quantity").unwrap(), ["This field is required."]);
        assert!(parse_required_non_negative("quantity", "-2").is_err());
    }

    #[test]
    fn test_parse_positive_rejects_zero_and_blank() {
        assert_eq!(parse_positive("quantity", "3").unwrap(), 3);
        assert!(parse_positive("quantity", "0").is_err());
        assert!(parse_positive("quantity", "").is_err());
        assert!(parse_positive("quantity", "abc").is_err());
    }

    #[test]
    fn test_required_text_trims_and_limits() {
        assert_eq!(required_text("name", "  Resistor ", 100).unwrap(), "Resistor");
        assert!(required_text("name", "   ", 100).unwrap_err().contains("name"));
        assert!(required_text("name", "abcdef", 5).is_err());
    }

    #[test]
    fn test_collect_and_finish() {
        let mut errors = FieldErrors::new();
        let name = errors.collect(required_text("name", "", 10));
        let qty = errors.collect(parse_non_negative("quantity", "7"));
        assert!(name.is_none());
        assert_eq!(qty, Some(7));
        let err = errors.finish(()).unwrap_err();
        assert!(err.contains("name"));
        assert!(!err.contains("quantity"));
    }

    #[test]
    fn test_json_and_display() {
        let mut errors = FieldErrors::single("quantity", "too big");
        errors.add("name", "taken");
        assert_eq!(errors.to_json(), r#"{"name":["taken"],"quantity":["too big"]}"#);
        assert_eq!(errors.to_string(), "name: taken; quantity: too big");
    }
}
