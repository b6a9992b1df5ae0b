//! Declarative field validation for admin and checkout forms

use std::collections::BTreeMap;

/// Validation rules for a form field
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub custom_error: Option<&'static str>,
}

impl ValidationRules {
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
            custom_error: None,
        }
    }

    pub const fn required() -> Self {
        Self {
            required: true,
            ..Self::none()
        }
    }

    pub const fn with_length(self, min: Option<usize>, max: Option<usize>) -> Self {
        Self {
            min_length: min,
            max_length: max,
            ..self
        }
    }

    pub const fn with_range(self, min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max, ..self }
    }

    /// Replaces the range message
    pub const fn with_message(self, message: &'static str) -> Self {
        Self {
            custom_error: Some(message),
            ..self
        }
    }

    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Validate a string value against the rules
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        let trimmed = value.trim();
        if self.required && trimmed.is_empty() {
            return Err(format!("{} is required", field_label));
        }
        if trimmed.is_empty() {
            return Ok(());
        }

        let len = trimmed.chars().count();
        if let Some(min) = self.min_length {
            if len < min {
                return Err(format!("{} must be at least {} characters", field_label, min));
            }
        }
        if let Some(max) = self.max_length {
            if len > max {
                return Err(format!("{} must not exceed {} characters", field_label, max));
            }
        }
        Ok(())
    }

    /// Validate a numeric value against min/max rules
    pub fn validate_number(&self, value: f64, field_label: &str) -> Result<(), String> {
        if let Some(min) = self.min {
            if value < min {
                return Err(self
                    .custom_error
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("{} must be at least {}", field_label, min)));
            }
        }
        if let Some(max) = self.max {
            if value > max {
                return Err(self
                    .custom_error
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("{} must not exceed {}", field_label, max)));
            }
        }
        Ok(())
    }

    /// Parse and validate numeric text. `Ok(None)` for an empty optional field.
    pub fn parse_number(&self, raw: &str, field_label: &str) -> Result<Option<f64>, String> {
        let raw = raw.trim();
        if raw.is_empty() {
            if self.required {
                return Err(format!("{} is required", field_label));
            }
            return Ok(None);
        }
        let value: f64 = raw
            .parse()
            .ok()
            .filter(|v: &f64| v.is_finite())
            .ok_or_else(|| format!("{} must be a number", field_label))?;
        self.validate_number(value, field_label)?;
        Ok(Some(value))
    }

    /// Same as [`parse_number`](Self::parse_number) for whole numbers
    pub fn parse_integer(&self, raw: &str, field_label: &str) -> Result<Option<i64>, String> {
        let raw = raw.trim();
        if raw.is_empty() {
            if self.required {
                return Err(format!("{} is required", field_label));
            }
            return Ok(None);
        }
        let value: i64 = raw
            .parse()
            .map_err(|_| format!("{} must be a whole number", field_label))?;
        self.validate_number(value as f64, field_label)?;
        Ok(Some(value))
    }
}

/// Per-field validation messages keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        // first error per field wins
        self.0.entry(field).or_insert_with(|| message.into());
    }

    /// Records the error of a check, if any
    pub fn check(&mut self, field: &'static str, result: Result<(), String>) {
        if let Err(message) = result {
            self.insert(field, message);
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Keeps only the errors of fields listed in `fields`.
    /// Used to clear an error once its field becomes valid.
    pub fn retain_fields(&mut self, fields: &FieldErrors) {
        self.0.retain(|k, _| fields.contains(k));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_string() {
        let rules = ValidationRules::required();
        assert_eq!(
            rules.validate_string("  ", "Name").unwrap_err(),
            "Name is required"
        );
        assert!(rules.validate_string("Shoes", "Name").is_ok());
        assert!(ValidationRules::none().validate_string("", "Name").is_ok());
    }

    #[test]
    fn test_length_counts_chars() {
        let rules = ValidationRules::required().with_length(Some(3), Some(5));
        assert!(rules.validate_string("ab", "Code").is_err());
        assert!(rules.validate_string("ëëë", "Code").is_ok());
        assert_eq!(
            rules.validate_string("abcdef", "Code").unwrap_err(),
            "Code must not exceed 5 characters"
        );
    }

    #[test]
    fn test_parse_number() {
        let rules = ValidationRules::none().with_range(Some(0.0), None);
        assert_eq!(rules.parse_number("", "Min order").unwrap(), None);
        assert_eq!(rules.parse_number("12.5", "Min order").unwrap(), Some(12.5));
        assert_eq!(
            rules.parse_number("abc", "Min order").unwrap_err(),
            "Min order must be a number"
        );
        assert!(rules.parse_number("-1", "Min order").is_err());
        assert!(rules.parse_number("NaN", "Min order").is_err());
    }

    #[test]
    fn test_custom_range_message() {
        let rules = ValidationRules::required()
            .with_range(None, Some(100.0))
            .with_message("Discount value must not exceed 100%");
        assert_eq!(
            rules.parse_number("150", "Value").unwrap_err(),
            "Discount value must not exceed 100%"
        );
    }

    #[test]
    fn test_parse_integer() {
        let rules = ValidationRules::none().with_range(Some(1.0), None);
        assert_eq!(rules.parse_integer("3", "Max usage").unwrap(), Some(3));
        assert!(rules.parse_integer("2.5", "Max usage").is_err());
        assert!(rules.parse_integer("0", "Max usage").is_err());
    }

    #[test]
    fn test_field_errors() {
        let mut errors = FieldErrors::new();
        errors.insert("name", "first");
        errors.insert("name", "second");
        errors.check("code", Ok(()));
        errors.check("value", Err("bad".into()));
        assert_eq!(errors.get("name"), Some("first"));
        assert_eq!(errors.len(), 2);

        let mut still_invalid = FieldErrors::new();
        still_invalid.insert("value", "bad");
        errors.retain_fields(&still_invalid);
        assert!(!errors.contains("name"));
        assert!(errors.contains("value"));
        assert!(errors.into_result().is_err());
    }
}
