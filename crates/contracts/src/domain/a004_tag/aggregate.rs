use crate::shared::slice::Entity;
use crate::shared::validation::{FieldErrors, ValidationRules};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

impl Entity for Tag {
    fn entity_id(&self) -> i64 {
        self.id
    }
}

/// Request body for create/update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagDto {
    pub name: String,
}

pub mod fields {
    pub const NAME: &str = "name";
}

const NAME_RULES: ValidationRules = ValidationRules::required().with_length(None, Some(50));

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagForm {
    pub name: String,
}

impl TagForm {
    pub fn from_tag(t: &Tag) -> Self {
        Self {
            name: t.name.clone(),
        }
    }

    pub fn validate(&self) -> Result<TagDto, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(fields::NAME, NAME_RULES.validate_string(&self.name, "Name"));
        errors.into_result()?;
        Ok(TagDto {
            name: self.name.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_form() {
        assert!(TagForm::default().validate().is_err());
        let long = TagForm {
            name: "x".repeat(51),
        };
        assert_eq!(
            long.validate().unwrap_err().get(fields::NAME),
            Some("Name must not exceed 50 characters")
        );
        let ok = TagForm {
            name: " summer ".into(),
        };
        assert_eq!(ok.validate().unwrap().name, "summer");
    }
}
