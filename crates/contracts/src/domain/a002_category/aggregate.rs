use crate::shared::slice::Entity;
use crate::shared::validation::{FieldErrors, ValidationRules};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CategoryStatus {
    #[default]
    Active,
    Inactive,
}

impl CategoryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryStatus::Active => "ACTIVE",
            CategoryStatus::Inactive => "INACTIVE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryStatus::Active => "Active",
            CategoryStatus::Inactive => "Inactive",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "INACTIVE" => CategoryStatus::Inactive,
            _ => CategoryStatus::Active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    #[serde(default)]
    pub status: CategoryStatus,
    pub created_date: Option<String>,
    pub updated_date: Option<String>,
}

impl Entity for Category {
    fn entity_id(&self) -> i64 {
        self.id
    }
}

/// Request body for create/update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub status: CategoryStatus,
}

pub mod fields {
    pub const NAME: &str = "name";
    pub const DESCRIPTION: &str = "description";
    pub const IMAGE: &str = "image";
}

const NAME_RULES: ValidationRules = ValidationRules::required().with_length(None, Some(100));
const DESCRIPTION_RULES: ValidationRules = ValidationRules::none().with_length(None, Some(500));

/// Editable form state of the category screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryForm {
    pub name: String,
    pub description: String,
    pub image: String,
    pub status: CategoryStatus,
}

impl CategoryForm {
    pub fn from_category(c: &Category) -> Self {
        Self {
            name: c.name.clone(),
            description: c.description.clone().unwrap_or_default(),
            image: c.image.clone().unwrap_or_default(),
            status: c.status,
        }
    }

    pub fn validate(&self) -> Result<CategoryDto, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(fields::NAME, NAME_RULES.validate_string(&self.name, "Name"));
        errors.check(
            fields::DESCRIPTION,
            DESCRIPTION_RULES.validate_string(&self.description, "Description"),
        );
        let image = self.image.trim();
        if !image.is_empty()
            && !(image.starts_with("http://") || image.starts_with("https://") || image.starts_with('/'))
        {
            errors.insert(
                fields::IMAGE,
                "Image must be an absolute URL or a path starting with /",
            );
        }
        errors.into_result()?;

        Ok(CategoryDto {
            name: self.name.trim().to_string(),
            description: non_empty(&self.description),
            image: non_empty(&self.image),
            status: self.status,
        })
    }
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        let json = r#"{"id":1,"name":"Shoes","status":"INACTIVE","createdDate":"2025-01-02T10:00:00"}"#;
        let c: Category = serde_json::from_str(json).unwrap();
        assert_eq!(c.status, CategoryStatus::Inactive);
        assert_eq!(CategoryStatus::parse(c.status.as_str()), c.status);
    }

    #[test]
    fn test_form_requires_name() {
        let errors = CategoryForm::default().validate().unwrap_err();
        assert_eq!(errors.get(fields::NAME), Some("Name is required"));
    }

    #[test]
    fn test_form_rejects_relative_image() {
        let form = CategoryForm {
            name: "Bags".into(),
            image: "img/bags.png".into(),
            ..Default::default()
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.contains(fields::IMAGE));
        assert!(!errors.contains(fields::NAME));
    }

    #[test]
    fn test_form_builds_dto() {
        let form = CategoryForm {
            name: "  Bags ".into(),
            description: "".into(),
            image: "/img/bags.png".into(),
            status: CategoryStatus::Inactive,
        };
        let dto = form.validate().unwrap();
        assert_eq!(dto.name, "Bags");
        assert_eq!(dto.description, None);
        assert_eq!(dto.image.as_deref(), Some("/img/bags.png"));
    }
}
