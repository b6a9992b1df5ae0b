use crate::shared::slice::Entity;
use serde::{Deserialize, Serialize};

// ============================================================================
// Embedded references
// ============================================================================

/// Brand embedded in a product response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandRef {
    pub id: i64,
    pub name: String,
}

/// Category embedded in a product response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewUser {
    pub name: String,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub star: u8,
    #[serde(default)]
    pub text: String,
    pub user: Option<ReviewUser>,
}

impl Review {
    /// Star rating clamped into 0..=5
    pub fn stars(&self) -> u8 {
        self.star.min(5)
    }

    pub fn author_name(&self) -> &str {
        self.user
            .as_ref()
            .map(|u| u.name.as_str())
            .filter(|n| !n.trim().is_empty())
            .unwrap_or("Anonymous")
    }
}

// ============================================================================
// Aggregate
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub images: Vec<String>,
    pub brand: Option<BrandRef>,
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub sale: bool,
    pub description: Option<String>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl Product {
    pub fn main_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Mean star rating, `None` without reviews
    pub fn average_rating(&self) -> Option<f64> {
        if self.reviews.is_empty() {
            return None;
        }
        let total: u32 = self.reviews.iter().map(|r| u32::from(r.stars())).sum();
        Some(f64::from(total) / self.reviews.len() as f64)
    }

    pub fn brand_name(&self) -> Option<&str> {
        self.brand.as_ref().map(|b| b.name.as_str())
    }

    pub fn category_name(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.name.as_str())
    }
}

impl Entity for Product {
    fn entity_id(&self) -> i64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_with_missing_nested_fields() {
        let json = r#"{"id":5,"name":"Linen shirt","price":39.9}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert!(p.brand.is_none());
        assert!(p.images.is_empty());
        assert!(!p.in_stock());
        assert_eq!(p.main_image(), None);
        assert_eq!(p.average_rating(), None);
    }

    #[test]
    fn test_average_rating_and_authors() {
        let json = r#"{"id":1,"name":"Sneakers","price":80,"stock":3,"sale":true,
            "images":["/a.jpg","/b.jpg"],
            "brand":{"id":2,"name":"Acme"},
            "reviews":[{"star":5,"text":"great","user":{"name":"Kim","avatar":null}},
                       {"star":9,"text":"","user":null},
                       {"star":2}]}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.main_image(), Some("/a.jpg"));
        assert_eq!(p.brand_name(), Some("Acme"));
        assert_eq!(p.average_rating(), Some(4.0));
        assert_eq!(p.reviews[0].author_name(), "Kim");
        assert_eq!(p.reviews[1].author_name(), "Anonymous");
    }
}
