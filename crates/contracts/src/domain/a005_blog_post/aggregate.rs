use crate::domain::a004_tag::aggregate::Tag;
use crate::shared::slice::Entity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: i64,
    pub title: String,
    pub summary: Option<String>,
    #[serde(default)]
    pub content: String,
    pub image: Option<String>,
    pub author: Option<String>,
    pub created_date: Option<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl BlogPost {
    /// Summary, or the first `max_chars` characters of the content
    pub fn excerpt(&self, max_chars: usize) -> String {
        if let Some(summary) = self.summary.as_deref().filter(|s| !s.trim().is_empty()) {
            return summary.trim().to_string();
        }
        let content = self.content.trim();
        if content.chars().count() <= max_chars {
            return content.to_string();
        }
        let cut: String = content.chars().take(max_chars).collect();
        format!("{}…", cut.trim_end())
    }

    /// Content split into paragraphs on blank lines
    pub fn paragraphs(&self) -> Vec<&str> {
        self.content
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }
}

impl Entity for BlogPost {
    fn entity_id(&self) -> i64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(summary: Option<&str>, content: &str) -> BlogPost {
        BlogPost {
            id: 1,
            title: "Care guide".into(),
            summary: summary.map(str::to_string),
            content: content.into(),
            image: None,
            author: None,
            created_date: None,
            tags: vec![],
        }
    }

    #[test]
    fn test_excerpt_prefers_summary() {
        assert_eq!(post(Some(" Short "), "Long text").excerpt(3), "Short");
        assert_eq!(post(None, "Washing linen").excerpt(7), "Washing…");
        assert_eq!(post(Some(""), "Tiny").excerpt(10), "Tiny");
    }

    #[test]
    fn test_paragraphs() {
        let p = post(None, "First.\n\n\n\nSecond.\n\n  ");
        assert_eq!(p.paragraphs(), vec!["First.", "Second."]);
    }
}
