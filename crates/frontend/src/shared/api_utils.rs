//! URL helpers for the storefront API

use super::config::app_config;
use contracts::shared::api::ListQuery;

/// Base URL such as `http://localhost:3000`, from [`app_config`].
/// Empty outside a browser when nothing is configured.
pub fn api_base() -> String {
    app_config().api_base
}

/// Absolute URL of an API path, e.g. `/api/discounts/12`
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Path of a paged list endpoint, e.g. `/api/tags?page=2&size=10&search=red`
pub fn list_path(resource_path: &str, query: &ListQuery) -> String {
    match serde_qs::to_string(query) {
        Ok(qs) if !qs.is_empty() => format!("{}?{}", resource_path, qs),
        _ => resource_path.to_string(),
    }
}

/// Path of a single entity
pub fn item_path(resource_path: &str, id: i64) -> String {
    format!("{}/{}", resource_path, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_path() {
        let q = ListQuery::new(2, "red", 10);
        assert_eq!(list_path("/api/tags", &q), "/api/tags?page=2&size=10&search=red");

        let q = ListQuery::new(1, "", 12);
        assert_eq!(list_path("/api/products", &q), "/api/products?page=1&size=12");
    }

    #[test]
    fn test_item_path() {
        assert_eq!(item_path("/api/discounts", 7), "/api/discounts/7");
    }
}
