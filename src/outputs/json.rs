//! JSON output.
//!
//! The JSON is the service's own shape (`totalArticles` plus `articles`), so
//! live, cached, and sample results are indistinguishable to consumers.

use crate::categories::CategoryDefinition;
use crate::models::ResultSet;

/// Pretty-printed JSON for a result set.
pub fn result_set(result: &ResultSet) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}

/// Pretty-printed JSON for the category registry.
pub fn categories(categories: &[CategoryDefinition]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(categories)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::{CategoryId, list_categories};
    use crate::mock::sample_result;
    use serde_json::Value;

    #[test]
    fn test_result_set_json_shape() {
        let set = sample_result(CategoryId::Devops);
        let value: Value = serde_json::from_str(&result_set(&set).unwrap()).unwrap();
        let articles = value["articles"].as_array().unwrap();
        assert_eq!(value["totalArticles"].as_u64().unwrap() as usize, articles.len());
        for field in ["title", "description", "content", "url", "image", "publishedAt"] {
            assert!(articles[0][field].is_string(), "missing {field}");
        }
        assert!(articles[0]["source"]["name"].is_string());
    }

    #[test]
    fn test_categories_json_uses_ids() {
        let value: Value = serde_json::from_str(&categories(list_categories()).unwrap()).unwrap();
        assert_eq!(value[0]["id"], "all");
        assert_eq!(value[6]["id"], "cybersecurity");
        assert_eq!(value[6]["icon"], "Shield");
    }
}
