//! Category Model
//!
//! Categories are plain strings. The effective set shown to the operator is
//! the fixed default list followed by any extra names found on the backend.

use std::collections::HashSet;

/// Built-in categories, always listed first and in this order
pub const DEFAULT_CATEGORIES: [&str; 11] = [
    "Welcome Drinks",
    "Milk Shake",
    "Raita",
    "Rice",
    "Thali",
    "Gujarati Sabzi",
    "Punjabi Sabzi",
    "South Indian",
    "Chinese",
    "Snacks",
    "Desserts",
];

/// Default category list as owned strings
pub fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

/// Merge backend categories into the default list
///
/// Defaults keep their position; remote names that are not already present
/// are appended in the order the backend returned them. Matching is exact.
pub fn merge_categories<S: AsRef<str>>(remote: &[S]) -> Vec<String> {
    let mut merged = default_categories();
    let mut seen: HashSet<String> = merged.iter().cloned().collect();

    for name in remote {
        let name = name.as_ref();
        if seen.insert(name.to_string()) {
            merged.push(name.to_string());
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_only() {
        let merged = merge_categories::<&str>(&[]);
        assert_eq!(merged.len(), 11);
        assert_eq!(merged[0], "Welcome Drinks");
        assert_eq!(merged[10], "Desserts");
    }

    #[test]
    fn test_remote_values_appended_once() {
        let merged = merge_categories(&["Snacks", "Beverages", "Beverages", "Soups"]);
        assert_eq!(merged.len(), 13);
        assert_eq!(&merged[11..], &["Beverages".to_string(), "Soups".to_string()]);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let merged = merge_categories(&["snacks"]);
        assert_eq!(merged.len(), 12);
        assert_eq!(merged.last().map(String::as_str), Some("snacks"));
    }
}
