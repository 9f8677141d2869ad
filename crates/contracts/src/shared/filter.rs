//! Filter values shared by the dashboard query structs.
//!
//! Every filter dropdown carries an "all" entry. It is a UI-only value and
//! must never reach the API as a query parameter.

/// Value of the catch-all entry in filter dropdowns
pub const FILTER_ALL: &str = "all";

/// Turn a dropdown value into an optional query parameter.
///
/// `"all"` and blank values mean "no filter".
pub fn filter_param(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(FILTER_ALL) {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Case-insensitive substring match used by client-side search boxes
pub fn matches_query(haystack: &str, query: &str) -> bool {
    haystack.to_lowercase().contains(&query.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_param() {
        assert_eq!(filter_param("all"), None);
        assert_eq!(filter_param("ALL"), None);
        assert_eq!(filter_param("  "), None);
        assert_eq!(filter_param("ip"), Some("ip".to_string()));
        assert_eq!(filter_param(" high "), Some("high".to_string()));
    }

    #[test]
    fn test_matches_query() {
        assert!(matches_query("Spearphishing Attachment", "phish"));
        assert!(matches_query("T1566.001", "t1566"));
        assert!(!matches_query("Valid Accounts", "phish"));
        assert!(matches_query("anything", ""));
    }
}
