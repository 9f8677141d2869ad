//! Option lists for the dashboard filter dropdowns

use contracts::dashboards::d410_threat_timeline::{DAYS_BACK_OPTIONS, DEFAULT_DAYS_BACK, EVENT_TYPES};
use contracts::enums::{IocType, Severity};
use contracts::shared::filter::FILTER_ALL;

use crate::shared::components::ui::SelectOption;

/// Prepend the catch-all entry
pub fn with_all(
    label: &str,
    options: impl IntoIterator<Item = SelectOption>,
) -> Vec<SelectOption> {
    std::iter::once(SelectOption::new(FILTER_ALL, label))
        .chain(options)
        .collect()
}

pub fn severity_options(levels: &[Severity]) -> Vec<SelectOption> {
    levels
        .iter()
        .map(|s| SelectOption::new(s.code(), s.display_name()))
        .collect()
}

pub fn ioc_type_options() -> Vec<SelectOption> {
    IocType::searchable()
        .into_iter()
        .map(|t| SelectOption::new(t.code(), t.display_name()))
        .collect()
}

pub fn event_type_options() -> Vec<SelectOption> {
    EVENT_TYPES
        .iter()
        .map(|(code, name)| SelectOption::new(*code, *name))
        .collect()
}

pub fn days_back_options() -> Vec<SelectOption> {
    DAYS_BACK_OPTIONS
        .iter()
        .map(|d| SelectOption::new(d.to_string(), format!("Last {} days", d)))
        .collect()
}

/// Dropdown value back to a look-back window
pub fn parse_days_back(value: &str) -> u32 {
    value
        .parse()
        .ok()
        .filter(|d| DAYS_BACK_OPTIONS.contains(d))
        .unwrap_or(DEFAULT_DAYS_BACK)
}

/// Plain string values shown as-is
pub fn plain_options<S: AsRef<str>>(values: &[S]) -> Vec<SelectOption> {
    values
        .iter()
        .map(|v| SelectOption::new(v.as_ref(), v.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_all_comes_first() {
        let opts = with_all("All Severities", severity_options(&Severity::all()));
        assert_eq!(opts[0], SelectOption::new("all", "All Severities"));
        assert_eq!(opts.len(), 6);
        assert_eq!(opts[1].value, "critical");
    }

    #[test]
    fn test_threat_levels_exclude_info() {
        let opts = severity_options(&Severity::threat_levels());
        assert!(opts.iter().all(|o| o.value != "info"));
        assert_eq!(opts.len(), 4);
    }

    #[test]
    fn test_days_back() {
        let opts = days_back_options();
        assert_eq!(opts.len(), 3);
        assert_eq!(opts[1], SelectOption::new("30", "Last 30 days"));
        assert_eq!(parse_days_back("90"), 90);
        assert_eq!(parse_days_back("45"), DEFAULT_DAYS_BACK);
        assert_eq!(parse_days_back("abc"), DEFAULT_DAYS_BACK);
    }

    #[test]
    fn test_ioc_types() {
        let values: Vec<_> = ioc_type_options().into_iter().map(|o| o.value).collect();
        assert_eq!(values, vec!["ip", "domain", "hash", "email", "url"]);
    }

    #[test]
    fn test_plain_options() {
        let opts = plain_options(&["APT28", "FIN7"]);
        assert_eq!(opts[1], SelectOption::new("FIN7", "FIN7"));
    }
}
