use serde::{Deserialize, Serialize};

/// Severity / threat level shared by events, IOCs, gaps and playbooks
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Info,
}

impl Severity {
    /// Wire code used by the API
    pub fn code(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
            Severity::Info => "info",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
            Severity::Info => "Info",
        }
    }

    /// Levels an analyst can filter IOCs and playbooks by (no `info`)
    pub fn threat_levels() -> Vec<Severity> {
        vec![
            Severity::Critical,
            Severity::High,
            Severity::Medium,
            Severity::Low,
        ]
    }

    pub fn all() -> Vec<Severity> {
        vec![
            Severity::Critical,
            Severity::High,
            Severity::Medium,
            Severity::Low,
            Severity::Info,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "critical" => Some(Severity::Critical),
            "high" => Some(Severity::High),
            "medium" => Some(Severity::Medium),
            "low" => Some(Severity::Low),
            "info" => Some(Severity::Info),
            _ => None,
        }
    }

    /// Critical and high are treated as "malicious" in bulk checks
    pub fn is_malicious(&self) -> bool {
        matches!(self, Severity::Critical | Severity::High)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_is_case_insensitive() {
        assert_eq!(Severity::from_code("HIGH"), Some(Severity::High));
        assert_eq!(Severity::from_code("info"), Some(Severity::Info));
        assert_eq!(Severity::from_code("clean"), None);
    }

    #[test]
    fn test_ordering_puts_critical_first() {
        let mut levels = vec![Severity::Low, Severity::Critical, Severity::Medium];
        levels.sort();
        assert_eq!(levels, vec![Severity::Critical, Severity::Medium, Severity::Low]);
    }

    #[test]
    fn test_deserialize_lowercase() {
        let s: Severity = serde_json::from_str("\"critical\"").unwrap();
        assert_eq!(s, Severity::Critical);
    }
}
