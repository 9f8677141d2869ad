use crate::enums::Severity;
use crate::shared::filter::filter_param;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Look-back windows offered on the timeline page
pub const DAYS_BACK_OPTIONS: [u32; 3] = [7, 30, 90];

/// Default look-back window
pub const DEFAULT_DAYS_BACK: u32 = 30;

/// Event type filter values with display names
pub const EVENT_TYPES: [(&str, &str); 5] = [
    ("detection", "Detection"),
    ("attack", "Attack"),
    ("ioc", "IOC"),
    ("mitigation", "Mitigation"),
    ("alert", "Alert"),
];

/// Query parameters of `GET /threat-timeline/events`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineQuery {
    pub days_back: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threat_actor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
}

impl TimelineQuery {
    /// Build a query from raw dropdown values ("all" drops the filter)
    pub fn from_filters(days_back: u32, severity: &str, event_type: &str) -> Self {
        Self {
            days_back,
            severity: filter_param(severity),
            threat_actor: None,
            event_type: filter_param(event_type),
        }
    }
}

impl Default for TimelineQuery {
    fn default() -> Self {
        Self {
            days_back: DEFAULT_DAYS_BACK,
            severity: None,
            threat_actor: None,
            event_type: None,
        }
    }
}

/// Single event on the threat timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreatEvent {
    pub event_id: String,
    pub timestamp: String,
    /// "detection", "attack", "ioc", "mitigation", "alert"
    pub event_type: String,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub threat_actor: Option<String>,
    pub attack_vector: Option<String>,
    #[serde(default)]
    pub affected_systems: Vec<String>,
    #[serde(default)]
    pub iocs: Vec<String>,
    #[serde(default)]
    pub mitre_tactics: Vec<String>,
    /// "ongoing", "mitigated", "investigating", "resolved"
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreatCampaign {
    pub campaign_id: String,
    pub name: String,
    pub threat_actor: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub total_events: u32,
    pub severity: Severity,
    #[serde(default)]
    pub targeted_sectors: Vec<String>,
    #[serde(default)]
    pub attack_vectors: Vec<String>,
    /// 0..=1
    pub success_rate: f64,
}

impl ThreatCampaign {
    pub fn is_active(&self) -> bool {
        self.end_date.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingThreat {
    pub name: String,
    pub count: u32,
    /// "increasing" or "stable"
    pub trend: String,
    #[serde(default)]
    pub severity_distribution: HashMap<String, u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

/// Response of `GET /threat-timeline/events`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineAnalysis {
    pub total_events: u32,
    #[serde(default)]
    pub date_range: DateRange,
    #[serde(default)]
    pub events: Vec<ThreatEvent>,
    #[serde(default)]
    pub campaigns: Vec<ThreatCampaign>,
    #[serde(default)]
    pub attack_pattern_insights: Vec<String>,
    #[serde(default)]
    pub trending_threats: Vec<TrendingThreat>,
}

impl TimelineAnalysis {
    /// Events sorted by timestamp, newest first (ISO-8601 strings sort lexically)
    pub fn events_newest_first(&self) -> Vec<ThreatEvent> {
        let mut events = self.events.clone();
        events.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        events
    }

    pub fn count_by_severity(&self, severity: Severity) -> usize {
        self.events.iter().filter(|e| e.severity == severity).count()
    }

    pub fn active_campaigns(&self) -> usize {
        self.campaigns.iter().filter(|c| c.is_active()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "total_events": 3,
        "date_range": {"start": "2024-05-01", "end": "2024-05-31"},
        "events": [
            {"event_id": "evt_1", "timestamp": "2024-05-02T10:00:00", "event_type": "attack",
             "severity": "critical", "title": "Ransomware deployment", "description": "LockBit payload",
             "threat_actor": "FIN7", "attack_vector": "Phishing", "affected_systems": ["srv-01"],
             "iocs": ["185.220.101.45"], "mitre_tactics": ["Impact"], "status": "ongoing"},
            {"event_id": "evt_2", "timestamp": "2024-05-20T08:30:00", "event_type": "detection",
             "severity": "medium", "title": "Beaconing", "description": "C2 beacon",
             "threat_actor": null, "attack_vector": null, "status": "investigating"},
            {"event_id": "evt_3", "timestamp": "2024-05-11T23:59:00", "event_type": "alert",
             "severity": "critical", "title": "Credential dump", "description": "LSASS access",
             "threat_actor": "APT29", "attack_vector": "Valid Accounts", "status": "mitigated"}
        ],
        "campaigns": [
            {"campaign_id": "camp_1", "name": "Operation Ghost", "threat_actor": "APT29",
             "start_date": "2024-04-01", "end_date": null, "total_events": 12, "severity": "high",
             "targeted_sectors": ["Government"], "attack_vectors": ["Phishing"], "success_rate": 0.35},
            {"campaign_id": "camp_2", "name": "Carbanak Revival", "threat_actor": "FIN7",
             "start_date": "2024-01-10", "end_date": "2024-03-01", "total_events": 5, "severity": "medium",
             "success_rate": 0.1}
        ],
        "attack_pattern_insights": ["Phishing remains the top initial access vector"],
        "trending_threats": [
            {"name": "Phishing", "count": 9, "trend": "increasing",
             "severity_distribution": {"critical": 2, "high": 4, "medium": 3}}
        ]
    }"#;

    #[test]
    fn test_decode_timeline() {
        let analysis: TimelineAnalysis = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(analysis.events.len(), 3);
        assert!(analysis.events[1].affected_systems.is_empty());
        assert_eq!(analysis.trending_threats[0].severity_distribution["high"], 4);
        assert_eq!(analysis.date_range.end, "2024-05-31");
    }

    #[test]
    fn test_events_newest_first() {
        let analysis: TimelineAnalysis = serde_json::from_str(SAMPLE).unwrap();
        let ids: Vec<_> = analysis
            .events_newest_first()
            .into_iter()
            .map(|e| e.event_id)
            .collect();
        assert_eq!(ids, vec!["evt_2", "evt_3", "evt_1"]);
    }

    #[test]
    fn test_counts() {
        let analysis: TimelineAnalysis = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(analysis.count_by_severity(Severity::Critical), 2);
        assert_eq!(analysis.active_campaigns(), 1);
    }

    #[test]
    fn test_query_from_filters() {
        let q = TimelineQuery::from_filters(7, "all", "attack");
        assert_eq!(q.days_back, 7);
        assert_eq!(q.severity, None);
        assert_eq!(q.event_type.as_deref(), Some("attack"));
    }
}
