use crate::enums::{IocType, Severity};
use crate::shared::filter::filter_param;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Default page size of `GET /ioc/search`
pub const DEFAULT_SEARCH_LIMIT: u32 = 50;

/// The API checks at most this many IOCs per bulk request
pub const BULK_CHECK_LIMIT: usize = 100;

/// Query parameters of `GET /ioc/search`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IocSearchQuery {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ioc_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threat_level: Option<String>,
    pub limit: u32,
}

impl IocSearchQuery {
    /// Build a search from the raw input and dropdown values.
    ///
    /// Returns `None` for a blank query.
    pub fn from_filters(query: &str, ioc_type: &str, threat_level: &str) -> Option<Self> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        Some(Self {
            query: query.to_string(),
            ioc_type: filter_param(ioc_type),
            threat_level: filter_param(threat_level),
            limit: DEFAULT_SEARCH_LIMIT,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ioc {
    pub ioc_id: String,
    pub value: String,
    #[serde(rename = "type")]
    pub ioc_type: IocType,
    pub first_seen: String,
    pub last_seen: String,
    pub threat_level: Severity,
    /// 0..=1
    pub confidence: f64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub threat_actors: Vec<String>,
    #[serde(default)]
    pub malware_families: Vec<String>,
    #[serde(default)]
    pub campaigns: Vec<String>,
    #[serde(default)]
    pub sources: Vec<String>,
    pub description: String,
}

/// Response of `GET /ioc/search`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IocSearchResult {
    pub total_results: u32,
    pub query: String,
    #[serde(default)]
    pub iocs: Vec<Ioc>,
    pub search_time_ms: f64,
    #[serde(default)]
    pub related_searches: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DetectionStats {
    pub total_engines: u32,
    pub positive_detections: u32,
    pub detection_rate: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CommunityVotes {
    pub malicious: u32,
    pub harmless: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ThreatIntelligence {
    #[serde(default)]
    pub verdict: String,
    #[serde(default)]
    pub detections: DetectionStats,
    #[serde(default)]
    pub community_votes: CommunityVotes,
    pub last_analysis_date: Option<String>,
    #[serde(default)]
    pub threat_categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MalwareAnalysis {
    pub sandbox_environment: Option<String>,
    pub analysis_date: Option<String>,
    pub malware_family: Option<String>,
    pub file_type: Option<String>,
    pub size_bytes: Option<u64>,
    #[serde(default)]
    pub behaviors: Vec<String>,
    #[serde(default)]
    pub network_indicators: Vec<String>,
    #[serde(default)]
    pub dropped_files: Vec<String>,
    #[serde(default)]
    pub mitre_techniques: Vec<String>,
}

/// Response of `GET /ioc/enrich/{value}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IocEnrichment {
    pub ioc_value: String,
    pub ioc_type: IocType,
    /// 0..=100, lower is worse
    pub reputation_score: u32,
    #[serde(default)]
    pub threat_intelligence: ThreatIntelligence,
    /// Free-form key/value blocks; values may be strings or lists
    pub geolocation: Option<BTreeMap<String, Value>>,
    pub whois_data: Option<BTreeMap<String, Value>>,
    #[serde(default)]
    pub related_iocs: Vec<String>,
    pub malware_analysis: Option<MalwareAnalysis>,
    #[serde(default)]
    pub detection_rules: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

impl IocEnrichment {
    /// `(malicious, harmless)` community votes for the reputation chart
    pub fn vote_split(&self) -> (u32, u32) {
        let votes = &self.threat_intelligence.community_votes;
        (votes.malicious, votes.harmless)
    }
}

/// Render a free-form enrichment value for display (lists joined by ", ")
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedIoc {
    pub ioc_value: String,
    pub ioc_type: IocType,
    pub relationship: String,
    pub correlation_score: f64,
    pub first_seen: String,
    #[serde(default)]
    pub shared_attributes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationEvent {
    pub timestamp: String,
    pub event_type: String,
    pub description: String,
}

/// Response of `GET /ioc/correlate/{value}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IocCorrelation {
    pub correlation_id: String,
    pub primary_ioc: String,
    #[serde(default)]
    pub related_iocs: Vec<RelatedIoc>,
    pub correlation_score: f64,
    pub relationship_type: String,
    #[serde(default)]
    pub timeline: Vec<CorrelationEvent>,
}

/// Element of `GET /ioc/feeds`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IocFeed {
    pub feed_name: String,
    pub last_updated: String,
    pub total_iocs: u64,
    pub new_iocs_24h: u64,
    pub critical_iocs: u64,
    /// "excellent", "good", "moderate"
    pub feed_reliability: String,
}

/// Split the bulk-check textarea into IOC values: one per line, trimmed,
/// blank lines dropped.
pub fn parse_bulk_iocs(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkCheckResult {
    pub ioc: String,
    #[serde(rename = "type")]
    pub ioc_type: IocType,
    /// A severity code or "clean"
    pub threat_level: String,
    pub found_in_feeds: u32,
    pub confidence: f64,
}

impl BulkCheckResult {
    pub fn severity(&self) -> Option<Severity> {
        Severity::from_code(&self.threat_level)
    }

    pub fn is_clean(&self) -> bool {
        self.threat_level.eq_ignore_ascii_case("clean")
    }
}

/// Response of `POST /ioc/bulk-check`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkCheckResponse {
    pub total_checked: u32,
    pub malicious_count: u32,
    pub suspicious_count: u32,
    pub clean_count: u32,
    #[serde(default)]
    pub results: Vec<BulkCheckResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_query_skips_blank_and_all() {
        assert!(IocSearchQuery::from_filters("   ", "ip", "all").is_none());

        let q = IocSearchQuery::from_filters(" 185.220.101.45 ", "ip", "all").unwrap();
        assert_eq!(q.query, "185.220.101.45");
        assert_eq!(q.ioc_type.as_deref(), Some("ip"));
        assert_eq!(q.threat_level, None);
        assert_eq!(q.limit, DEFAULT_SEARCH_LIMIT);
    }

    #[test]
    fn test_parse_bulk_iocs() {
        let text = "185.220.101.45\n\n  evil.example.com  \r\n\t\nattacker@evil-domain.com";
        assert_eq!(
            parse_bulk_iocs(text),
            vec!["185.220.101.45", "evil.example.com", "attacker@evil-domain.com"]
        );
        assert!(parse_bulk_iocs("\n \n").is_empty());
    }

    #[test]
    fn test_decode_enrichment_with_list_whois() {
        let json = r#"{
            "ioc_value": "malicious-1234.com",
            "ioc_type": "domain",
            "reputation_score": 12,
            "threat_intelligence": {
                "verdict": "malicious",
                "detections": {"total_engines": 70, "positive_detections": 8, "detection_rate": "12%"},
                "community_votes": {"malicious": 150, "harmless": 7},
                "last_analysis_date": "2024-05-01T10:00:00",
                "threat_categories": ["malware", "phishing"]
            },
            "geolocation": null,
            "whois_data": {
                "registrar": "Malicious Registrar Inc.",
                "name_servers": ["ns1.suspicious.com", "ns2.suspicious.com"]
            },
            "related_iocs": ["ip:10.0.0.1"],
            "malware_analysis": null,
            "detection_rules": ["Sigma: suspicious PowerShell"],
            "recommendations": ["BLOCK: malicious-1234.com"]
        }"#;
        let e: IocEnrichment = serde_json::from_str(json).unwrap();
        assert_eq!(e.ioc_type, IocType::Domain);
        assert_eq!(e.vote_split(), (150, 7));
        let whois = e.whois_data.unwrap();
        assert_eq!(
            display_value(&whois["name_servers"]),
            "ns1.suspicious.com, ns2.suspicious.com"
        );
        assert_eq!(display_value(&whois["registrar"]), "Malicious Registrar Inc.");
    }

    #[test]
    fn test_decode_bulk_response() {
        let json = r#"{
            "total_checked": 2, "malicious_count": 1, "suspicious_count": 0, "clean_count": 1,
            "results": [
                {"ioc": "1.2.3.4", "type": "ip", "threat_level": "critical", "found_in_feeds": 3, "confidence": 0.9},
                {"ioc": "example.org", "type": "domain", "threat_level": "clean", "found_in_feeds": 0, "confidence": 0}
            ]
        }"#;
        let r: BulkCheckResponse = serde_json::from_str(json).unwrap();
        assert_eq!(r.results[0].severity(), Some(Severity::Critical));
        assert!(r.results[1].is_clean());
        assert_eq!(r.results[1].severity(), None);
    }

    #[test]
    fn test_decode_search_result() {
        let json = r#"{
            "total_results": 1, "query": "evil", "search_time_ms": 12.5, "related_searches": [],
            "iocs": [{
                "ioc_id": "ioc_00001", "value": "evil.example.com", "type": "domain",
                "first_seen": "2024-04-01T00:00:00", "last_seen": "2024-05-01T00:00:00",
                "threat_level": "high", "confidence": 0.87, "tags": ["phishing"],
                "threat_actors": ["APT28"], "malware_families": [], "campaigns": ["Campaign-1234"],
                "sources": ["VirusTotal"], "description": "Malicious domain"
            }]
        }"#;
        let r: IocSearchResult = serde_json::from_str(json).unwrap();
        assert_eq!(r.iocs[0].ioc_type, IocType::Domain);
        assert_eq!(r.iocs[0].threat_level, Severity::High);
    }
}
