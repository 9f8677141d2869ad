use crate::enums::{DetectionCoverage, Severity};
use crate::shared::filter::matches_query;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Threat actors offered in the TTP analysis dropdown
pub const KNOWN_THREAT_ACTORS: [&str; 4] = ["APT28", "APT29", "Lazarus Group", "FIN7"];

/// Actor analysed when the page opens
pub const DEFAULT_THREAT_ACTOR: &str = "APT28";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackTechnique {
    pub technique_id: String,
    pub technique_name: String,
    pub tactic: String,
    #[serde(default)]
    pub sub_techniques: Vec<String>,
    pub description: String,
    pub detection_coverage: DetectionCoverage,
    /// 0..=1
    pub detection_score: f64,
    #[serde(default)]
    pub threat_actors_using: Vec<String>,
    pub recent_detections: u32,
    pub mitigation_implemented: bool,
    #[serde(default)]
    pub data_sources: Vec<String>,
    #[serde(default)]
    pub platforms: Vec<String>,
}

impl AttackTechnique {
    /// Search box match over name, id and tactic (case-insensitive)
    pub fn matches(&self, query: &str) -> bool {
        matches_query(&self.technique_name, query)
            || matches_query(&self.technique_id, query)
            || matches_query(&self.tactic, query)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TacticCoverage {
    pub tactic_name: String,
    pub tactic_id: String,
    pub total_techniques: u32,
    pub covered_techniques: u32,
    /// 0..=100
    pub coverage_percentage: f64,
    pub gap_count: u32,
    #[serde(default)]
    pub priority_gaps: Vec<String>,
}

/// Response of `GET /mitre/coverage-matrix`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageMatrix {
    #[serde(default)]
    pub tactics: Vec<TacticCoverage>,
    #[serde(default)]
    pub techniques: Vec<AttackTechnique>,
    /// 0..=100
    pub overall_coverage: f64,
    pub total_techniques: u32,
    pub covered_techniques: u32,
    pub gap_techniques: u32,
    pub last_updated: String,
}

impl CoverageMatrix {
    pub fn filter_techniques(&self, query: &str) -> Vec<AttackTechnique> {
        self.techniques
            .iter()
            .filter(|t| t.matches(query))
            .cloned()
            .collect()
    }

    /// Number of techniques per coverage bucket, best bucket first
    pub fn coverage_distribution(&self) -> Vec<(DetectionCoverage, usize)> {
        DetectionCoverage::all()
            .into_iter()
            .map(|bucket| {
                let count = self
                    .techniques
                    .iter()
                    .filter(|t| t.detection_coverage == bucket)
                    .count();
                (bucket, count)
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorTechnique {
    pub technique_id: String,
    pub technique_name: String,
    pub tactic: String,
    /// "common", "occasional", "rare"
    pub frequency: String,
    pub first_observed: String,
    pub last_observed: String,
    /// Whether we currently detect it
    pub detection_coverage: bool,
    pub severity: Severity,
}

/// Response of `GET /mitre/threat-actor-ttps/{actor}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreatActorTtps {
    pub threat_actor: String,
    #[serde(default)]
    pub techniques_used: Vec<ActorTechnique>,
    #[serde(default)]
    pub tactics_distribution: BTreeMap<String, u32>,
    /// 0..=1
    pub detection_coverage: f64,
    #[serde(default)]
    pub high_risk_techniques: Vec<String>,
}

impl ThreatActorTtps {
    pub fn undetected_count(&self) -> usize {
        self.techniques_used
            .iter()
            .filter(|t| !t.detection_coverage)
            .count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriticalGap {
    pub technique_id: String,
    pub technique_name: String,
    pub tactic: String,
    pub risk_level: Severity,
    pub threat_actors_using: u32,
    pub recent_campaigns: u32,
    pub estimated_effort: String,
    pub estimated_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedDetection {
    pub technique_id: String,
    pub technique_name: String,
    pub recommended_data_source: String,
    pub detection_method: String,
    pub implementation_priority: Severity,
    pub expected_false_positive_rate: String,
}

/// Response of `GET /mitre/gap-analysis`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapAnalysis {
    #[serde(default)]
    pub critical_gaps: Vec<CriticalGap>,
    #[serde(default)]
    pub recommended_detections: Vec<RecommendedDetection>,
    /// 0..=100
    pub risk_score: f64,
    #[serde(default)]
    pub priority_order: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechniqueExample {
    pub name: String,
    pub description: String,
    pub source: String,
}

/// Response of `GET /mitre/technique-details/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechniqueDetails {
    pub technique_id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub tactics: Vec<String>,
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub data_sources: Vec<String>,
    #[serde(default)]
    pub detection_methods: Vec<String>,
    #[serde(default)]
    pub mitigations: Vec<String>,
    #[serde(default)]
    pub examples: Vec<TechniqueExample>,
    #[serde(default)]
    pub references: Vec<String>,
}

/// Element of `GET /mitre/detection-rules/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionRule {
    pub rule_id: String,
    pub rule_name: String,
    #[serde(default)]
    pub technique_ids: Vec<String>,
    pub data_source: String,
    pub logic: String,
    pub false_positive_rate: String,
    pub effectiveness: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn technique(id: &str, name: &str, tactic: &str, coverage: DetectionCoverage) -> AttackTechnique {
        AttackTechnique {
            technique_id: id.to_string(),
            technique_name: name.to_string(),
            tactic: tactic.to_string(),
            sub_techniques: vec![],
            description: String::new(),
            detection_coverage: coverage,
            detection_score: 0.5,
            threat_actors_using: vec![],
            recent_detections: 0,
            mitigation_implemented: false,
            data_sources: vec![],
            platforms: vec!["Windows".to_string()],
        }
    }

    fn matrix() -> CoverageMatrix {
        CoverageMatrix {
            tactics: vec![],
            techniques: vec![
                technique("T1566", "Phishing", "Initial Access", DetectionCoverage::Good),
                technique("T1059", "Command and Scripting Interpreter", "Execution", DetectionCoverage::None),
                technique("T1078", "Valid Accounts", "Persistence", DetectionCoverage::None),
            ],
            overall_coverage: 61.5,
            total_techniques: 3,
            covered_techniques: 1,
            gap_techniques: 2,
            last_updated: "2024-05-01T00:00:00".to_string(),
        }
    }

    #[test]
    fn test_filter_by_name_id_and_tactic() {
        let m = matrix();
        assert_eq!(m.filter_techniques("phish").len(), 1);
        assert_eq!(m.filter_techniques("t1059")[0].technique_name, "Command and Scripting Interpreter");
        assert_eq!(m.filter_techniques("PERSISTENCE")[0].technique_id, "T1078");
        assert_eq!(m.filter_techniques("").len(), 3);
        assert!(m.filter_techniques("exfil").is_empty());
    }

    #[test]
    fn test_coverage_distribution() {
        let dist = matrix().coverage_distribution();
        assert_eq!(
            dist,
            vec![
                (DetectionCoverage::Excellent, 0),
                (DetectionCoverage::Good, 1),
                (DetectionCoverage::Partial, 0),
                (DetectionCoverage::None, 2),
            ]
        );
    }

    #[test]
    fn test_decode_actor_ttps() {
        let json = r#"{
            "threat_actor": "APT28",
            "techniques_used": [
                {"technique_id": "T1566", "technique_name": "Phishing", "tactic": "Initial Access",
                 "frequency": "common", "first_observed": "2023-01-01", "last_observed": "2024-05-01",
                 "detection_coverage": false, "severity": "critical"},
                {"technique_id": "T1003", "technique_name": "OS Credential Dumping", "tactic": "Credential Access",
                 "frequency": "rare", "first_observed": "2023-06-01", "last_observed": "2024-04-20",
                 "detection_coverage": true, "severity": "high"}
            ],
            "tactics_distribution": {"Initial Access": 1, "Credential Access": 1},
            "detection_coverage": 0.5,
            "high_risk_techniques": ["T1566 - Phishing"]
        }"#;
        let ttps: ThreatActorTtps = serde_json::from_str(json).unwrap();
        assert_eq!(ttps.undetected_count(), 1);
        assert_eq!(ttps.tactics_distribution.keys().next().unwrap(), "Credential Access");
    }

    #[test]
    fn test_decode_gap_analysis() {
        let json = r#"{
            "critical_gaps": [{"technique_id": "T1190", "technique_name": "Exploit Public-Facing Application",
                "tactic": "Initial Access", "risk_level": "critical", "threat_actors_using": 5,
                "recent_campaigns": 2, "estimated_effort": "High", "estimated_time": "1-2 months"}],
            "recommended_detections": [{"technique_id": "T1190", "technique_name": "Exploit Public-Facing Application",
                "recommended_data_source": "EDR Telemetry", "detection_method": "Behavioral Analytics",
                "implementation_priority": "critical", "expected_false_positive_rate": "Low"}],
            "risk_score": 45,
            "priority_order": ["Implement EDR/XDR solution"]
        }"#;
        let gaps: GapAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(gaps.critical_gaps[0].risk_level, Severity::Critical);
        assert_eq!(gaps.risk_score, 45.0);
    }
}
