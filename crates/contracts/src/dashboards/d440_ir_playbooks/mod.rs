use crate::enums::Severity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Incident type selected when the generator opens
pub const DEFAULT_INCIDENT_TYPE: &str = "ransomware";

/// Blast radius of the incident
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IncidentScope {
    #[default]
    Single,
    Multiple,
    EnterpriseWide,
}

impl IncidentScope {
    pub fn code(&self) -> &'static str {
        match self {
            IncidentScope::Single => "single",
            IncidentScope::Multiple => "multiple",
            IncidentScope::EnterpriseWide => "enterprise-wide",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            IncidentScope::Single => "Single System",
            IncidentScope::Multiple => "Multiple Systems",
            IncidentScope::EnterpriseWide => "Enterprise-Wide",
        }
    }

    pub fn all() -> [IncidentScope; 3] {
        [
            IncidentScope::Single,
            IncidentScope::Multiple,
            IncidentScope::EnterpriseWide,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }
}

/// How much of the playbook is automated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AutomationLevel {
    Minimal,
    #[default]
    Standard,
    Advanced,
}

impl AutomationLevel {
    pub fn code(&self) -> &'static str {
        match self {
            AutomationLevel::Minimal => "minimal",
            AutomationLevel::Standard => "standard",
            AutomationLevel::Advanced => "advanced",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AutomationLevel::Minimal => "Minimal",
            AutomationLevel::Standard => "Standard",
            AutomationLevel::Advanced => "Advanced",
        }
    }

    pub fn all() -> [AutomationLevel; 3] {
        [
            AutomationLevel::Minimal,
            AutomationLevel::Standard,
            AutomationLevel::Advanced,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|a| a.code() == code)
    }
}

/// Query parameters of `GET /ir-playbooks/generate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybookRequest {
    pub incident_type: String,
    pub severity: Severity,
    pub scope: IncidentScope,
    pub automation_level: AutomationLevel,
}

impl Default for PlaybookRequest {
    fn default() -> Self {
        Self {
            incident_type: DEFAULT_INCIDENT_TYPE.to_string(),
            severity: Severity::High,
            scope: IncidentScope::default(),
            automation_level: AutomationLevel::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybookStep {
    pub step_number: u32,
    pub phase: String,
    pub action: String,
    pub description: String,
    pub responsible_party: String,
    pub estimated_time: String,
    pub automation_available: bool,
    #[serde(default)]
    pub required_tools: Vec<String>,
    #[serde(default)]
    pub success_criteria: Vec<String>,
    #[serde(default)]
    pub escalation_triggers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StakeholderNotification {
    pub stakeholder_type: String,
    pub notification_trigger: String,
    pub communication_template: String,
    pub notification_method: String,
    pub escalation_threshold: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceItem {
    pub evidence_type: String,
    pub collection_method: String,
    pub retention_period: String,
    pub chain_of_custody: bool,
    pub legal_hold_required: bool,
    pub storage_location: String,
}

/// A group of consecutive playbook steps sharing one phase
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybookPhase {
    pub name: String,
    pub steps: Vec<PlaybookStep>,
}

/// Response of `GET /ir-playbooks/generate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentPlaybook {
    pub playbook_id: String,
    pub incident_type: String,
    pub severity: Severity,
    pub generated_at: String,
    pub estimated_duration: String,
    #[serde(default)]
    pub steps: Vec<PlaybookStep>,
    #[serde(default)]
    pub stakeholders: Vec<StakeholderNotification>,
    #[serde(default)]
    pub evidence_collection: Vec<EvidenceItem>,
    #[serde(default)]
    pub mitre_techniques: Vec<String>,
    #[serde(default)]
    pub compliance_requirements: Vec<String>,
    #[serde(default)]
    pub success_metrics: BTreeMap<String, String>,
}

impl IncidentPlaybook {
    /// Steps grouped by phase, phases in order of first appearance
    pub fn phases(&self) -> Vec<PlaybookPhase> {
        let mut phases: Vec<PlaybookPhase> = Vec::new();
        for step in &self.steps {
            match phases.iter_mut().find(|p| p.name == step.phase) {
                Some(phase) => phase.steps.push(step.clone()),
                None => phases.push(PlaybookPhase {
                    name: step.phase.clone(),
                    steps: vec![step.clone()],
                }),
            }
        }
        phases
    }

    /// File name used when exporting the playbook as JSON
    pub fn export_file_name(&self) -> String {
        format!("{}_incident_response_playbook.json", self.playbook_id)
    }

    pub fn automated_step_count(&self) -> usize {
        self.steps.iter().filter(|s| s.automation_available).count()
    }
}

/// Element of `GET /ir-playbooks/templates`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybookTemplate {
    pub template_id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub incident_types: Vec<String>,
    pub complexity: String,
    pub typical_duration: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
}

/// Response of `GET /ir-playbooks/metrics/{incident_type}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentMetrics {
    pub mean_time_to_detect: String,
    pub mean_time_to_respond: String,
    pub mean_time_to_contain: String,
    pub mean_time_to_recover: String,
    pub total_estimated_time: String,
}

impl IncidentMetrics {
    /// `(label, value)` pairs in display order
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Mean Time to Detect", self.mean_time_to_detect.clone()),
            ("Mean Time to Respond", self.mean_time_to_respond.clone()),
            ("Mean Time to Contain", self.mean_time_to_contain.clone()),
            ("Mean Time to Recover", self.mean_time_to_recover.clone()),
            ("Total Estimated Time", self.total_estimated_time.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(number: u32, phase: &str) -> PlaybookStep {
        PlaybookStep {
            step_number: number,
            phase: phase.to_string(),
            action: format!("Action {}", number),
            description: String::new(),
            responsible_party: "SOC".to_string(),
            estimated_time: "15 minutes".to_string(),
            automation_available: number % 2 == 0,
            required_tools: vec![],
            success_criteria: vec![],
            escalation_triggers: vec![],
        }
    }

    fn playbook(steps: Vec<PlaybookStep>) -> IncidentPlaybook {
        IncidentPlaybook {
            playbook_id: "PB-RANSOMWARE-1234".to_string(),
            incident_type: "Ransomware Attack".to_string(),
            severity: Severity::High,
            generated_at: "2024-05-01T10:00:00".to_string(),
            estimated_duration: "3-7 days".to_string(),
            steps,
            stakeholders: vec![],
            evidence_collection: vec![],
            mitre_techniques: vec![],
            compliance_requirements: vec![],
            success_metrics: BTreeMap::new(),
        }
    }

    #[test]
    fn test_phases_keep_first_appearance_order() {
        let pb = playbook(vec![
            step(1, "Preparation"),
            step(2, "Detection and Analysis"),
            step(3, "Preparation"),
            step(4, "Containment"),
        ]);
        let phases = pb.phases();
        let names: Vec<_> = phases.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Preparation", "Detection and Analysis", "Containment"]);
        let numbers: Vec<_> = phases[0].steps.iter().map(|s| s.step_number).collect();
        assert_eq!(numbers, vec![1, 3]);
        assert_eq!(pb.automated_step_count(), 2);
    }

    #[test]
    fn test_no_steps_no_phases() {
        assert!(playbook(vec![]).phases().is_empty());
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(
            playbook(vec![]).export_file_name(),
            "PB-RANSOMWARE-1234_incident_response_playbook.json"
        );
    }

    #[test]
    fn test_request_serializes_wire_codes() {
        let req = PlaybookRequest {
            incident_type: "data_breach".to_string(),
            severity: Severity::Critical,
            scope: IncidentScope::EnterpriseWide,
            automation_level: AutomationLevel::Advanced,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["scope"], "enterprise-wide");
        assert_eq!(json["severity"], "critical");
        assert_eq!(json["automation_level"], "advanced");
    }

    #[test]
    fn test_scope_from_code() {
        assert_eq!(IncidentScope::from_code("enterprise-wide"), Some(IncidentScope::EnterpriseWide));
        assert_eq!(IncidentScope::from_code("galaxy"), None);
        assert_eq!(AutomationLevel::from_code("minimal"), Some(AutomationLevel::Minimal));
    }
}
