use crate::shared::api_utils::{get_json, get_json_with_query, path_segment};
use contracts::dashboards::d440_ir_playbooks::{
    IncidentMetrics, IncidentPlaybook, PlaybookRequest, PlaybookTemplate,
};

pub async fn get_templates() -> Result<Vec<PlaybookTemplate>, String> {
    get_json("ir-playbooks/templates")
        .await
        .map_err(|e| e.to_string())
}

pub async fn generate_playbook(request: &PlaybookRequest) -> Result<IncidentPlaybook, String> {
    get_json_with_query("ir-playbooks/generate", request)
        .await
        .map_err(|e| e.to_string())
}

/// Expected response times for an incident type
pub async fn get_metrics(incident_type: &str) -> Result<IncidentMetrics, String> {
    get_json(&format!("ir-playbooks/metrics/{}", path_segment(incident_type)))
        .await
        .map_err(|e| e.to_string())
}
