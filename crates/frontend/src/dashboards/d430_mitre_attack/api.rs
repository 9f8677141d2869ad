use crate::shared::api_utils::{get_json, path_segment};
use contracts::dashboards::d430_mitre_attack::{
    CoverageMatrix, DetectionRule, GapAnalysis, TechniqueDetails, ThreatActorTtps,
};

pub async fn get_coverage_matrix() -> Result<CoverageMatrix, String> {
    get_json("mitre/coverage-matrix")
        .await
        .map_err(|e| e.to_string())
}

pub async fn get_gap_analysis() -> Result<GapAnalysis, String> {
    get_json("mitre/gap-analysis")
        .await
        .map_err(|e| e.to_string())
}

pub async fn get_threat_actor_ttps(actor: &str) -> Result<ThreatActorTtps, String> {
    get_json(&format!("mitre/threat-actor-ttps/{}", path_segment(actor)))
        .await
        .map_err(|e| e.to_string())
}

pub async fn get_technique_details(technique_id: &str) -> Result<TechniqueDetails, String> {
    get_json(&format!("mitre/technique-details/{}", path_segment(technique_id)))
        .await
        .map_err(|e| e.to_string())
}

pub async fn get_detection_rules(technique_id: &str) -> Result<Vec<DetectionRule>, String> {
    get_json(&format!("mitre/detection-rules/{}", path_segment(technique_id)))
        .await
        .map_err(|e| e.to_string())
}
