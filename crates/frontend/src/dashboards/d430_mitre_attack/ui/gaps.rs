use crate::shared::components::ui::{Badge, SeverityBadge};
use crate::shared::components::ProgressBar;
use contracts::dashboards::d430_mitre_attack::GapAnalysis;
use leptos::prelude::*;

/// Text class for the overall risk score (higher is worse)
fn risk_class(score: f64) -> &'static str {
    if score >= 70.0 {
        "text--error"
    } else if score >= 40.0 {
        "text--warning"
    } else {
        "text--success"
    }
}

/// Critical detection gaps with recommended detections and their priority
#[component]
pub fn GapAnalysisTab(analysis: GapAnalysis) -> impl IntoView {
    let GapAnalysis {
        critical_gaps,
        recommended_detections,
        risk_score,
        priority_order,
    } = analysis;
    let score_class = format!("gap-risk__score {}", risk_class(risk_score));

    view! {
        <section class="panel gap-risk">
            <h3 class="panel__title">"Risk Score"</h3>
            <div class=score_class>{format!("{:.0}/100", risk_score)}</div>
            <ProgressBar value=risk_score color="#dc2626".to_string() />
        </section>

        <section class="panel">
            <h3 class="panel__title">"Critical Gaps"</h3>
            {if critical_gaps.is_empty() {
                view! { <p class="panel__empty">"No critical gaps"</p> }.into_any()
            } else {
                view! {
                    <div class="gap-list">
                        {critical_gaps.into_iter().map(|g| view! {
                            <div class="gap-card">
                                <div class="gap-card__header">
                                    <code>{g.technique_id}</code>
                                    <strong>{g.technique_name}</strong>
                                    <Badge variant="outline">{g.tactic}</Badge>
                                    <SeverityBadge severity=g.risk_level />
                                </div>
                                <div class="gap-card__meta">
                                    <span>{format!("{} threat actors", g.threat_actors_using)}</span>
                                    <span>{format!("{} recent campaigns", g.recent_campaigns)}</span>
                                    <span>"Effort: " {g.estimated_effort}</span>
                                    <span>"Time: " {g.estimated_time}</span>
                                </div>
                            </div>
                        }).collect_view()}
                    </div>
                }
                    .into_any()
            }}
        </section>

        <section class="panel">
            <h3 class="panel__title">"Recommended Detections"</h3>
            <div class="gap-list">
                {recommended_detections.into_iter().map(|r| view! {
                    <div class="gap-card">
                        <div class="gap-card__header">
                            <code>{r.technique_id}</code>
                            <strong>{r.technique_name}</strong>
                            <SeverityBadge severity=r.implementation_priority />
                        </div>
                        <div class="gap-card__meta">
                            <span>"Data source: " {r.recommended_data_source}</span>
                            <span>"Method: " {r.detection_method}</span>
                            <span>"Expected false positives: " {r.expected_false_positive_rate}</span>
                        </div>
                    </div>
                }).collect_view()}
            </div>
        </section>

        <section class="panel">
            <h3 class="panel__title">"Priority Order"</h3>
            <ol class="priority-list">
                {priority_order.into_iter().map(|p| view! { <li>{p}</li> }).collect_view()}
            </ol>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_class_bands() {
        assert_eq!(risk_class(85.0), "text--error");
        assert_eq!(risk_class(45.0), "text--warning");
        assert_eq!(risk_class(10.0), "text--success");
    }
}
