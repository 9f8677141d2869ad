use crate::shared::components::ui::Badge;
use crate::shared::components::{share_percent, BarDatum, CoverageBars, ProgressBar};
use contracts::dashboards::d430_mitre_attack::{CoverageMatrix, TacticCoverage};
use leptos::prelude::*;

/// Bar rows for the coverage distribution chart, best bucket first
fn distribution_bars(matrix: &CoverageMatrix) -> Vec<BarDatum> {
    let total = matrix.techniques.len();
    matrix
        .coverage_distribution()
        .into_iter()
        .map(|(bucket, count)| {
            BarDatum::new(bucket.display_name(), share_percent(count, total), count.to_string())
                .with_color(bucket.color())
        })
        .collect()
}

fn tactic_bars(tactics: &[TacticCoverage]) -> Vec<BarDatum> {
    tactics
        .iter()
        .map(|t| {
            BarDatum::new(
                t.tactic_name.clone(),
                t.coverage_percentage,
                format!("{:.1}%", t.coverage_percentage),
            )
        })
        .collect()
}

/// Coverage per tactic as a bar chart and one card per tactic
#[component]
pub fn TacticsTab(tactics: Vec<TacticCoverage>) -> impl IntoView {
    let bars = tactic_bars(&tactics);

    view! {
        <section class="panel">
            <h3 class="panel__title">"Tactic-Level Coverage"</h3>
            <CoverageBars rows=bars />
        </section>
        <div class="card-grid">
            {tactics.into_iter().map(|t| {
                let priority = t.priority_gaps.iter().take(2).cloned().collect::<Vec<_>>().join(", ");
                view! {
                    <div class="tactic-card">
                        <div class="tactic-card__header">
                            <strong>{t.tactic_name}</strong>
                            <Badge variant="outline">{t.tactic_id}</Badge>
                        </div>
                        <ProgressBar value=t.coverage_percentage />
                        <div class="panel__hint">{format!("{:.1}% coverage", t.coverage_percentage)}</div>
                        <dl class="kv-list kv-list--inline">
                            <dt>"Total"</dt>
                            <dd>{t.total_techniques}</dd>
                            <dt>"Covered"</dt>
                            <dd class="text--success">{t.covered_techniques}</dd>
                        </dl>
                        {(t.gap_count > 0).then(|| view! {
                            <div class="tactic-card__gaps">
                                <span class="text--error">{format!("{} Gaps", t.gap_count)}</span>
                                <span class="panel__hint">"Priority: " {priority}</span>
                            </div>
                        })}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

/// Coverage distribution over all techniques
#[component]
pub fn OverviewTab(matrix: CoverageMatrix) -> impl IntoView {
    let bars = distribution_bars(&matrix);
    let counts = matrix.coverage_distribution();

    view! {
        <div class="dashboard__grid">
            <section class="panel">
                <h3 class="panel__title">"Coverage Distribution"</h3>
                <CoverageBars rows=bars />
            </section>
            <section class="panel">
                <h3 class="panel__title">"Key Metrics"</h3>
                <div class="metric-list">
                    {counts.into_iter().map(|(bucket, count)| view! {
                        <div class="metric-list__item" style=format!("border-left: 4px solid {};", bucket.color())>
                            <span class="metric-list__label">{format!("{} Coverage", bucket.display_name())}</span>
                            <span class="metric-list__value">{count}</span>
                        </div>
                    }).collect_view()}
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d430_mitre_attack::AttackTechnique;
    use contracts::enums::DetectionCoverage;

    fn technique(coverage: DetectionCoverage) -> AttackTechnique {
        AttackTechnique {
            technique_id: "T1059".to_string(),
            technique_name: "Command and Scripting Interpreter".to_string(),
            tactic: "Execution".to_string(),
            sub_techniques: vec![],
            description: String::new(),
            detection_coverage: coverage,
            detection_score: 0.5,
            threat_actors_using: vec![],
            recent_detections: 0,
            mitigation_implemented: false,
            data_sources: vec![],
            platforms: vec![],
        }
    }

    #[test]
    fn test_distribution_bars() {
        let matrix = CoverageMatrix {
            tactics: vec![],
            techniques: vec![
                technique(DetectionCoverage::Excellent),
                technique(DetectionCoverage::None),
                technique(DetectionCoverage::None),
                technique(DetectionCoverage::Good),
            ],
            overall_coverage: 50.0,
            total_techniques: 4,
            covered_techniques: 2,
            gap_techniques: 2,
            last_updated: "2024-05-01T00:00:00".to_string(),
        };

        let bars = distribution_bars(&matrix);
        let labels: Vec<_> = bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Excellent", "Good", "Partial", "None"]);
        assert_eq!(bars[0].percent, 25.0);
        assert_eq!(bars[2].caption, "0");
        assert_eq!(bars[3].percent, 50.0);
        assert_eq!(bars[3].color.as_deref(), Some("#dc2626"));
    }
}
