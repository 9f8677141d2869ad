use super::gaps::GapAnalysisTab;
use super::matrix::CoverageMatrixTab;
use super::overview::{OverviewTab, TacticsTab};
use super::threat_actors::ThreatActorsTab;
use crate::dashboards::d430_mitre_attack::api;
use crate::shared::components::ui::Button;
use crate::shared::components::{PageHeader, ProgressBar, StatCard, StatTone};
use crate::shared::date_utils::{format_datetime, format_thousands};
use contracts::dashboards::d430_mitre_attack::{CoverageMatrix, GapAnalysis};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{MessageBar, MessageBarIntent, Spinner, Tab, TabList};

const TAB_MATRIX: &str = "matrix";
const TAB_TACTICS: &str = "tactics";
const TAB_GAPS: &str = "gaps";
const TAB_ACTORS: &str = "threat-actors";
const TAB_OVERVIEW: &str = "overview";

fn coverage_tone(percent: f64) -> StatTone {
    if percent >= 70.0 {
        StatTone::Good
    } else if percent >= 40.0 {
        StatTone::Warning
    } else {
        StatTone::Danger
    }
}

/// MITRE ATT&CK detection coverage, gaps and threat actor TTPs
#[component]
pub fn MitreAttackDashboard() -> impl IntoView {
    let (matrix, set_matrix) = signal(None::<CoverageMatrix>);
    let (gaps, set_gaps) = signal(None::<GapAnalysis>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let active_tab = RwSignal::new(TAB_MATRIX.to_string());

    let load = move || {
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            let (matrix_res, gaps_res) =
                futures::join!(api::get_coverage_matrix(), api::get_gap_analysis());
            match (matrix_res, gaps_res) {
                (Ok(m), Ok(g)) => {
                    set_matrix.set(Some(m));
                    set_gaps.set(Some(g));
                }
                (Err(e), _) | (_, Err(e)) => {
                    log::error!("Failed to load MITRE ATT&CK data: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    // Load on mount
    Effect::new(move |_| load());

    view! {
        <div class="dashboard">
            <PageHeader
                title="MITRE ATT&CK Coverage"
                subtitle="Detection coverage mapped to adversary techniques"
                icon_name="target"
            >
                <Button variant="outline" loading=loading on_click=Callback::new(move |_| load())>
                    "Refresh"
                </Button>
            </PageHeader>

            {move || error.get().map(|err| view! {
                <MessageBar intent=MessageBarIntent::Error>
                    {format!("Failed to load ATT&CK data: {}", err)}
                </MessageBar>
            })}

            <Show when=move || loading.get() && matrix.with(|m| m.is_none())>
                <div class="dashboard__loading"><Spinner /></div>
            </Show>

            {move || matrix.get().map(|m| {
                let gap_count = gaps.with(|g| g.as_ref().map(|g| g.critical_gaps.len()).unwrap_or(0));
                let gap_tone = if gap_count > 0 { StatTone::Danger } else { StatTone::Good };
                view! {
                    <div class="stat-grid">
                        <div class="stat-card stat-card--wide">
                            <div class="stat-card__content">
                                <div class="stat-card__label">"Overall Coverage"</div>
                                <div class="stat-card__value">{format!("{:.1}%", m.overall_coverage)}</div>
                                <ProgressBar value=m.overall_coverage />
                                <div class="stat-card__subtitle">
                                    "Updated " {format_datetime(&m.last_updated)}
                                </div>
                            </div>
                        </div>
                        <StatCard
                            label="Techniques Covered"
                            icon_name="shield"
                            value=format!("{} / {}", format_thousands(m.covered_techniques as i64), format_thousands(m.total_techniques as i64))
                            tone=coverage_tone(m.overall_coverage)
                        />
                        <StatCard
                            label="Uncovered Techniques"
                            icon_name="alert-triangle"
                            value=format_thousands(m.gap_techniques as i64)
                            tone=StatTone::Warning
                        />
                        <StatCard
                            label="Critical Gaps"
                            icon_name="target"
                            value=gap_count.to_string()
                            tone=gap_tone
                        />
                    </div>
                }
            })}

            <TabList selected_value=active_tab>
                <Tab value=TAB_MATRIX>"Coverage Matrix"</Tab>
                <Tab value=TAB_TACTICS>"Tactics"</Tab>
                <Tab value=TAB_GAPS>"Gap Analysis"</Tab>
                <Tab value=TAB_ACTORS>"Threat Actors"</Tab>
                <Tab value=TAB_OVERVIEW>"Overview"</Tab>
            </TabList>

            <div class="tab-content">
                {move || {
                    let tab = active_tab.get();
                    if tab == TAB_ACTORS {
                        return view! { <ThreatActorsTab /> }.into_any();
                    }
                    if tab == TAB_GAPS {
                        return match gaps.get() {
                            Some(g) => view! { <GapAnalysisTab analysis=g /> }.into_any(),
                            None => view! { <p class="panel__empty">"No gap analysis loaded"</p> }.into_any(),
                        };
                    }
                    let Some(m) = matrix.get() else {
                        return view! { <p class="panel__empty">"No coverage data loaded"</p> }.into_any();
                    };
                    match tab.as_str() {
                        TAB_TACTICS => view! { <TacticsTab tactics=m.tactics /> }.into_any(),
                        TAB_OVERVIEW => view! { <OverviewTab matrix=m /> }.into_any(),
                        _ => view! { <CoverageMatrixTab matrix=m /> }.into_any(),
                    }
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coverage_tone() {
        assert_eq!(coverage_tone(85.0), StatTone::Good);
        assert_eq!(coverage_tone(55.0), StatTone::Warning);
        assert_eq!(coverage_tone(12.5), StatTone::Danger);
    }
}
