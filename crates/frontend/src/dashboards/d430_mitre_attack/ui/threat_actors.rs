use crate::dashboards::d430_mitre_attack::api;
use crate::shared::components::ui::{Badge, Button, Select, SeverityBadge};
use crate::shared::components::{share_percent, BarDatum, CoverageBars, StatCard, StatTone};
use crate::shared::date_utils::format_percent;
use crate::shared::filter_options::plain_options;
use contracts::dashboards::d430_mitre_attack::{
    ThreatActorTtps, DEFAULT_THREAT_ACTOR, KNOWN_THREAT_ACTORS,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{MessageBar, MessageBarIntent, Spinner};

/// One bar per tactic, sized against the busiest tactic
fn tactic_distribution_bars(ttps: &ThreatActorTtps) -> Vec<BarDatum> {
    let max = ttps.tactics_distribution.values().copied().max().unwrap_or(0) as usize;
    ttps.tactics_distribution
        .iter()
        .map(|(tactic, count)| {
            BarDatum::new(tactic.clone(), share_percent(*count as usize, max), count.to_string())
        })
        .collect()
}

#[component]
fn ActorProfile(ttps: ThreatActorTtps) -> impl IntoView {
    let bars = tactic_distribution_bars(&ttps);
    let undetected = ttps.undetected_count();
    let ThreatActorTtps {
        threat_actor,
        techniques_used,
        detection_coverage,
        high_risk_techniques,
        ..
    } = ttps;
    let undetected_tone = if undetected > 0 { StatTone::Danger } else { StatTone::Good };

    view! {
        <div class="stat-grid">
            <StatCard label="Threat Actor" icon_name="users" value=threat_actor />
            <StatCard
                label="Techniques Used"
                icon_name="target"
                value=techniques_used.len().to_string()
            />
            <StatCard
                label="Detection Coverage"
                icon_name="shield"
                value=format_percent(detection_coverage)
            />
            <StatCard
                label="Undetected"
                icon_name="alert-triangle"
                value=undetected.to_string()
                tone=undetected_tone
            />
        </div>

        <div class="dashboard__grid">
            <section class="panel">
                <h3 class="panel__title">"Tactics Distribution"</h3>
                <CoverageBars rows=bars />
            </section>
            <section class="panel">
                <h3 class="panel__title">"High-Risk Techniques"</h3>
                <ul class="priority-list">
                    {high_risk_techniques.into_iter().map(|t| view! { <li class="text--error">{t}</li> }).collect_view()}
                </ul>
            </section>
        </div>

        <section class="panel">
            <h3 class="panel__title">"Techniques"</h3>
            <div class="technique-list">
                {techniques_used.into_iter().map(|t| {
                    let (detected_variant, detected_text) = if t.detection_coverage {
                        ("success", "Detected")
                    } else {
                        ("error", "Not Detected")
                    };
                    view! {
                        <div class="technique-row">
                            <div class="technique-row__body">
                                <div class="technique-row__header">
                                    <code>{t.technique_id}</code>
                                    <span class="technique-row__name">{t.technique_name}</span>
                                    <Badge variant="outline">{t.tactic}</Badge>
                                    <SeverityBadge severity=t.severity />
                                    <Badge variant=detected_variant>{detected_text}</Badge>
                                </div>
                                <div class="technique-row__meta">
                                    <span>"Frequency: " {t.frequency}</span>
                                    <span>"First seen: " {t.first_observed}</span>
                                    <span>"Last seen: " {t.last_observed}</span>
                                </div>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </section>
    }
}

/// Pick a known actor and analyse the techniques it uses against our coverage
#[component]
pub fn ThreatActorsTab() -> impl IntoView {
    let actor = RwSignal::new(DEFAULT_THREAT_ACTOR.to_string());
    let (ttps, set_ttps) = signal(None::<ThreatActorTtps>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let analyze = move || {
        let name = actor.get_untracked();
        if name.trim().is_empty() {
            return;
        }
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::get_threat_actor_ttps(&name).await {
                Ok(data) => set_ttps.set(Some(data)),
                Err(e) => {
                    log::error!("Failed to load TTPs for {}: {}", name, e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="threat-actors">
            <section class="panel">
                <div class="search-form">
                    <Select
                        label="Threat Actor"
                        value=actor
                        options=plain_options(&KNOWN_THREAT_ACTORS)
                        on_value_change=Callback::new(move |v| actor.set(v))
                    />
                    <Button loading=loading on_click=Callback::new(move |_| analyze())>
                        "Analyze"
                    </Button>
                </div>
            </section>

            {move || error.get().map(|err| view! {
                <MessageBar intent=MessageBarIntent::Error>
                    {format!("Failed to analyze threat actor: {}", err)}
                </MessageBar>
            })}

            {move || {
                if loading.get() {
                    view! { <div class="dashboard__loading"><Spinner /></div> }.into_any()
                } else if let Some(data) = ttps.get() {
                    view! { <ActorProfile ttps=data /> }.into_any()
                } else {
                    view! {
                        <p class="panel__empty">
                            "Select a threat actor and click Analyze. Examples: APT28, APT29, Lazarus Group, FIN7"
                        </p>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_tactic_bars_scale_to_busiest_tactic() {
        let ttps = ThreatActorTtps {
            threat_actor: "APT28".to_string(),
            techniques_used: vec![],
            tactics_distribution: BTreeMap::from([
                ("Execution".to_string(), 2),
                ("Initial Access".to_string(), 4),
            ]),
            detection_coverage: 0.5,
            high_risk_techniques: vec![],
        };

        let bars = tactic_distribution_bars(&ttps);
        assert_eq!(bars[0].label, "Execution");
        assert_eq!(bars[0].percent, 50.0);
        assert_eq!(bars[1].percent, 100.0);
        assert_eq!(bars[1].caption, "4");
    }

    #[test]
    fn test_tactic_bars_empty() {
        let ttps = ThreatActorTtps {
            threat_actor: "FIN7".to_string(),
            techniques_used: vec![],
            tactics_distribution: BTreeMap::new(),
            detection_coverage: 0.0,
            high_risk_techniques: vec![],
        };
        assert!(tactic_distribution_bars(&ttps).is_empty());
    }
}
