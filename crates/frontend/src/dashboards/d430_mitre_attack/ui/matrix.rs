use crate::dashboards::d430_mitre_attack::api;
use crate::shared::components::ui::{Badge, Button, Input};
use crate::shared::date_utils::format_percent;
use crate::shared::icons::icon;
use contracts::dashboards::d430_mitre_attack::{
    AttackTechnique, CoverageMatrix, DetectionRule, TechniqueDetails,
};
use contracts::enums::DetectionCoverage;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{MessageBar, MessageBarIntent, Spinner};

#[component]
fn CoverageLegend() -> impl IntoView {
    view! {
        <div class="coverage-legend">
            {DetectionCoverage::all().into_iter().map(|c| view! {
                <span class="coverage-legend__item">
                    <span class="coverage-legend__swatch" style=format!("background: {};", c.color())></span>
                    {c.legend()}
                </span>
            }).collect_view()}
        </div>
    }
}

#[component]
fn TechniqueRow(technique: AttackTechnique, on_select: Callback<String>) -> impl IntoView {
    let id = technique.technique_id.clone();
    let swatch = format!("background: {};", technique.detection_coverage.color());

    view! {
        <div class="technique-row" on:click=move |_| on_select.run(id.clone())>
            <div class="technique-row__score" style=swatch>
                {format_percent(technique.detection_score)}
            </div>
            <div class="technique-row__body">
                <div class="technique-row__header">
                    <code>{technique.technique_id}</code>
                    <span class="technique-row__name">{technique.technique_name}</span>
                    <Badge variant="outline">{technique.tactic}</Badge>
                    {technique.mitigation_implemented.then(|| view! {
                        <Badge variant="success">"Mitigated"</Badge>
                    })}
                    {(technique.recent_detections > 0).then(|| view! {
                        <span class="technique-row__detections">
                            {format!("{} recent detections", technique.recent_detections)}
                        </span>
                    })}
                </div>
                <p class="technique-row__description">{technique.description}</p>
                <div class="technique-row__meta">
                    <span>"Platforms: " {technique.platforms.join(", ")}</span>
                    <span>"Data sources: " {technique.data_sources.len()}</span>
                </div>
                <div class="tag-row">
                    {technique.threat_actors_using.into_iter().map(|a| view! {
                        <Badge variant="error">{a}</Badge>
                    }).collect_view()}
                </div>
            </div>
            <span class="technique-row__chevron">{icon("chevron-right")}</span>
        </div>
    }
}

#[component]
fn TechniqueDetailsPanel(
    details: TechniqueDetails,
    rules: Vec<DetectionRule>,
    on_close: Callback<()>,
) -> impl IntoView {
    let list = |title: &'static str, items: Vec<String>| {
        (!items.is_empty()).then(|| view! {
            <div class="list-block">
                <h4 class="list-block__title">{title}</h4>
                <ul>{items.into_iter().map(|i| view! { <li>{i}</li> }).collect_view()}</ul>
            </div>
        })
    };

    view! {
        <section class="panel technique-details">
            <div class="technique-details__header">
                <h3 class="panel__title">
                    <code>{details.technique_id}</code> " " {details.name}
                </h3>
                <Button variant="ghost" size="sm" on_click=Callback::new(move |_| on_close.run(()))>
                    "Close"
                </Button>
            </div>
            <p>{details.description}</p>
            <div class="tag-row">
                {details.tactics.into_iter().map(|t| view! { <Badge variant="outline">{t}</Badge> }).collect_view()}
                {details.platforms.into_iter().map(|p| view! { <Badge>{p}</Badge> }).collect_view()}
            </div>
            {list("Data Sources", details.data_sources)}
            {list("Detection Methods", details.detection_methods)}
            {list("Mitigations", details.mitigations)}
            {(!details.examples.is_empty()).then(|| view! {
                <div class="list-block">
                    <h4 class="list-block__title">"Procedure Examples"</h4>
                    <ul>
                        {details.examples.into_iter().map(|e| view! {
                            <li><strong>{e.name}</strong> ": " {e.description} " (" {e.source} ")"</li>
                        }).collect_view()}
                    </ul>
                </div>
            })}
            {(!rules.is_empty()).then(|| view! {
                <div class="list-block">
                    <h4 class="list-block__title">"Detection Rules"</h4>
                    {rules.into_iter().map(|r| view! {
                        <div class="rule-card">
                            <div class="rule-card__header">
                                <strong>{r.rule_name}</strong>
                                <code>{r.rule_id}</code>
                                <Badge variant="primary">{r.effectiveness}</Badge>
                            </div>
                            <div class="rule-card__meta">
                                <span>"Source: " {r.data_source}</span>
                                <span>"False positives: " {r.false_positive_rate}</span>
                            </div>
                            <pre class="rule-card__logic">{r.logic}</pre>
                        </div>
                    }).collect_view()}
                </div>
            })}
            {list("References", details.references)}
        </section>
    }
}

/// Searchable technique list; selecting one loads its details and rules
#[component]
pub fn CoverageMatrixTab(matrix: CoverageMatrix) -> impl IntoView {
    let matrix = StoredValue::new(matrix);
    let search = RwSignal::new(String::new());
    let (details, set_details) = signal(None::<(TechniqueDetails, Vec<DetectionRule>)>);
    let (loading_details, set_loading_details) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let filtered = move || search.with(|q| matrix.with_value(|m| m.filter_techniques(q)));

    let select_technique = Callback::new(move |technique_id: String| {
        set_loading_details.set(true);
        set_error.set(None);
        spawn_local(async move {
            let (details_res, rules_res) = futures::join!(
                api::get_technique_details(&technique_id),
                api::get_detection_rules(&technique_id)
            );
            match details_res {
                Ok(d) => {
                    let rules = rules_res.unwrap_or_else(|e| {
                        log::warn!("No detection rules for {}: {}", technique_id, e);
                        Vec::new()
                    });
                    set_details.set(Some((d, rules)));
                }
                Err(e) => {
                    log::error!("Failed to load technique {}: {}", technique_id, e);
                    set_error.set(Some(e));
                }
            }
            set_loading_details.set(false);
        });
    });

    view! {
        <div class="matrix-tab">
            {move || error.get().map(|err| view! {
                <MessageBar intent=MessageBarIntent::Error>
                    {format!("Failed to load technique details: {}", err)}
                </MessageBar>
            })}

            <Show when=move || loading_details.get()>
                <div class="dashboard__loading"><Spinner /></div>
            </Show>

            {move || details.get().map(|(d, rules)| view! {
                <TechniqueDetailsPanel
                    details=d
                    rules=rules
                    on_close=Callback::new(move |_| set_details.set(None))
                />
            })}

            <section class="panel">
                <div class="panel__toolbar">
                    <h3 class="panel__title">"Technique Coverage Matrix"</h3>
                    <Input
                        value=search
                        on_input=Callback::new(move |v| search.set(v))
                        placeholder="Search techniques..."
                    />
                </div>
                <CoverageLegend />
                {move || {
                    let techniques = filtered();
                    if techniques.is_empty() {
                        view! {
                            <p class="panel__empty">"No techniques found matching your search"</p>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="technique-list">
                                {techniques.into_iter().map(|t| view! {
                                    <TechniqueRow technique=t on_select=select_technique />
                                }).collect_view()}
                            </div>
                        }
                            .into_any()
                    }
                }}
            </section>
        </div>
    }
}
