use super::phases::PhaseSteps;
use super::resources::{ComplianceTab, EvidenceTab, StakeholdersTab};
use crate::dashboards::d440_ir_playbooks::api;
use crate::shared::clipboard::CopyFeedback;
use crate::shared::components::ui::{Badge, Button, Select, SelectOption, SeverityBadge};
use crate::shared::components::PageHeader;
use crate::shared::date_utils::format_datetime;
use crate::shared::export::{export_json, to_export_json};
use crate::shared::filter_options::severity_options;
use crate::shared::icons::icon;
use contracts::dashboards::d440_ir_playbooks::{
    AutomationLevel, IncidentMetrics, IncidentPlaybook, IncidentScope, PlaybookRequest,
    PlaybookTemplate,
};
use contracts::enums::Severity;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{MessageBar, MessageBarIntent, Spinner, Tab, TabList};

const TAB_STEPS: &str = "steps";
const TAB_STAKEHOLDERS: &str = "stakeholders";
const TAB_EVIDENCE: &str = "evidence";
const TAB_COMPLIANCE: &str = "compliance";

const PLAYBOOK_COPY_KEY: &str = "playbook";

/// Severities offered by the generator, mildest first
const PLAYBOOK_SEVERITIES: [Severity; 4] =
    [Severity::Low, Severity::Medium, Severity::High, Severity::Critical];

fn template_options(templates: &[PlaybookTemplate]) -> Vec<SelectOption> {
    templates
        .iter()
        .map(|t| SelectOption::new(t.template_id.clone(), t.name.clone()))
        .collect()
}

fn scope_options() -> Vec<SelectOption> {
    IncidentScope::all()
        .into_iter()
        .map(|s| SelectOption::new(s.code(), s.display_name()))
        .collect()
}

fn automation_options() -> Vec<SelectOption> {
    AutomationLevel::all()
        .into_iter()
        .map(|a| SelectOption::new(a.code(), a.display_name()))
        .collect()
}

/// Dropdown values to a generate request; unknown codes fall back to the defaults
fn build_request(incident_type: &str, severity: &str, scope: &str, automation: &str) -> PlaybookRequest {
    let defaults = PlaybookRequest::default();
    PlaybookRequest {
        incident_type: if incident_type.is_empty() {
            defaults.incident_type
        } else {
            incident_type.to_string()
        },
        severity: Severity::from_code(severity).unwrap_or(defaults.severity),
        scope: IncidentScope::from_code(scope).unwrap_or(defaults.scope),
        automation_level: AutomationLevel::from_code(automation).unwrap_or(defaults.automation_level),
    }
}

#[component]
fn MetricsCards(metrics: IncidentMetrics) -> impl IntoView {
    view! {
        <section class="panel">
            <h3 class="panel__title">{icon("clock")} " Expected Performance Metrics"</h3>
            <div class="metric-grid">
                {metrics.rows().into_iter().map(|(label, value)| view! {
                    <div class="metric-grid__item">
                        <div class="metric-grid__label">{label}</div>
                        <div class="metric-grid__value">{value}</div>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}

/// "automated / total" step counter
fn automation_summary(playbook: &IncidentPlaybook) -> String {
    format!("{} / {}", playbook.automated_step_count(), playbook.steps.len())
}

#[component]
fn PlaybookOverview(playbook: IncidentPlaybook, copy_feedback: CopyFeedback) -> impl IntoView {
    let playbook = StoredValue::new(playbook);
    let automated = playbook.with_value(automation_summary);

    let on_export = move |_| {
        playbook.with_value(|p| {
            if let Err(e) = export_json(p, &p.export_file_name()) {
                log::error!("Playbook export failed: {}", e);
            }
        });
    };

    let on_copy = move |_| {
        match playbook.with_value(to_export_json) {
            Ok(json) => copy_feedback.copy(PLAYBOOK_COPY_KEY, &json),
            Err(e) => log::error!("Playbook copy failed: {}", e),
        }
    };

    let p = playbook.get_value();
    view! {
        <section class="panel playbook-overview">
            <dl class="kv-list kv-list--inline">
                <dt>"Playbook ID"</dt>
                <dd><strong>{p.playbook_id.clone()}</strong></dd>
                <dt>"Incident Type"</dt>
                <dd><Badge variant="outline">{p.incident_type.clone()}</Badge></dd>
                <dt>"Severity"</dt>
                <dd><SeverityBadge severity=p.severity /></dd>
                <dt>"Estimated Duration"</dt>
                <dd><strong>{p.estimated_duration.clone()}</strong></dd>
                <dt>"Automated Steps"</dt>
                <dd>{automated}</dd>
                <dt>"Generated"</dt>
                <dd>{format_datetime(&p.generated_at)}</dd>
            </dl>
            <div class="playbook-overview__actions">
                <Button variant="outline" size="sm" on_click=Callback::new(on_export)>
                    {icon("download")} " Export Playbook"
                </Button>
                <Button variant="outline" size="sm" on_click=Callback::new(on_copy)>
                    {move || {
                        if copy_feedback.is_copied(PLAYBOOK_COPY_KEY) {
                            icon("check")
                        } else {
                            icon("copy")
                        }
                    }}
                    " Copy JSON"
                </Button>
            </div>
        </section>
    }
}

/// Incident response playbook generator
#[component]
pub fn IrPlaybookDashboard() -> impl IntoView {
    let defaults = PlaybookRequest::default();

    // Configuration
    let incident_type = RwSignal::new(defaults.incident_type);
    let severity = RwSignal::new(defaults.severity.code().to_string());
    let scope = RwSignal::new(defaults.scope.code().to_string());
    let automation = RwSignal::new(defaults.automation_level.code().to_string());

    // Data state
    let (templates, set_templates) = signal(Vec::<PlaybookTemplate>::new());
    let (playbook, set_playbook) = signal(None::<IncidentPlaybook>);
    let (metrics, set_metrics) = signal(None::<IncidentMetrics>);
    let (generating, set_generating) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let current_phase = RwSignal::new(0usize);
    let active_tab = RwSignal::new(TAB_STEPS.to_string());
    let copy_feedback = CopyFeedback::new();

    // Load templates on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_templates().await {
                Ok(list) => set_templates.set(list),
                Err(e) => log::error!("Failed to load playbook templates: {}", e),
            }
        });
    });

    let generate = move || {
        let request = build_request(
            &incident_type.get_untracked(),
            &severity.get_untracked(),
            &scope.get_untracked(),
            &automation.get_untracked(),
        );
        set_generating.set(true);
        set_error.set(None);

        spawn_local(async move {
            let (playbook_res, metrics_res) = futures::join!(
                api::generate_playbook(&request),
                api::get_metrics(&request.incident_type)
            );
            match (playbook_res, metrics_res) {
                (Ok(p), Ok(m)) => {
                    set_playbook.set(Some(p));
                    set_metrics.set(Some(m));
                    current_phase.set(0);
                }
                (Err(e), _) | (_, Err(e)) => {
                    log::error!("Failed to generate playbook for {}: {}", request.incident_type, e);
                    set_error.set(Some(e));
                }
            }
            set_generating.set(false);
        });
    };

    let type_options = Signal::derive(move || templates.with(|t| template_options(t)));

    view! {
        <div class="dashboard">
            <PageHeader
                title="Incident Response Playbook Generator"
                subtitle="Generate customized IR playbooks based on incident type and organizational needs"
                icon_name="file-text"
            />

            <section class="panel">
                <h3 class="panel__title">"Playbook Configuration"</h3>
                <div class="config-grid">
                    <Select
                        label="Incident Type"
                        id="playbook-incident-type"
                        value=incident_type
                        options=type_options
                        on_value_change=Callback::new(move |v| incident_type.set(v))
                    />
                    <Select
                        label="Severity"
                        id="playbook-severity"
                        value=severity
                        options=severity_options(&PLAYBOOK_SEVERITIES)
                        on_value_change=Callback::new(move |v| severity.set(v))
                    />
                    <Select
                        label="Scope"
                        id="playbook-scope"
                        value=scope
                        options=scope_options()
                        on_value_change=Callback::new(move |v| scope.set(v))
                    />
                    <Select
                        label="Automation"
                        id="playbook-automation"
                        value=automation
                        options=automation_options()
                        on_value_change=Callback::new(move |v| automation.set(v))
                    />
                </div>
                <Button class="button--block" loading=generating on_click=Callback::new(move |_| generate())>
                    "Generate Playbook"
                </Button>
            </section>

            {move || error.get().map(|err| view! {
                <MessageBar intent=MessageBarIntent::Error>
                    {format!("Failed to generate playbook: {}", err)}
                </MessageBar>
            })}

            <Show when=move || generating.get() && playbook.with(|p| p.is_none())>
                <div class="dashboard__loading"><Spinner /></div>
            </Show>

            {move || playbook.get().map(|p| view! {
                <PlaybookOverview playbook=p copy_feedback=copy_feedback />
            })}

            {move || metrics.get().map(|m| view! { <MetricsCards metrics=m /> })}

            <Show when=move || playbook.with(|p| p.is_some())>
                <TabList selected_value=active_tab>
                    <Tab value=TAB_STEPS>"Response Steps"</Tab>
                    <Tab value=TAB_STAKEHOLDERS>"Stakeholders"</Tab>
                    <Tab value=TAB_EVIDENCE>"Evidence"</Tab>
                    <Tab value=TAB_COMPLIANCE>"Compliance"</Tab>
                </TabList>

                <div class="tab-content">
                    {move || playbook.get().map(|p| match active_tab.get().as_str() {
                        TAB_STAKEHOLDERS => view! {
                            <StakeholdersTab stakeholders=p.stakeholders copy_feedback=copy_feedback />
                        }
                            .into_any(),
                        TAB_EVIDENCE => view! { <EvidenceTab items=p.evidence_collection /> }.into_any(),
                        TAB_COMPLIANCE => view! {
                            <ComplianceTab
                                requirements=p.compliance_requirements
                                mitre_techniques=p.mitre_techniques
                                success_metrics=p.success_metrics
                            />
                        }
                            .into_any(),
                        _ => view! { <PhaseSteps phases=p.phases() current=current_phase /> }.into_any(),
                    })}
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_request_from_dropdowns() {
        let req = build_request("data_breach", "critical", "enterprise-wide", "advanced");
        assert_eq!(req.incident_type, "data_breach");
        assert_eq!(req.severity, Severity::Critical);
        assert_eq!(req.scope, IncidentScope::EnterpriseWide);
        assert_eq!(req.automation_level, AutomationLevel::Advanced);
    }

    #[test]
    fn test_build_request_falls_back_to_defaults() {
        let req = build_request("", "bogus", "", "turbo");
        assert_eq!(req, PlaybookRequest::default());
    }

    #[test]
    fn test_generator_options() {
        let scopes: Vec<_> = scope_options().into_iter().map(|o| o.value).collect();
        assert_eq!(scopes, vec!["single", "multiple", "enterprise-wide"]);
        assert_eq!(automation_options()[1], SelectOption::new("standard", "Standard"));
        let severities: Vec<_> = severity_options(&PLAYBOOK_SEVERITIES).into_iter().map(|o| o.value).collect();
        assert_eq!(severities, vec!["low", "medium", "high", "critical"]);
    }

    #[test]
    fn test_template_options_use_template_id() {
        let templates = vec![PlaybookTemplate {
            template_id: "ransomware".to_string(),
            name: "Ransomware Attack".to_string(),
            description: String::new(),
            incident_types: vec![],
            complexity: "high".to_string(),
            typical_duration: "3-7 days".to_string(),
            required_skills: vec![],
        }];
        assert_eq!(template_options(&templates), vec![SelectOption::new("ransomware", "Ransomware Attack")]);
    }
    #[test]
    fn test_overview_reads_an_owned_playbook_copy() {
        let playbook: IncidentPlaybook = serde_json::from_value(serde_json::json!({
            "playbook_id": "PB-RANSOMWARE-1234",
            "incident_type": "Ransomware Attack",
            "severity": "high",
            "generated_at": "2024-01-15T10:30:00Z",
            "estimated_duration": "3-7 days",
            "steps": [
                {
                    "step_number": 1, "phase": "Detection", "action": "Isolate",
                    "description": "", "responsible_party": "SOC",
                    "estimated_time": "15m", "automation_available": true
                },
                {
                    "step_number": 2, "phase": "Containment", "action": "Block",
                    "description": "", "responsible_party": "SOC",
                    "estimated_time": "30m", "automation_available": false
                }
            ]
        }))
        .unwrap();
        let stored = StoredValue::new(playbook.clone());

        let owned = stored.get_value();

        assert_eq!(owned, playbook);
        assert_eq!(stored.with_value(automation_summary), "1 / 2");
    }
}
