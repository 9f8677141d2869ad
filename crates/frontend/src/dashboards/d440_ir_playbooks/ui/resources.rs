use crate::shared::clipboard::CopyFeedback;
use crate::shared::components::ui::Badge;
use crate::shared::components::CopyButton;
use contracts::dashboards::d440_ir_playbooks::{EvidenceItem, StakeholderNotification};
use leptos::prelude::*;
use std::collections::BTreeMap;

/// Who to notify, when, and the message to send
#[component]
pub fn StakeholdersTab(
    stakeholders: Vec<StakeholderNotification>,
    copy_feedback: CopyFeedback,
) -> impl IntoView {
    view! {
        <div class="card-grid">
            {stakeholders.into_iter().map(|s| view! {
                <section class="panel stakeholder-card">
                    <div class="stakeholder-card__header">
                        <h3 class="panel__title">{s.stakeholder_type}</h3>
                        <Badge variant="outline">{s.notification_method}</Badge>
                    </div>
                    <dl class="kv-list">
                        <dt>"Trigger"</dt>
                        <dd>{s.notification_trigger}</dd>
                        <dt>"Escalation"</dt>
                        <dd>{s.escalation_threshold}</dd>
                    </dl>
                    <div class="template-block">
                        <div class="template-block__header">
                            <span class="step-card__section-title">"Communication Template"</span>
                            <CopyButton
                                text=s.communication_template.clone()
                                feedback=copy_feedback
                                title="Copy template"
                            />
                        </div>
                        <pre class="template-block__body">{s.communication_template}</pre>
                    </div>
                </section>
            }).collect_view()}
        </div>
    }
}

#[component]
pub fn EvidenceTab(items: Vec<EvidenceItem>) -> impl IntoView {
    view! {
        <div class="card-grid">
            {items.into_iter().map(|e| view! {
                <section class="panel">
                    <h3 class="panel__title">{e.evidence_type}</h3>
                    <dl class="kv-list">
                        <dt>"Collection"</dt>
                        <dd>{e.collection_method}</dd>
                        <dt>"Retention"</dt>
                        <dd>{e.retention_period}</dd>
                        <dt>"Storage"</dt>
                        <dd>{e.storage_location}</dd>
                    </dl>
                    <div class="tag-row">
                        {e.chain_of_custody.then(|| view! { <Badge variant="primary">"Chain of Custody"</Badge> })}
                        {e.legal_hold_required.then(|| view! { <Badge variant="warning">"Legal Hold"</Badge> })}
                    </div>
                </section>
            }).collect_view()}
        </div>
    }
}

/// Regulatory requirements, mapped ATT&CK techniques and success metrics
#[component]
pub fn ComplianceTab(
    requirements: Vec<String>,
    mitre_techniques: Vec<String>,
    success_metrics: BTreeMap<String, String>,
) -> impl IntoView {
    view! {
        <div class="dashboard__grid">
            <section class="panel">
                <h3 class="panel__title">"Compliance Requirements"</h3>
                <ul class="priority-list">
                    {requirements.into_iter().map(|r| view! { <li>{r}</li> }).collect_view()}
                </ul>
            </section>
            <section class="panel">
                <h3 class="panel__title">"MITRE ATT&CK Techniques"</h3>
                <div class="tag-row">
                    {mitre_techniques.into_iter().map(|t| view! { <Badge variant="outline">{t}</Badge> }).collect_view()}
                </div>
            </section>
        </div>
        {(!success_metrics.is_empty()).then(|| view! {
            <section class="panel">
                <h3 class="panel__title">"Success Metrics"</h3>
                <dl class="kv-list">
                    {success_metrics.into_iter().map(|(k, v)| view! {
                        <dt>{k}</dt>
                        <dd>{v}</dd>
                    }).collect_view()}
                </dl>
            </section>
        })}
    }
}
