use crate::shared::components::ui::Badge;
use crate::shared::components::ProgressBar;
use crate::shared::icons::icon;
use contracts::dashboards::d440_ir_playbooks::{PlaybookPhase, PlaybookStep};
use leptos::prelude::*;

/// Progress through the phases in percent, counting the current one as done
fn phase_progress(current: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (current.min(total - 1) + 1) as f64 * 100.0 / total as f64
    }
}

fn phase_icon(name: &str) -> &'static str {
    match name {
        "Preparation" => "shield",
        "Detection and Analysis" => "target",
        "Containment" => "alert-triangle",
        "Eradication" => "activity",
        "Recovery" => "refresh",
        _ => "file-text",
    }
}

#[component]
fn StepCard(step: PlaybookStep) -> impl IntoView {
    let tools = step.required_tools;
    let criteria = step.success_criteria;
    let triggers = step.escalation_triggers;

    view! {
        <div class="step-card">
            <div class="step-card__number">{step.step_number}</div>
            <div class="step-card__body">
                <div class="step-card__header">
                    <h4 class="step-card__action">{step.action}</h4>
                    {step.automation_available.then(|| view! {
                        <Badge variant="primary">"Automated"</Badge>
                    })}
                </div>
                <p class="step-card__description">{step.description}</p>
                <dl class="kv-list kv-list--inline">
                    <dt>"Responsible"</dt>
                    <dd>{step.responsible_party}</dd>
                    <dt>"Estimated Time"</dt>
                    <dd>{step.estimated_time}</dd>
                </dl>
                {(!tools.is_empty()).then(|| view! {
                    <div class="step-card__section">
                        <div class="step-card__section-title">"Required Tools"</div>
                        <div class="tag-row">
                            {tools.into_iter().map(|t| view! { <Badge variant="outline">{t}</Badge> }).collect_view()}
                        </div>
                    </div>
                })}
                {(!criteria.is_empty()).then(|| view! {
                    <div class="step-card__section">
                        <div class="step-card__section-title">"Success Criteria"</div>
                        <ul>{criteria.into_iter().map(|c| view! { <li class="text--success">{c}</li> }).collect_view()}</ul>
                    </div>
                })}
                {(!triggers.is_empty()).then(|| view! {
                    <div class="step-card__section">
                        <div class="step-card__section-title">"Escalation Triggers"</div>
                        <ul>{triggers.into_iter().map(|t| view! { <li class="text--error">{t}</li> }).collect_view()}</ul>
                    </div>
                })}
            </div>
        </div>
    }
}

/// Phase navigation bar plus the steps of the selected phase
#[component]
pub fn PhaseSteps(phases: Vec<PlaybookPhase>, current: RwSignal<usize>) -> impl IntoView {
    if phases.is_empty() {
        return view! { <p class="panel__empty">"This playbook has no steps"</p> }.into_any();
    }

    let total = phases.len();
    let phases = StoredValue::new(phases);
    let selected = move || current.get().min(total - 1);

    view! {
        <section class="panel">
            <div class="phase-nav">
                {phases.with_value(|list| {
                    list.iter().enumerate().map(|(idx, phase)| {
                        let name = phase.name.clone();
                        let step_count = phase.steps.len();
                        let class = move || {
                            if selected() == idx {
                                "phase-nav__item phase-nav__item--active"
                            } else {
                                "phase-nav__item"
                            }
                        };
                        view! {
                            <button type="button" class=class on:click=move |_| current.set(idx)>
                                <span class="phase-nav__icon">{icon(phase_icon(&name))}</span>
                                <span class="phase-nav__name">{name.clone()}</span>
                                <span class="phase-nav__count">{format!("{} steps", step_count)}</span>
                            </button>
                            {(idx + 1 < total).then(|| view! {
                                <span class="phase-nav__separator">{icon("chevron-right")}</span>
                            })}
                        }
                    }).collect_view()
                })}
            </div>
            <ProgressBar value=Signal::derive(move || phase_progress(selected(), total)) />
        </section>

        <section class="panel">
            {move || phases.with_value(|list| list.get(selected()).cloned()).map(|phase| view! {
                <h3 class="panel__title">{format!("{} - Detailed Steps", phase.name)}</h3>
                <div class="step-list">
                    {phase.steps.into_iter().map(|s| view! { <StepCard step=s /> }).collect_view()}
                </div>
            })}
        </section>
    }
        .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_progress() {
        assert_eq!(phase_progress(0, 4), 25.0);
        assert_eq!(phase_progress(3, 4), 100.0);
        assert_eq!(phase_progress(9, 4), 100.0);
        assert_eq!(phase_progress(0, 0), 0.0);
    }

    #[test]
    fn test_phase_icon_fallback() {
        assert_eq!(phase_icon("Containment"), "alert-triangle");
        assert_eq!(phase_icon("Lessons Learned"), "file-text");
    }
}
