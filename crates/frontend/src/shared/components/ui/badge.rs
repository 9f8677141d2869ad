use contracts::enums::Severity;
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "outline", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        "outline" => "badge--outline",
        _ => "badge--neutral",
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}

/// CSS modifier for a severity badge
pub fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "badge--severity-critical",
        Severity::High => "badge--severity-high",
        Severity::Medium => "badge--severity-medium",
        Severity::Low => "badge--severity-low",
        Severity::Info => "badge--severity-info",
    }
}

/// Badge colored by threat severity, labelled with its upper-case code
#[component]
pub fn SeverityBadge(
    #[prop(into)]
    severity: Signal<Severity>,
) -> impl IntoView {
    view! {
        <span class=move || format!("badge badge--severity {}", severity_class(severity.get()))>
            {move || severity.get().code().to_uppercase()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_classes_are_distinct() {
        let classes: std::collections::HashSet<_> =
            Severity::all().iter().map(|s| severity_class(*s)).collect();
        assert_eq!(classes.len(), Severity::all().len());
    }
}
