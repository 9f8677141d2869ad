use leptos::prelude::*;

/// Clamp a percentage to `0..=100` for a bar width
pub fn bar_width(percent: f64) -> f64 {
    if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    }
}

/// Horizontal progress bar; `value` is a percentage
#[component]
pub fn ProgressBar(
    #[prop(into)]
    value: Signal<f64>,
    /// Optional fill colour (CSS colour)
    #[prop(optional, into)]
    color: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let fill_style = move || {
        let width = format!("width: {:.1}%;", bar_width(value.get()));
        match color.get() {
            Some(c) => format!("{} background: {};", width, c),
            None => width,
        }
    };

    view! {
        <div
            class=move || format!("progress {}", class.get().unwrap_or_default())
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=move || format!("{:.0}", bar_width(value.get()))
        >
            <div class="progress__fill" style=fill_style></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_width_clamps() {
        assert_eq!(bar_width(-5.0), 0.0);
        assert_eq!(bar_width(42.5), 42.5);
        assert_eq!(bar_width(140.0), 100.0);
        assert_eq!(bar_width(f64::NAN), 0.0);
    }
}
