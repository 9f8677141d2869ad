use super::progress_bar::ProgressBar;
use leptos::prelude::*;

/// One labelled row of a horizontal bar chart
#[derive(Debug, Clone, PartialEq)]
pub struct BarDatum {
    pub label: String,
    /// Percentage of the full bar, `0..=100`
    pub percent: f64,
    /// Text shown at the end of the row
    pub caption: String,
    pub color: Option<String>,
}

impl BarDatum {
    pub fn new(label: impl Into<String>, percent: f64, caption: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            percent,
            caption: caption.into(),
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// `count` as a share of `total` in percent; zero when `total` is zero
pub fn share_percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 * 100.0 / total as f64
    }
}

/// Stacked rows of labelled progress bars
#[component]
pub fn CoverageBars(#[prop(into)] rows: Signal<Vec<BarDatum>>) -> impl IntoView {
    view! {
        <div class="coverage-bars">
            <For
                each=move || rows.get().into_iter().enumerate()
                key=|(idx, row)| (*idx, row.label.clone())
                children=move |(_, row)| {
                    let BarDatum { label, percent, caption, color } = row;
                    view! {
                        <div class="coverage-bars__row">
                            <div class="coverage-bars__header">
                                <span class="coverage-bars__label">{label}</span>
                                <span class="coverage-bars__caption">{caption}</span>
                            </div>
                            <ProgressBar value=percent color=color />
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_percent() {
        assert_eq!(share_percent(0, 0), 0.0);
        assert_eq!(share_percent(1, 4), 25.0);
        assert_eq!(share_percent(3, 3), 100.0);
    }

    #[test]
    fn test_with_color() {
        let row = BarDatum::new("Excellent", 40.0, "4").with_color("#22c55e");
        assert_eq!(row.color.as_deref(), Some("#22c55e"));
    }
}
