//! Open/closed state of the dropdown and label resolution.
//!
//! Kept free of DOM types so the whole state machine can be exercised by
//! plain unit tests.

/// Placeholder shown when nothing is selected
pub const DEFAULT_PLACEHOLDER: &str = "Select...";

/// One selectable entry of a dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

impl<V: Into<String>, L: Into<String>> From<(V, L)> for SelectOption {
    fn from((value, label): (V, L)) -> Self {
        Self::new(value, label)
    }
}

/// Closed (initial) or Open. The selected value is owned by the parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectState {
    #[default]
    Closed,
    Open,
}

impl SelectState {
    pub fn is_open(&self) -> bool {
        matches!(self, SelectState::Open)
    }

    /// Trigger activated
    pub fn toggle(&mut self) {
        *self = match self {
            SelectState::Closed => SelectState::Open,
            SelectState::Open => SelectState::Closed,
        };
    }

    pub fn close(&mut self) {
        *self = SelectState::Closed;
    }

    /// Item activated: report the candidate first, then close.
    pub fn select_with<V>(&mut self, candidate: V, report: impl FnOnce(V)) {
        report(candidate);
        self.close();
    }

    /// Document-level pointer-down. Only a press outside the widget closes it.
    ///
    /// Returns `true` when this press closed the dropdown.
    pub fn pointer_down(&mut self, inside_widget: bool) -> bool {
        if inside_widget || !self.is_open() {
            return false;
        }
        self.close();
        true
    }
}

/// Position of the selected option; the first one wins on duplicates.
pub fn selected_index(options: &[SelectOption], value: &str) -> Option<usize> {
    options.iter().position(|o| o.value == value)
}

/// The option whose value equals `value`; the first one wins on duplicates.
pub fn selected_option<'a>(options: &'a [SelectOption], value: &str) -> Option<&'a SelectOption> {
    selected_index(options, value).and_then(|idx| options.get(idx))
}

/// Text shown on the trigger: the matching option's label, else the raw
/// value, else the placeholder. An empty value counts as unset.
pub fn display_label(options: &[SelectOption], value: &str, placeholder: &str) -> String {
    if let Some(option) = selected_option(options, value) {
        return option.label.clone();
    }
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn options() -> Vec<SelectOption> {
        vec![SelectOption::new("a", "Alpha"), SelectOption::new("b", "Bravo")]
    }

    #[test]
    fn test_starts_closed() {
        assert_eq!(SelectState::default(), SelectState::Closed);
        assert!(!SelectState::default().is_open());
    }

    #[test]
    fn test_toggle_parity() {
        for n in 0..9 {
            let mut state = SelectState::default();
            for _ in 0..n {
                state.toggle();
            }
            assert_eq!(state.is_open(), n % 2 == 1, "after {} toggles", n);
        }
    }

    #[test]
    fn test_select_reports_once_and_closes() {
        let mut state = SelectState::Open;
        let reported = RefCell::new(Vec::new());
        let chosen = options()[1].value.clone();

        state.select_with(chosen, |v| reported.borrow_mut().push(v));

        assert_eq!(state, SelectState::Closed);
        assert_eq!(reported.into_inner(), vec!["b".to_string()]);
    }

    #[test]
    fn test_select_without_callback_still_closes() {
        let mut state = SelectState::Open;
        state.select_with("a", |_| {});
        assert!(!state.is_open());
    }

    #[test]
    fn test_outside_pointer_down_closes() {
        let mut state = SelectState::Open;
        assert!(state.pointer_down(false));
        assert_eq!(state, SelectState::Closed);
    }

    #[test]
    fn test_inside_pointer_down_keeps_open() {
        let mut state = SelectState::Open;
        assert!(!state.pointer_down(true));
        assert!(state.is_open());
    }

    #[test]
    fn test_outside_pointer_down_when_closed_is_noop() {
        let mut state = SelectState::Closed;
        assert!(!state.pointer_down(false));
        assert_eq!(state, SelectState::Closed);
    }

    #[test]
    fn test_display_label_uses_matching_option() {
        assert_eq!(display_label(&options(), "b", DEFAULT_PLACEHOLDER), "Bravo");
    }

    #[test]
    fn test_display_label_falls_back_to_raw_value() {
        assert_eq!(display_label(&options(), "x", DEFAULT_PLACEHOLDER), "x");
    }

    #[test]
    fn test_display_label_placeholder_when_unset() {
        assert_eq!(display_label(&options(), "", DEFAULT_PLACEHOLDER), "Select...");
        assert_eq!(display_label(&[], "", "Pick one"), "Pick one");
    }

    #[test]
    fn test_duplicate_values_first_wins() {
        let opts = vec![SelectOption::new("a", "First"), SelectOption::new("a", "Second")];
        assert_eq!(selected_option(&opts, "a").map(|o| o.label.as_str()), Some("First"));
    }

    #[test]
    fn test_selected_index_marks_only_first_duplicate() {
        let opts = vec![
            SelectOption::new("b", "Bravo"),
            SelectOption::new("a", "First"),
            SelectOption::new("a", "Second"),
        ];
        assert_eq!(selected_index(&opts, "a"), Some(1));
        assert_eq!(selected_index(&opts, "b"), Some(0));
        assert_eq!(selected_index(&opts, "z"), None);
        assert_eq!(selected_index(&opts, ""), None);
    }

    #[test]
    fn test_option_from_tuple() {
        let opt: SelectOption = ("high", "High").into();
        assert_eq!(opt, SelectOption::new("high", "High"));
    }
}
