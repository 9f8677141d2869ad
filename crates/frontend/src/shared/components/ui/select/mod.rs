//! Custom dropdown selector.
//!
//! The selected value is owned by the caller; the widget only owns whether
//! its panel is open. A press anywhere outside the widget closes it.

pub mod outside_click;
pub mod state;

use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use super::label::Label;
use crate::shared::icons::icon;
use outside_click::{watch_pointer_down, DocumentListener};
pub use state::{
    display_label, selected_index, selected_option, SelectOption, SelectState, DEFAULT_PLACEHOLDER,
};

/// Document press: only a press outside the widget closes it.
/// A widget whose state is already disposed ignores the press.
fn apply_document_press(set_state: WriteSignal<SelectState>, inside: bool) {
    set_state.try_update(|s| s.pointer_down(inside));
}

/// Item activated: the caller hears the value first, then the panel closes.
fn choose_item(
    state: ReadSignal<SelectState>,
    set_state: WriteSignal<SelectState>,
    on_value_change: Option<Callback<String>>,
    value: String,
) {
    let mut next = state.get_untracked();
    next.select_with(value, |v| {
        if let Some(handler) = on_value_change {
            handler.run(v);
        }
    });
    set_state.set(next);
}

/// Dropdown selector with label support
#[component]
pub fn Select(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current value, owned by the caller
    #[prop(into)]
    value: Signal<String>,
    /// Called with the chosen value before the panel closes
    #[prop(optional)]
    on_value_change: Option<Callback<String>>,
    /// Options in display order
    #[prop(into)]
    options: Signal<Vec<SelectOption>>,
    /// Text shown while no value is selected
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// ID for the trigger button
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let (state, set_state) = signal(SelectState::default());
    let root_ref = NodeRef::<Div>::new();
    let listener = StoredValue::new_local(None::<DocumentListener>);

    Effect::new(move |_| {
        if let Some(root) = root_ref.get() {
            let guard = watch_pointer_down(root.unchecked_into(), move |inside| {
                apply_document_press(set_state, inside)
            });
            listener.set_value(guard);
        }
    });

    on_cleanup(move || listener.dispose());

    let trigger_id = move || id.get().unwrap_or_default();
    let additional_class = move || class.get().unwrap_or_default();
    let is_disabled = move || disabled.get().unwrap_or(false);
    let placeholder_text =
        move || placeholder.get().unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string());

    let selected = Memo::new(move |_| options.with(|opts| value.with(|v| selected_index(opts, v))));
    let has_selection = move || selected.get().is_some();
    let trigger_text = move || {
        let fallback = placeholder_text();
        options.with(|opts| value.with(|v| display_label(opts, v, &fallback)))
    };
    let panel_visible = move || state.get().is_open() && options.with(|opts| !opts.is_empty());

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <Label for_id=trigger_id()>{l}</Label>
            })}
            <div
                node_ref=root_ref
                class=move || {
                    let open = if state.get().is_open() { "select--open" } else { "" };
                    format!("select {} {}", open, additional_class())
                }
            >
                <button
                    id=trigger_id
                    type="button"
                    class="select__trigger"
                    aria-haspopup="listbox"
                    aria-expanded=move || state.get().is_open().to_string()
                    disabled=is_disabled
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_state.update(|s| s.toggle());
                    }
                >
                    <span class=move || {
                        if has_selection() {
                            "select__value"
                        } else {
                            "select__value select__value--placeholder"
                        }
                    }>
                        {trigger_text}
                    </span>
                    <span class="select__chevron">{icon("chevron-down")}</span>
                </button>

                <Show when=panel_visible>
                    <div class="select__content" role="listbox">
                        <For
                            each=move || options.get().into_iter().enumerate()
                            key=|(idx, opt)| (*idx, opt.value.clone())
                            children=move |(idx, opt)| {
                                let SelectOption { value: item_value, label: item_label } = opt;
                                let is_selected = Memo::new(move |_| selected.get() == Some(idx));

                                view! {
                                    <div
                                        role="option"
                                        aria-selected=move || is_selected.get().to_string()
                                        class=move || {
                                            if is_selected.get() {
                                                "select__item select__item--selected"
                                            } else {
                                                "select__item"
                                            }
                                        }
                                        on:click=move |ev| {
                                            ev.stop_propagation();
                                            choose_item(state, set_state, on_value_change, item_value.clone());
                                        }
                                    >
                                        <span class="select__item-label">{item_label}</span>
                                        <Show when=move || is_selected.get()>
                                            <span class="select__check">{icon("check")}</span>
                                        </Show>
                                    </div>
                                }
                            }
                        />
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::outside_click::press_handler;
    use super::*;
    use std::sync::{Arc, Mutex};

    // node ids: 1 = root, 2 = trigger, 3 = item
    const WIDGET: [u32; 3] = [1, 2, 3];

    #[test]
    fn test_document_press_updates_widget_state() {
        let (state, set_state) = signal(SelectState::Open);
        let handle = press_handler(
            |target: &u32| WIDGET.contains(target),
            move |inside| apply_document_press(set_state, inside),
        );

        handle(3);
        assert!(state.get_untracked().is_open());

        handle(99);
        assert_eq!(state.get_untracked(), SelectState::Closed);

        handle(99);
        assert_eq!(state.get_untracked(), SelectState::Closed);
    }

    #[test]
    fn test_choose_item_reports_before_closing() {
        let (state, set_state) = signal(SelectState::Open);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let on_change = Callback::new({
            let seen = seen.clone();
            move |v: String| seen.lock().unwrap().push((v, state.get_untracked()))
        });

        choose_item(state, set_state, Some(on_change), "b".to_string());

        assert_eq!(*seen.lock().unwrap(), vec![("b".to_string(), SelectState::Open)]);
        assert_eq!(state.get_untracked(), SelectState::Closed);
    }

    #[test]
    fn test_choose_item_without_handler_closes() {
        let (state, set_state) = signal(SelectState::Open);

        choose_item(state, set_state, None, "a".to_string());

        assert_eq!(state.get_untracked(), SelectState::Closed);
    }
}
