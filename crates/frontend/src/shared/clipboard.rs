//! Clipboard utilities for copying text to clipboard
//!
//! Uses the Web Clipboard API. [`CopyFeedback`] drives the short-lived
//! "copied" indicator next to copy buttons.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// How long a "copied" indicator stays visible
pub const COPIED_RESET_MS: u32 = 2_000;

/// Copy text to clipboard with a callback on success
pub fn copy_to_clipboard_with_callback<F>(text: &str, on_success: F)
where
    F: FnOnce() + 'static,
{
    let text = text.to_owned();
    spawn_local(async move {
        let Some(window) = web_sys::window() else {
            return;
        };
        let clipboard = window.navigator().clipboard();
        match wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text)).await {
            Ok(_) => on_success(),
            Err(err) => log::warn!("Clipboard write failed: {:?}", err),
        }
    });
}

/// Remembers which value was copied last and forgets it after [`COPIED_RESET_MS`].
#[derive(Clone, Copy)]
pub struct CopyFeedback {
    copied: RwSignal<Option<String>>,
}

impl CopyFeedback {
    pub fn new() -> Self {
        Self {
            copied: RwSignal::new(None),
        }
    }

    pub fn is_copied(&self, key: &str) -> bool {
        self.copied.with(|c| c.as_deref() == Some(key))
    }

    /// Copy `text`; on success mark `key` as copied for a moment.
    pub fn copy(&self, key: impl Into<String>, text: &str) {
        let copied = self.copied;
        let key = key.into();
        copy_to_clipboard_with_callback(text, move || {
            copied.set(Some(key.clone()));
            Timeout::new(COPIED_RESET_MS, move || {
                copied.try_update(|current| {
                    if current.as_deref() == Some(key.as_str()) {
                        *current = None;
                    }
                });
            })
            .forget();
        });
    }
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::new()
    }
}
