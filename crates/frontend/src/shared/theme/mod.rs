//! Theme management module for the application.
//!
//! Provides a context-based theme system with dark and light themes.
//! Theme preference is persisted in localStorage.

use leptos::prelude::*;
use thaw::ConfigProvider;
use web_sys::window;

use crate::shared::components::ui::{Select, SelectOption};

/// Available themes in the application.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Returns the theme name as a string (used for the data attribute and localStorage).
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Returns the display name for the UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }

    /// Parse theme from string, unknown values fall back to dark.
    pub fn from_code(s: &str) -> Self {
        match s {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }

    /// Returns all available themes.
    pub fn all() -> [Theme; 2] {
        [Theme::Dark, Theme::Light]
    }
}

const THEME_STORAGE_KEY: &str = "cipher-theme";

/// Load theme from localStorage.
fn load_theme_from_storage() -> Theme {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
        .map(|s| Theme::from_code(&s))
        .unwrap_or_default()
}

/// Save theme to localStorage.
fn save_theme_to_storage(theme: Theme) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        if storage.set_item(THEME_STORAGE_KEY, theme.as_str()).is_err() {
            log::warn!("Failed to persist theme '{}'", theme.as_str());
        }
    }
}

/// Apply theme via the `data-theme` attribute on the root element.
fn apply_theme(theme: Theme) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let _ = root.set_attribute("data-theme", theme.as_str());
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme signal.
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    fn from_storage() -> Self {
        Self {
            theme: RwSignal::new(load_theme_from_storage()),
        }
    }

    /// Set the theme and persist to storage.
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        save_theme_to_storage(theme);
        apply_theme(theme);
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let context = ThemeContext::from_storage();
    apply_theme(context.theme.get_untracked());
    provide_context(context);

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().unwrap_or_else(|| {
        log::warn!("ThemeContext not provided, reading theme from storage");
        ThemeContext::from_storage()
    })
}

fn thaw_theme_for(theme: Theme) -> thaw::Theme {
    match theme {
        Theme::Dark => thaw::Theme::dark(),
        Theme::Light => thaw::Theme::light(),
    }
}

/// Wraps children in thaw's `ConfigProvider`, following the app theme.
#[component]
pub fn ThawThemeBridge(children: Children) -> impl IntoView {
    let ctx = use_theme();
    let thaw_theme = RwSignal::new(thaw_theme_for(ctx.theme.get_untracked()));
    Effect::new(move |_| thaw_theme.set(thaw_theme_for(ctx.theme.get())));

    view! {
        <ConfigProvider theme=thaw_theme>
            {children()}
        </ConfigProvider>
    }
}

/// Theme dropdown for the top navigation bar.
#[component]
pub fn ThemeSelector() -> impl IntoView {
    let ctx = use_theme();

    let options: Vec<SelectOption> = Theme::all()
        .into_iter()
        .map(|t| SelectOption::new(t.as_str(), t.display_name()))
        .collect();

    view! {
        <Select
            class="theme-selector"
            value=Signal::derive(move || ctx.theme.get().as_str().to_string())
            options=options
            on_value_change=Callback::new(move |code: String| ctx.set_theme(Theme::from_code(&code)))
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Theme::from_code("light"), Theme::Light);
        assert_eq!(Theme::from_code("dark"), Theme::Dark);
        assert_eq!(Theme::from_code("forest"), Theme::Dark);
    }

    #[test]
    fn test_codes_round_trip() {
        for theme in Theme::all() {
            assert_eq!(Theme::from_code(theme.as_str()), theme);
        }
    }
}
