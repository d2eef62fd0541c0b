//! Document-level theme switching for project cards.
//!
//! The theme lives as a `data-theme` attribute on the document element and a
//! set of CSS custom properties; everything here degrades to a no-op when no
//! browser context is available.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, MediaQueryList, MediaQueryListEvent};

const THEME_ATTRIBUTE: &str = "data-theme";
const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Theme a card (or the whole document) renders in. `Auto` follows the
/// system color-scheme preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Auto,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Auto => "auto",
        }
    }
}

/// Default CSS custom properties for the light theme.
pub const LIGHT_THEME_VARIABLES: &[(&str, &str)] = &[
    ("--pc-primary", "#0066cc"),
    ("--pc-bg-primary", "#ffffff"),
    ("--pc-text-primary", "#1a1a1a"),
    ("--pc-border-primary", "#e1e5e9"),
];

/// Default CSS custom properties for the dark theme.
pub const DARK_THEME_VARIABLES: &[(&str, &str)] = &[
    ("--pc-primary", "#4da6ff"),
    ("--pc-bg-primary", "#1a1a1a"),
    ("--pc-text-primary", "#ffffff"),
    ("--pc-border-primary", "#333"),
];

/// Sets or removes the theme attribute on the document element. `Auto`
/// resolves against the current system preference once; use [`watch_theme`]
/// to track preference changes.
pub fn apply_theme(theme: Theme) {
    let Some(root) = document_root() else {
        return;
    };
    match theme {
        Theme::Light => {
            let _ = root.remove_attribute(THEME_ATTRIBUTE);
        }
        Theme::Dark => {
            let _ = root.set_attribute(THEME_ATTRIBUTE, "dark");
        }
        Theme::Auto => {
            if prefers_dark() {
                let _ = root.set_attribute(THEME_ATTRIBUTE, "dark");
            } else {
                let _ = root.remove_attribute(THEME_ATTRIBUTE);
            }
        }
    }
}

/// Reads the theme currently applied to the document; `Light` when unset or
/// outside a browser.
pub fn current_theme() -> Theme {
    let is_dark = document_root()
        .and_then(|root| root.get_attribute(THEME_ATTRIBUTE))
        .map(|value| value == "dark")
        .unwrap_or(false);
    if is_dark {
        Theme::Dark
    } else {
        Theme::Light
    }
}

/// Live subscription to system color-scheme changes. The caller owns the
/// handle and must call [`ThemeWatch::unsubscribe`] to release the listener.
pub struct ThemeWatch {
    subscription: Option<(MediaQueryList, Closure<dyn FnMut(MediaQueryListEvent)>)>,
}

impl ThemeWatch {
    pub fn is_active(&self) -> bool {
        self.subscription.is_some()
    }

    /// Removes the change listener. Consumes the handle; the closure is
    /// dropped with it.
    pub fn unsubscribe(self) {
        if let Some((query, closure)) = self.subscription {
            let _ = query
                .remove_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
        }
    }
}

/// For `Auto`, subscribes to system preference changes and keeps the
/// document attribute in sync. Fixed themes return an inert handle.
pub fn watch_theme(theme: Theme) -> ThemeWatch {
    if theme != Theme::Auto {
        return ThemeWatch { subscription: None };
    }
    let Some(query) = media_query() else {
        return ThemeWatch { subscription: None };
    };
    let closure = Closure::<dyn FnMut(MediaQueryListEvent)>::new(|event: MediaQueryListEvent| {
        let Some(root) = document_root() else {
            return;
        };
        if event.matches() {
            let _ = root.set_attribute(THEME_ATTRIBUTE, "dark");
        } else {
            let _ = root.remove_attribute(THEME_ATTRIBUTE);
        }
    });
    if query
        .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
        .is_err()
    {
        return ThemeWatch { subscription: None };
    }
    ThemeWatch {
        subscription: Some((query, closure)),
    }
}

/// Sets CSS custom properties on the document element, e.g. to install
/// [`LIGHT_THEME_VARIABLES`] or a custom palette.
pub fn apply_theme_variables(variables: &[(&str, &str)]) {
    let Some(style) = root_style() else {
        return;
    };
    for (name, value) in variables {
        let _ = style.set_property(name, value);
    }
}

/// Removes previously injected CSS custom properties by name.
pub fn remove_theme_variables(names: &[&str]) {
    let Some(style) = root_style() else {
        return;
    };
    for name in names {
        let _ = style.remove_property(name);
    }
}

fn document_root() -> Option<Element> {
    web_sys::window()?.document()?.document_element()
}

fn root_style() -> Option<web_sys::CssStyleDeclaration> {
    let root = document_root()?;
    let root: web_sys::HtmlElement = root.dyn_into().ok()?;
    Some(root.style())
}

fn media_query() -> Option<MediaQueryList> {
    web_sys::window()?.match_media(DARK_SCHEME_QUERY).ok()?
}

fn prefers_dark() -> bool {
    media_query().map(|query| query.matches()).unwrap_or(false)
}
