//! Light/dark switch bound to `#themeToggle`.

use std::{cell::RefCell, rc::Rc};

use portfolio_shared::theme::{self, Theme, ThemeState, DARK_CLASS, THEME_STORAGE_KEY};
use web_sys::{console, Element, HtmlImageElement};

use crate::{config::asset_path, dom, dom::Listener, storage};

/// Elements a theme change touches.
#[derive(Clone)]
pub struct ThemeTargets {
    /// `<html>`, carrying the `dark` class.
    pub root: Element,
    /// Toggle button, carrying `aria-pressed`.
    pub toggle: Element,
    /// Hero photo swapped per mode.
    pub photo: Option<HtmlImageElement>,
}

impl ThemeTargets {
    /// Looks up the theme elements; `None` if the root or toggle is missing.
    pub fn find() -> Option<Self> {
        let root = dom::document().ok()?.document_element()?;
        let toggle = dom::query("#themeToggle")?;
        Some(Self {
            root,
            toggle,
            photo: dom::query_as::<HtmlImageElement>("#heroPhoto"),
        })
    }
}

/// Reflects `theme` on the page: root class, pressed state and hero photo.
pub fn apply_theme(targets: &ThemeTargets, theme: Theme) {
    dom::set_class(&targets.root, DARK_CLASS, theme.is_dark());
    let _ = targets.toggle.set_attribute("aria-pressed", theme.aria_pressed());
    if let Some(photo) = &targets.photo {
        photo.set_src(&asset_path(theme.hero_photo()));
    }
}

fn prefers_dark() -> Option<bool> {
    dom::window()
        .ok()?
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .map(|query| query.matches())
}

/// Theme applied at load: stored value first, then the system preference.
pub fn initial_theme() -> Theme {
    let stored = match storage::get(THEME_STORAGE_KEY) {
        Ok(value) => value,
        Err(e) => {
            console::warn_1(&format!("Theme init error: {}", e).into());
            None
        }
    };
    theme::resolve_initial(stored.as_deref(), prefers_dark())
}

/// Owns the toggle listener and the current mode.
pub struct ThemeToggle {
    state: Rc<RefCell<ThemeState>>,
    _listener: Listener,
}

impl ThemeToggle {
    /// Applies the initial theme and starts listening for clicks.
    pub fn mount(targets: ThemeTargets) -> Self {
        let initial = initial_theme();
        apply_theme(&targets, initial);
        let state = Rc::new(RefCell::new(ThemeState::new(initial)));

        let listener = {
            let state = state.clone();
            let button = targets.toggle.clone();
            Listener::new(&button, "click", move |_| {
                let next = state.borrow_mut().toggle();
                apply_theme(&targets, next);
                if let Err(e) = storage::set(THEME_STORAGE_KEY, next.as_str()) {
                    console::warn_1(&format!("Theme save error: {}", e).into());
                }
            })
        };

        Self {
            state,
            _listener: listener,
        }
    }

    /// Mode currently shown.
    pub fn current(&self) -> Theme {
        self.state.borrow().current()
    }
}
