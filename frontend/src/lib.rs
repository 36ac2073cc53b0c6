//! WebAssembly enhancements for the static portfolio page.
//!
//! [`mount`] attaches every component to the markup already in the document
//! and returns a [`PageHandle`] owning their listeners, observers and timers.

mod api;
/// Compile-time configuration.
pub mod config;
/// Contact form handling.
pub mod contact;
/// DOM lookup and listener helpers.
pub mod dom;
/// Card focus elevation.
pub mod focus;
/// Footer year.
pub mod footer;
/// Skill bar reveal.
pub mod skills;
/// Anchor scrolling and scroll-spy.
pub mod scroll_nav;
/// Fallible `localStorage` access.
pub mod storage;
/// Theme manager.
pub mod theme;
/// Typing animation.
pub mod typing;

use portfolio_shared::Typewriter;
use web_sys::console;

/// Everything [`mount`] started. Dropping it detaches the page behavior.
pub struct PageHandle {
    _theme: Option<theme::ThemeToggle>,
    _nav: Option<scroll_nav::ScrollNav>,
    _typing: Option<typing::TypingAnimator>,
    _skills: Option<skills::SkillReveal>,
    _contact: Option<contact::ContactHandler>,
    _focus: focus::FocusElevation,
}

impl PageHandle {
    /// Leaves everything running for the lifetime of the page.
    pub fn keep_alive(self) {
        std::mem::forget(self);
    }
}

fn skipped(component: &str, reason: &str) {
    console::warn_1(&format!("{} disabled: {}", component, reason).into());
}

/// Attaches all components to the current document.
///
/// Fails only without a `window`/`document`; components whose elements are
/// missing are skipped with a console warning.
pub fn mount() -> Result<PageHandle, String> {
    dom::document()?;

    footer::set_year();

    let theme = theme::ThemeTargets::find().map(theme::ThemeToggle::mount);
    if theme.is_none() {
        skipped("theme toggle", "#themeToggle not found");
    }

    let typing = dom::query("#typing")
        .map(|el| typing::TypingAnimator::start(el, Typewriter::default()));
    if typing.is_none() {
        skipped("typing effect", "#typing not found");
    }

    let nav = scroll_nav::ScrollNav::mount()
        .map_err(|e| skipped("scroll navigation", &e))
        .ok();

    let skills = skills::SkillReveal::mount()
        .map_err(|e| skipped("skill reveal", &e))
        .ok();

    let contact = contact::ContactElements::find().map(contact::ContactHandler::mount);
    if contact.is_none() {
        skipped("contact form", "#contactForm or #formMsg not found");
    }

    Ok(PageHandle {
        _theme: theme,
        _nav: nav,
        _typing: typing,
        _skills: skills,
        _contact: contact,
        _focus: focus::FocusElevation::mount(),
    })
}
