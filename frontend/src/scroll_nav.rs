//! Offset-compensated anchor scrolling and scroll-spy highlighting.
//!
//! Link clicks and section visibility both report to one [`ActiveNav`], so
//! whichever fired last decides the highlighted link.

use std::{cell::RefCell, rc::Rc};

use portfolio_shared::nav::{
    parse_header_height, scroll_target, ActiveNav, ACTIVE_CLASS, HEADER_HEIGHT_PROPERTY,
    SECTION_THRESHOLD,
};
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserverEntry, ScrollBehavior, ScrollToOptions};

use crate::dom::{self, Listener, Observer};

/// In-page navigation links.
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
/// Sections tracked by the scroll-spy.
pub const SECTION_SELECTOR: &str = "#main section";
/// Attribute naming the section a link scrolls to.
pub const TARGET_ATTRIBUTE: &str = "data-target";

/// Nav links in document order together with the active-link owner.
#[derive(Clone)]
pub struct NavLinks {
    links: Rc<Vec<Element>>,
    active: Rc<RefCell<ActiveNav>>,
}

impl NavLinks {
    /// Collects links from the document.
    pub fn find() -> Self {
        Self::new(dom::query_all(NAV_LINK_SELECTOR))
    }

    /// Wraps an explicit set of links.
    pub fn new(links: Vec<Element>) -> Self {
        let targets = links
            .iter()
            .map(|link| link.get_attribute(TARGET_ATTRIBUTE).unwrap_or_default());
        let active = ActiveNav::new(targets);
        Self {
            links: Rc::new(links),
            active: Rc::new(RefCell::new(active)),
        }
    }

    /// Highlights the link for section `id`, if one exists.
    pub fn activate_target(&self, id: &str) {
        if self.active.borrow_mut().set_active(id) {
            self.render();
        }
    }

    /// Highlights the link at `index`.
    pub fn activate_index(&self, index: usize) {
        if self.active.borrow_mut().set_active_index(index) {
            self.render();
        }
    }

    /// Target of the highlighted link.
    pub fn active_target(&self) -> Option<String> {
        self.active.borrow().active().map(str::to_string)
    }

    fn render(&self) {
        let active = self.active.borrow();
        for (idx, link) in self.links.iter().enumerate() {
            dom::set_class(link, ACTIVE_CLASS, active.is_active_index(idx));
        }
    }
}

/// Header height from the root's `--nav-height`, defaulting to 68.
fn header_height() -> i64 {
    let raw = dom::window()
        .ok()
        .zip(dom::document().ok().and_then(|doc| doc.document_element()))
        .and_then(|(win, root)| win.get_computed_style(&root).ok().flatten())
        .and_then(|style| style.get_property_value(HEADER_HEIGHT_PROPERTY).ok())
        .unwrap_or_default();
    parse_header_height(&raw)
}

/// Smooth-scrolls so section `id` lands just below the fixed header.
/// Unknown ids do nothing.
pub fn scroll_to_id(id: &str) {
    let Ok(doc) = dom::document() else {
        return;
    };
    let Some(section) = doc.get_element_by_id(id) else {
        return;
    };
    let Ok(window) = dom::window() else {
        return;
    };
    let top = scroll_target(
        window.scroll_y().unwrap_or(0.0),
        section.get_bounding_client_rect().top(),
        header_height(),
    );

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Click handlers plus the section observer.
pub struct ScrollNav {
    _listeners: Vec<Listener>,
    _observer: Observer,
}

impl ScrollNav {
    /// Wires click-to-scroll on every link and starts the scroll-spy.
    pub fn mount() -> Result<Self, String> {
        let links = NavLinks::find();

        let listeners = links
            .links
            .iter()
            .enumerate()
            .map(|(idx, link)| {
                let nav = links.clone();
                let target = link.get_attribute(TARGET_ATTRIBUTE).unwrap_or_default();
                Listener::new(link, "click", move |event| {
                    event.prevent_default();
                    scroll_to_id(&target);
                    nav.activate_index(idx);
                })
            })
            .collect();

        let observer = {
            let nav = links.clone();
            Observer::new(SECTION_THRESHOLD, move |entries, _| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        nav.activate_target(&entry.target().id());
                    }
                }
            })?
        };
        for section in dom::query_all(SECTION_SELECTOR) {
            observer.observe(&section);
        }

        Ok(Self {
            _listeners: listeners,
            _observer: observer,
        })
    }
}
