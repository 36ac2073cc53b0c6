//! Lifts cards slightly while they hold keyboard focus.

use web_sys::Element;

use crate::dom::{self, Listener};

/// Cards that get the elevation effect.
pub const CARD_SELECTOR: &str = ".service-card, .project-card";
/// Transform applied while focused.
pub const FOCUSED_TRANSFORM: &str = "translateY(-8px)";

/// Focus/blur listeners for every card.
pub struct FocusElevation {
    _listeners: Vec<Listener>,
}

impl FocusElevation {
    /// Wires every element matching [`CARD_SELECTOR`].
    pub fn mount() -> Self {
        let listeners = dom::query_all(CARD_SELECTOR).iter().flat_map(elevate).collect();
        Self {
            _listeners: listeners,
        }
    }
}

fn elevate(card: &Element) -> [Listener; 2] {
    let on_focus = {
        let lifted = card.clone();
        Listener::new(card, "focus", move |_| {
            dom::set_style(&lifted, "transform", FOCUSED_TRANSFORM)
        })
    };
    let on_blur = {
        let lifted = card.clone();
        Listener::new(card, "blur", move |_| dom::set_style(&lifted, "transform", ""))
    };
    [on_focus, on_blur]
}
