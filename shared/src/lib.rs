//! Target-independent logic behind the portfolio page: theme preference,
//! typing animation, active navigation, skill reveal and contact form rules.
//!
//! Nothing here touches the DOM, so every state machine is tested on the host.

pub mod contact;
pub mod nav;
pub mod skills;
pub mod theme;
pub mod typing;

pub use contact::{ContactForm, SubmitOutcome, ValidationError};
pub use nav::ActiveNav;
pub use skills::{RevealTracker, SkillLevel};
pub use theme::{Theme, ThemeState};
pub use typing::{Frame, Typewriter};
