//! Footer year placeholder.

use js_sys::Date;

/// Fills the `#year` placeholder with the current year.
pub fn set_year() {
    if let Some(el) = crate::dom::query("#year") {
        el.set_text_content(Some(&Date::new_0().get_full_year().to_string()));
    }
}
