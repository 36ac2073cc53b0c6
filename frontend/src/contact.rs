//! Contact form: validation, submission and button state.

use portfolio_shared::contact::{ContactForm, SubmitOutcome, SENDING_LABEL};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    console, Element, HtmlButtonElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement,
};

use crate::{api, dom, dom::Listener};

/// Disables a button and shows the in-flight label until dropped, then
/// restores the original label and re-enables it.
pub struct ButtonGuard {
    button: HtmlButtonElement,
    label: Option<String>,
}

impl ButtonGuard {
    /// Disables `button` and swaps its label for `busy_label`.
    pub fn engage(button: HtmlButtonElement, busy_label: &str) -> Self {
        button.set_disabled(true);
        let label = button.text_content();
        button.set_text_content(Some(busy_label));
        Self {
            button,
            label,
        }
    }
}

impl Drop for ButtonGuard {
    fn drop(&mut self) {
        self.button.set_disabled(false);
        self.button.set_text_content(self.label.as_deref());
    }
}

/// Elements making up the form.
#[derive(Clone)]
pub struct ContactElements {
    /// The `<form>` itself.
    pub form: HtmlFormElement,
    /// Status line under the form.
    pub message_area: Element,
}

impl ContactElements {
    /// Looks up `#contactForm` and `#formMsg`.
    pub fn find() -> Option<Self> {
        Some(Self {
            form: dom::query_as::<HtmlFormElement>("#contactForm")?,
            message_area: dom::query("#formMsg")?,
        })
    }

    fn show(&self, text: &str) {
        self.message_area.set_text_content(Some(text));
    }

    fn field_value(selector: &str) -> String {
        match dom::query(selector) {
            Some(el) => {
                if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
                    input.value()
                } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
                    area.value()
                } else {
                    String::new()
                }
            }
            None => String::new(),
        }
    }

    /// Trimmed field values.
    pub fn read(&self) -> ContactForm {
        ContactForm::from_raw(
            &Self::field_value("#name"),
            &Self::field_value("#email"),
            &Self::field_value("#message"),
        )
    }

    fn submit_button(&self) -> Option<HtmlButtonElement> {
        self.form
            .query_selector("button[type=\"submit\"]")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
    }

    /// Shows the outcome and clears the form when it was accepted.
    pub fn finish(&self, outcome: &SubmitOutcome) {
        if let SubmitOutcome::TransportError(e) = outcome {
            console::error_1(&format!("Submission error: {}", e).into());
        }
        self.show(outcome.user_message());
        if outcome.clears_form() {
            self.form.reset();
        }
    }
}

/// Submit listener on the contact form.
pub struct ContactHandler {
    _listener: Listener,
}

impl ContactHandler {
    /// Intercepts form submission.
    pub fn mount(elements: ContactElements) -> Self {
        let form = elements.form.clone();
        let listener = Listener::new(&form, "submit", move |event| {
            event.prevent_default();
            elements.show("");

            let values = elements.read();
            if let Err(e) = values.validate() {
                elements.show(&e.to_string());
                return;
            }

            let guard = elements.submit_button().map(|btn| ButtonGuard::engage(btn, SENDING_LABEL));
            let elements = elements.clone();
            spawn_local(async move {
                let _guard = guard;
                let outcome = api::submit_contact(&values).await;
                elements.finish(&outcome);
            });
        });
        Self {
            _listener: listener,
        }
    }
}
