//! Thin helpers over `web_sys` lookups and listener lifetimes.

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver, Window};

/// Global `window`.
pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "no global `window` exists".to_string())
}

/// The page document.
pub fn document() -> Result<Document, String> {
    window()?.document().ok_or_else(|| "window has no document".to_string())
}

/// `document.querySelector`, swallowing selector errors.
pub fn query(selector: &str) -> Option<Element> {
    document().ok()?.query_selector(selector).ok().flatten()
}

/// `querySelector` cast to a concrete element type.
pub fn query_as<T: JsCast>(selector: &str) -> Option<T> {
    query(selector).and_then(|el| el.dyn_into::<T>().ok())
}

/// `document.querySelectorAll` collected into elements.
pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(list) = document().ok().and_then(|doc| doc.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Adds or removes `class` on `el`.
pub fn set_class(el: &Element, class: &str, on: bool) {
    let classes = el.class_list();
    let _ = if on { classes.add_1(class) } else { classes.remove_1(class) };
}

/// Sets an inline style property; an empty value clears it.
pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(el) = el.dyn_ref::<HtmlElement>() {
        let style = el.style();
        let _ = if value.is_empty() {
            style.remove_property(property).map(|_| ())
        } else {
            style.set_property(property, value)
        };
    }
}

/// An event listener that is removed when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Registers `handler` for `event` on `target`.
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Self
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let _ = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            event,
            callback,
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Callback signature of an `IntersectionObserver`.
pub type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// An `IntersectionObserver` disconnected when dropped, together with its
/// callback closure.
pub struct Observer {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Observer {
    /// Creates an observer with the given visibility threshold and a zero
    /// root margin against the viewport.
    pub fn new<F>(threshold: f64, handler: F) -> Result<Self, String>
    where
        F: FnMut(js_sys::Array, IntersectionObserver) + 'static,
    {
        let callback: ObserverCallback = Closure::wrap(
            Box::new(handler) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>
        );
        let options = web_sys::IntersectionObserverInit::new();
        options.set_root_margin("0px");
        options.set_threshold(&threshold.into());
        let observer = IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(|e| format!("IntersectionObserver error: {:?}", e))?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    /// Starts watching `el`.
    pub fn observe(&self, el: &Element) {
        self.observer.observe(el);
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
