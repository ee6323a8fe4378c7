use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::SiteError;

type EntryCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// An `IntersectionObserver` together with the closure it calls back into.
/// Dropping it disconnects the observer.
pub struct Observation {
    observer: IntersectionObserver,
    _callback: EntryCallback,
}

impl Observation {
    /// `on_enter` runs for every observed element that starts intersecting.
    pub fn new<F>(threshold: Option<f64>, root_margin: Option<&str>, mut on_enter: F) -> Result<Self, SiteError>
    where
        F: FnMut(Element, &IntersectionObserver) + 'static,
    {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        on_enter(entry.target(), &observer);
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        if let Some(threshold) = threshold {
            options.set_threshold(&JsValue::from_f64(threshold));
        }
        if let Some(margin) = root_margin {
            options.set_root_margin(margin);
        }

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        Ok(Self { observer, _callback: callback })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
