//! The page-wide controller shared by every component.
//!
//! It owns the window and document it acts on, so components receive it from
//! context instead of reaching for `web_sys::window()` themselves. The two
//! operations other scripts may call are also published as
//! `window.ROADSAFE.showNotification` and `window.ROADSAFE.scrollTo`.

use gloo_timers::callback::Timeout;
use log::{debug, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Function, Object, Reflect};
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};
use yew::prelude::{hook, use_context};

use crate::behavior::analytics::TrackedEvent;
use crate::behavior::anchor::plan_scroll;
use crate::behavior::device::DeviceClass;
use crate::behavior::notification::{number_text, NotificationKind, TOAST_HIDDEN, TOAST_SHOWN};
use crate::config;
use crate::error::SiteError;

#[derive(Clone, PartialEq)]
pub struct PageController {
    window: Window,
    document: Document,
}

impl PageController {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    pub fn from_browser() -> Result<Self, SiteError> {
        let window = web_sys::window().ok_or(SiteError::NoWindow)?;
        let document = window.document().ok_or(SiteError::NoWindow)?;
        Ok(Self::new(window, document))
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn body(&self) -> Option<HtmlElement> {
        self.document.body()
    }

    pub fn viewport_width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or_default()
    }

    pub fn set_body_class(&self, class: &str, on: bool) {
        if let Some(body) = self.body() {
            let list = body.class_list();
            let _ = if on { list.add_1(class) } else { list.remove_1(class) };
        }
    }

    pub fn set_body_overflow(&self, value: &str) {
        if let Some(body) = self.body() {
            let _ = body.style().set_property("overflow", value);
        }
    }

    fn header_height(&self) -> f64 {
        self.document
            .query_selector(config::HEADER_SELECTOR)
            .ok()
            .flatten()
            .and_then(|header| header.dyn_into::<HtmlElement>().ok())
            .map(|header| header.offset_height() as f64)
            .unwrap_or_default()
    }

    /// Smooth-scrolls so the element sits just below the fixed header and
    /// returns the position scrolled to. Returns `None`, without moving, when
    /// no element has that id.
    pub fn scroll_to(&self, element_id: &str) -> Option<f64> {
        let target_top = self
            .document
            .get_element_by_id(element_id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .map(|el| el.offset_top() as f64);
        let Some(top) = plan_scroll(target_top, self.header_height()) else {
            debug!("scroll target #{} not found", element_id);
            return None;
        };

        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
        Some(top)
    }

    /// Shows a toast in the top-right corner which slides out again after five seconds.
    pub fn show_notification(&self, message: &str, kind: Option<&str>) -> Result<(), SiteError> {
        let kind = NotificationKind::parse(kind);
        let body = self.body().ok_or(SiteError::NoWindow)?;
        let toast: HtmlElement = self
            .document
            .create_element("div")
            .map_err(|_| SiteError::CreateElement("div"))?
            .dyn_into()
            .map_err(|_| SiteError::CreateElement("div"))?;
        toast.set_class_name(&kind.class_name());
        toast.set_attribute("style", &kind.toast_css())?;
        toast.set_text_content(Some(message));
        body.append_child(&toast)?;

        {
            let toast = toast.clone();
            Timeout::new(config::TOAST_SLIDE_IN_MS, move || {
                let _ = toast.style().set_property("transform", TOAST_SHOWN);
            })
            .forget();
        }

        Timeout::new(config::TOAST_LIFETIME_MS, move || {
            let _ = toast.style().set_property("transform", TOAST_HIDDEN);
            Timeout::new(config::TOAST_REMOVE_MS, move || toast.remove()).forget();
        })
        .forget();

        Ok(())
    }

    pub fn apply_device_classes(&self) {
        let user_agent = self.window.navigator().user_agent().unwrap_or_default();
        let device = DeviceClass::detect(&user_agent, self.viewport_width());
        for class in device.body_classes() {
            self.set_body_class(class, true);
        }
        debug!("device classes: {:?}", device);
    }

    /// Forwards to `gtag` when the page loaded it; otherwise nothing happens.
    pub fn track_event(&self, event: &TrackedEvent) {
        let Ok(gtag) = Reflect::get(&self.window, &JsValue::from_str("gtag")) else {
            return;
        };
        let Ok(gtag) = gtag.dyn_into::<Function>() else {
            return;
        };
        let params = match serde_wasm_bindgen::to_value(&event.params()) {
            Ok(params) => params,
            Err(e) => {
                warn!("could not encode analytics params: {}", e);
                return;
            }
        };
        if let Err(e) = gtag.call3(
            &JsValue::NULL,
            &JsValue::from_str("event"),
            &JsValue::from_str(event.action),
            &params,
        ) {
            warn!("gtag call failed: {:?}", e);
        }
    }

    /// Publishes `showNotification` and `scrollTo` on `window` for other scripts.
    pub fn install_global(&self) -> Result<(), SiteError> {
        let namespace = Object::new();

        let controller = self.clone();
        let show = Closure::<dyn Fn(JsValue, JsValue)>::new(move |message: JsValue, kind: JsValue| {
            let message = message_text(&message);
            if let Err(e) = controller.show_notification(&message, kind.as_string().as_deref()) {
                warn!("showNotification failed: {}", e);
            }
        });
        let controller = self.clone();
        let scroll = Closure::<dyn Fn(JsValue)>::new(move |element_id: JsValue| {
            if let Some(id) = element_id.as_string() {
                controller.scroll_to(&id);
            }
        });

        let installed = Reflect::set(&namespace, &"showNotification".into(), &show.into_js_value())
            .and_then(|_| Reflect::set(&namespace, &"scrollTo".into(), &scroll.into_js_value()))
            .and_then(|_| Reflect::set(&self.window, &config::GLOBAL_NAMESPACE.into(), &namespace));
        match installed {
            Ok(true) => {
                info!("window.{} ready", config::GLOBAL_NAMESPACE);
                Ok(())
            }
            _ => Err(SiteError::Namespace(config::GLOBAL_NAMESPACE)),
        }
    }
}

/// Converts whatever a caller passed as the toast message to its display text.
/// `null` shows nothing, like assigning it to `textContent`.
fn message_text(message: &JsValue) -> String {
    if let Some(text) = message.as_string() {
        text
    } else if let Some(value) = message.as_f64() {
        number_text(value)
    } else if let Some(flag) = message.as_bool() {
        flag.to_string()
    } else if message.is_null() {
        String::new()
    } else if message.is_undefined() {
        "undefined".to_string()
    } else {
        message.unchecked_ref::<Object>().to_string().into()
    }
}

/// The controller `App` provides to every page.
#[hook]
pub fn use_controller() -> PageController {
    use_context::<PageController>().expect("App provides the PageController context")
}
