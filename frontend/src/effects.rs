//! Page-wide listeners that belong to no single section.

use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Element, ErrorEvent, Event, HtmlElement, KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::behavior::analytics::events_for_click;
use crate::behavior::anchor::{fragment_id, menu_after_scroll};
use crate::behavior::navigation::MenuState;
use crate::config;
use crate::controller::PageController;

fn event_element(target: Option<web_sys::EventTarget>) -> Option<Element> {
    target.and_then(|t| t.dyn_into::<Element>().ok())
}

/// Uncaught errors go to the console; other handlers keep running.
#[hook]
pub fn use_error_log() {
    use_event_with_window("error", move |e: ErrorEvent| {
        gloo_console::error!("Error in ROADSAFE:", e.error());
    });
}

/// `keyboard-navigation` on body while the visitor is tabbing around.
#[hook]
pub fn use_focus_indicator(controller: PageController) {
    {
        let controller = controller.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Tab" {
                controller.set_body_class("keyboard-navigation", true);
            }
        });
    }
    use_event_with_window("mousedown", move |_: MouseEvent| {
        controller.set_body_class("keyboard-navigation", false);
    });
}

fn finish_loading(controller: &PageController) {
    controller.set_body_class("loaded", true);
    let preloader = controller
        .document()
        .query_selector(".preloader")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    if let Some(preloader) = preloader {
        let _ = preloader.style().set_property("opacity", "0");
        Timeout::new(config::PRELOADER_FADE_MS, move || preloader.remove()).forget();
    }
}

/// Fades out the static preloader once the window has loaded.
#[hook]
pub fn use_preloader(controller: PageController) {
    {
        let controller = controller.clone();
        use_effect_with_deps(
            move |_| {
                // the wasm bundle often arrives after `load` already fired
                if controller.document().ready_state() == "complete" {
                    finish_loading(&controller);
                }
                || ()
            },
            (),
        );
    }
    use_event_with_window("load", move |_: Event| finish_loading(&controller));
}

#[hook]
pub fn use_click_tracking(controller: PageController) {
    use_event_with_window("click", move |e: MouseEvent| {
        let Some(target) = event_element(e.target()) else {
            return;
        };
        let is_primary = target.class_list().contains("btn-primary");
        let in_card = target.closest(".service-card").ok().flatten().is_some();
        for event in events_for_click(is_primary, in_card) {
            controller.track_event(&event);
        }
    });
}

/// Every `a[href^="#"]` click scrolls below the header instead of jumping.
#[hook]
pub fn use_anchor_scrolling(controller: PageController, menu: UseReducerHandle<MenuState>) {
    use_event_with_window("click", move |e: MouseEvent| {
        let Some(link) = event_element(e.target())
            .and_then(|target| target.closest("a[href^=\"#\"]").ok().flatten())
        else {
            return;
        };
        e.prevent_default();

        let href = link.get_attribute("href").unwrap_or_default();
        let Some(id) = fragment_id(&href) else {
            debug!("ignoring link to bare #");
            return;
        };
        if let Some(action) = menu_after_scroll(controller.scroll_to(&id)) {
            menu.dispatch(action);
        }
    });
}
