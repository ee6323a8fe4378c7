use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlImageElement};
use yew::prelude::*;

use crate::config;
use crate::controller::PageController;
use crate::observer::Observation;

fn select_all(controller: &PageController, selector: &str) -> Vec<Element> {
    let Ok(nodes) = controller.document().query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Fades content blocks in the first time they enter the viewport.
/// `visible` is never taken away again.
#[hook]
pub fn use_scroll_reveal(controller: PageController) {
    use_effect_with_deps(
        move |_| {
            let observation = Observation::new(
                Some(config::REVEAL_THRESHOLD),
                Some(config::REVEAL_ROOT_MARGIN),
                |element, _| {
                    let _ = element.class_list().add_1("visible");
                },
            );
            let observation = match observation {
                Ok(observation) => {
                    let elements = select_all(&controller, config::REVEAL_SELECTOR);
                    debug!("revealing {} elements on scroll", elements.len());
                    for element in elements {
                        let _ = element.class_list().add_1("fade-in");
                        observation.observe(&element);
                    }
                    Some(observation)
                }
                Err(e) => {
                    warn!("scroll reveal disabled: {}", e);
                    None
                }
            };
            move || drop(observation)
        },
        (),
    );
}

/// Swaps `data-src` into `src` once an image comes close to the viewport.
#[hook]
pub fn use_lazy_images(controller: PageController) {
    use_effect_with_deps(
        move |_| {
            let observation = Observation::new(None, None, |element, observer| {
                if let Some(src) = element.get_attribute("data-src") {
                    if let Ok(img) = element.clone().dyn_into::<HtmlImageElement>() {
                        img.set_src(&src);
                    }
                }
                let _ = element.class_list().remove_1("lazy");
                observer.unobserve(&element);
            });
            let observation = match observation {
                Ok(observation) => {
                    for image in select_all(&controller, config::LAZY_IMAGE_SELECTOR) {
                        observation.observe(&image);
                    }
                    Some(observation)
                }
                Err(e) => {
                    warn!("lazy images disabled: {}", e);
                    None
                }
            };
            move || drop(observation)
        },
        (),
    );
}
