use gloo_timers::future::TimeoutFuture;
use log::{debug, warn};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::behavior::counter::CounterAnimation;
use crate::config;
use crate::observer::Observation;

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    /// Final text, e.g. `"1,250+"`. Shown as-is until the counter scrolls into view.
    pub value: AttrValue,
}

#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let node = use_node_ref();
    let text = use_state(|| props.value.to_string());

    {
        let node = node.clone();
        let text = text.clone();
        let value = props.value.clone();
        use_effect_with_deps(
            move |_| {
                let observation = Observation::new(
                    Some(config::COUNTER_THRESHOLD),
                    None,
                    move |element, observer| {
                        // animates at most once per page load
                        observer.unobserve(&element);
                        let Some(mut animation) = CounterAnimation::from_text(&value) else {
                            debug!("{} is too large to count up, left as is", value);
                            return;
                        };
                        let text = text.clone();
                        spawn_local(async move {
                            loop {
                                TimeoutFuture::new(config::COUNTER_TICK_MS).await;
                                let frame = animation.step();
                                text.set(frame.text);
                                if frame.done {
                                    break;
                                }
                            }
                        });
                    },
                );

                let observation = match observation {
                    Ok(observation) => {
                        if let Some(element) = node.cast::<web_sys::Element>() {
                            observation.observe(&element);
                        }
                        Some(observation)
                    }
                    Err(e) => {
                        warn!("stat counter disabled: {}", e);
                        None
                    }
                };

                move || drop(observation)
            },
            (),
        );
    }

    html! {
        <span class="stat-number" ref={node}>{(*text).clone()}</span>
    }
}
