use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, SubmitEvent};
use yew::prelude::*;

use crate::behavior::contact::{ContactFormState, Field, FormAction, ERROR_COLOR};
use crate::behavior::submit::Submitter;
use crate::config;
use crate::controller::PageController;

impl Reducible for ContactFormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: FormAction) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

pub const SERVICES: [(&str, &str); 4] = [
    ("fleet", "Fleet safety training"),
    ("defensive", "Defensive driving course"),
    ("audit", "Road risk audit"),
    ("consulting", "Consulting"),
];

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub controller: PageController,
    #[prop_or_default]
    pub submitter: Submitter,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let form = use_reducer(ContactFormState::default);

    let on_input = |field: Field| {
        let form = form.clone();
        Callback::from(move |value: String| form.dispatch(FormAction::Input(field, value)))
    };
    let on_blur = |field: Field| {
        let form = form.clone();
        Callback::from(move |_: FocusEvent| form.dispatch(FormAction::Blur(field)))
    };

    let onsubmit = {
        let form = form.clone();
        let submitter = props.submitter.clone();
        let controller = props.controller.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = form.submission();
            form.dispatch(FormAction::Submit);
            let Some(request) = request else {
                return;
            };

            let form = form.clone();
            let submitter = submitter.clone();
            let controller = controller.clone();
            spawn_local(async move {
                match submitter.submit(request).await {
                    Ok(()) => {
                        info!("Contact request delivered");
                        form.dispatch(FormAction::Delivered);
                        // banners share one lifetime, so the oldest always goes first
                        TimeoutFuture::new(config::SUCCESS_BANNER_MS).await;
                        form.dispatch(FormAction::DismissOldestBanner);
                    }
                    Err(e) => {
                        warn!("Contact request failed: {}", e);
                        form.dispatch(FormAction::Failed);
                        if let Err(e) = controller.show_notification(&e.to_string(), Some("error")) {
                            warn!("could not show notification: {}", e);
                        }
                    }
                }
            });
        })
    };

    let group = |field: Field, label: &'static str, control: Html| {
        let status = form.status(field);
        html! {
            <div class="form-group">
                <label>{label}</label>
                { control }
                if let Some(error) = status.error() {
                    <div class="field-error" style={format!("color: {}; font-size: 0.875rem; margin-top: 0.25rem;", ERROR_COLOR)}>
                        {error.to_string()}
                    </div>
                }
            </div>
        }
    };

    let text_input = |field: Field, kind: &'static str| {
        let input = on_input(field);
        html! {
            <input
                type={kind}
                id={field.name()}
                name={field.name()}
                value={form.values().value(field).to_string()}
                style={form.status(field).control_style()}
                oninput={Callback::from(move |e: InputEvent| {
                    input.emit(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
                onblur={on_blur(field)}
            />
        }
    };

    // Reset after delivery has to reach the live <select>, not just its options.
    let select_ref = use_node_ref();
    {
        let select_ref = select_ref.clone();
        use_effect_with_deps(
            move |service: &String| {
                if let Some(select) = select_ref.cast::<HtmlSelectElement>() {
                    select.set_value(service);
                }
                || ()
            },
            form.values().service.clone(),
        );
    }

    let service_select = {
        let input = on_input(Field::Service);
        let current = form.values().service.clone();
        html! {
            <select
                ref={select_ref}
                id="service"
                name="service"
                style={form.status(Field::Service).control_style()}
                onchange={Callback::from(move |e: Event| {
                    input.emit(e.target_unchecked_into::<HtmlSelectElement>().value())
                })}
                onblur={on_blur(Field::Service)}
            >
                <option value="" selected={current.is_empty()}>{"Select a service"}</option>
                { for SERVICES.iter().map(|(value, label)| html! {
                    <option value={*value} selected={current == *value}>{*label}</option>
                }) }
            </select>
        }
    };

    let message_area = {
        let input = on_input(Field::Message);
        html! {
            <textarea
                id="message"
                name="message"
                rows="4"
                value={form.values().message.clone()}
                oninput={Callback::from(move |e: InputEvent| {
                    input.emit(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                })}
            />
        }
    };

    html! {
        <form id="contactForm" class={classes!("contact-form", form.is_sending().then_some("loading"))} {onsubmit} novalidate=true>
            { for form.banners().map(|id| html! {
                <div key={id} class="success-message">
                    <div style="background-color: #10b981; color: white; padding: 1rem 1.5rem; border-radius: 8px; margin-bottom: 1rem; text-align: center; font-weight: 500;">
                        {"✓ Message sent! We will get back to you soon."}
                    </div>
                </div>
            }) }
            { group(Field::Name, "Name", text_input(Field::Name, "text")) }
            { group(Field::Email, "Email", text_input(Field::Email, "email")) }
            { group(Field::Phone, "Phone", text_input(Field::Phone, "tel")) }
            { group(Field::Service, "Service", service_select) }
            { group(Field::Message, "Message", message_area) }
            <button type="submit" class="btn btn-primary" disabled={form.is_sending()}>
                {form.submit_label()}
            </button>
        </form>
    }
}
