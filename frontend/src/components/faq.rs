use std::rc::Rc;

use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::behavior::accordion::{Accordion, AccordionAction};

impl Reducible for Accordion {
    type Action = AccordionAction;

    fn reduce(self: Rc<Self>, action: AccordionAction) -> Rc<Self> {
        let mut next = *self;
        next.apply(action);
        Rc::new(next)
    }
}

#[derive(Clone, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct FaqListProps {
    pub entries: Vec<FaqEntry>,
}

#[function_component(FaqList)]
pub fn faq_list(props: &FaqListProps) -> Html {
    let accordion = use_reducer(Accordion::default);

    {
        let accordion = accordion.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                accordion.dispatch(AccordionAction::CollapseAll);
            }
        });
    }

    html! {
        <div class="faq-list">
            { for props.entries.iter().enumerate().map(|(index, entry)| {
                let open = accordion.is_expanded(index);
                let toggle = {
                    let accordion = accordion.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        accordion.dispatch(AccordionAction::Activate(index));
                    })
                };
                html! {
                    <div key={index} class={classes!("faq-item", open.then_some("active"))}>
                        <button class="faq-question" aria-expanded={open.to_string()} onclick={toggle}>
                            <span class="question-text">{entry.question}</span>
                            <span class="toggle-icon">{if open { "−" } else { "+" }}</span>
                        </button>
                        <div class="faq-answer">
                            <p>{entry.answer}</p>
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}
