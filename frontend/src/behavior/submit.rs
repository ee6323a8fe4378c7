//! Delivery of contact requests.
//!
//! There is no backend yet: [`SimulatedSubmitter`] waits and reports success.
//! The form only sees the [`ContactSubmitter`] trait, so tests hand it a
//! stand-in that resolves immediately.

use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use log::{debug, info};

use crate::behavior::contact::ContactRequest;
use crate::config::SUBMIT_DELAY_MS;
use crate::error::SubmitError;

pub type SubmitFuture = Pin<Box<dyn Future<Output = Result<(), SubmitError>>>>;

pub trait ContactSubmitter {
    fn submit(&self, request: ContactRequest) -> SubmitFuture;
}

/// Shared handle passed through component props.
#[derive(Clone)]
pub struct Submitter(pub Rc<dyn ContactSubmitter>);

impl PartialEq for Submitter {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for Submitter {
    fn default() -> Self {
        Submitter(Rc::new(SimulatedSubmitter { delay_ms: SUBMIT_DELAY_MS }))
    }
}

impl Submitter {
    pub fn submit(&self, request: ContactRequest) -> SubmitFuture {
        self.0.submit(request)
    }
}

pub struct SimulatedSubmitter {
    pub delay_ms: u32,
}

impl ContactSubmitter for SimulatedSubmitter {
    fn submit(&self, request: ContactRequest) -> SubmitFuture {
        let delay_ms = self.delay_ms;
        Box::pin(async move {
            info!("Sending contact request for service {:?}", request.service);
            if let Ok(body) = serde_json::to_string(&request) {
                debug!("contact payload: {}", body);
            }
            TimeoutFuture::new(delay_ms).await;
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use crate::behavior::contact::{ContactFormState, Field, FormAction};

    /// Records what it was asked to send and answers with a fixed outcome.
    struct Recorder {
        sent: RefCell<Vec<ContactRequest>>,
        outcome: Result<(), SubmitError>,
    }

    impl ContactSubmitter for Recorder {
        fn submit(&self, request: ContactRequest) -> SubmitFuture {
            self.sent.borrow_mut().push(request);
            let outcome = self.outcome.clone();
            Box::pin(async move { outcome })
        }
    }

    fn valid_form() -> ContactFormState {
        let mut form = ContactFormState::default();
        form.apply(FormAction::Input(Field::Name, "Jo".into()));
        form.apply(FormAction::Input(Field::Email, "jo@example.com".into()));
        form.apply(FormAction::Input(Field::Phone, "+1 555-123-4567".into()));
        form.apply(FormAction::Input(Field::Service, "x".into()));
        form
    }

    // Mirrors the component's submit handler.
    fn drive(form: &mut ContactFormState, submitter: &Submitter) {
        let request = form.submission();
        form.apply(FormAction::Submit);
        if let Some(request) = request {
            assert!(form.is_sending());
            let outcome = futures::executor::block_on(submitter.submit(request));
            form.apply(match outcome {
                Ok(()) => FormAction::Delivered,
                Err(_) => FormAction::Failed,
            });
        }
    }

    #[test]
    fn delivered_request_resets_the_form() {
        let recorder = Rc::new(Recorder { sent: RefCell::new(Vec::new()), outcome: Ok(()) });
        let submitter = Submitter(recorder.clone());
        let mut form = valid_form();

        drive(&mut form, &submitter);

        assert_eq!(recorder.sent.borrow().len(), 1);
        assert_eq!(recorder.sent.borrow()[0].email, "jo@example.com");
        assert!(!form.is_sending());
        assert_eq!(form.values().name, "");
        assert_eq!(form.banners().count(), 1);
    }

    #[test]
    fn invalid_form_never_reaches_the_submitter() {
        let recorder = Rc::new(Recorder { sent: RefCell::new(Vec::new()), outcome: Ok(()) });
        let submitter = Submitter(recorder.clone());
        let mut form = valid_form();
        form.apply(FormAction::Input(Field::Service, String::new()));

        drive(&mut form, &submitter);

        assert!(recorder.sent.borrow().is_empty());
        assert!(form.status(Field::Service).error().is_some());
    }

    #[test]
    fn rejected_request_keeps_input() {
        let recorder = Rc::new(Recorder {
            sent: RefCell::new(Vec::new()),
            outcome: Err(SubmitError::Rejected("offline".into())),
        });
        let submitter = Submitter(recorder);
        let mut form = valid_form();

        drive(&mut form, &submitter);

        assert!(!form.is_sending());
        assert_eq!(form.values().name, "Jo");
        assert_eq!(form.banners().count(), 0);
    }

    #[test]
    fn submitter_handles_compare_by_identity() {
        let a = Submitter::default();
        assert!(a == a.clone());
        assert!(a != Submitter::default());
    }
}
