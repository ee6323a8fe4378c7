//! Contact form rules and the form's state machine.
//!
//! Every field carries an explicit [`FieldStatus`]; the component renders error
//! nodes and border colors from it and never inspects the DOM to find out
//! whether a field is invalid.

use std::collections::VecDeque;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+]?[0-9\s\-\(\)]{8,}$").expect("phone pattern"));

pub const SUBMIT_LABEL: &str = "Send message";
pub const SENDING_LABEL: &str = "Sending...";
pub const ERROR_COLOR: &str = "#ef4444";
pub const DEFAULT_BORDER_COLOR: &str = "#e5e7eb";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Service,
    Message,
}

impl Field {
    pub const VALIDATED: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Service];

    /// Value of the control's `name` and `id` attributes.
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Service => "service",
            Field::Message => "message",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
    #[error("Please select a service")]
    MissingService,
}

pub fn validate(field: Field, value: &str) -> Result<(), FieldError> {
    match field {
        Field::Name if value.trim().chars().count() < 2 => Err(FieldError::NameTooShort),
        Field::Email if !EMAIL_RE.is_match(value) => Err(FieldError::InvalidEmail),
        Field::Phone if !PHONE_RE.is_match(value) => Err(FieldError::InvalidPhone),
        Field::Service if value.is_empty() => Err(FieldError::MissingService),
        _ => Ok(()),
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldStatus {
    #[default]
    Untouched,
    Valid,
    Invalid(FieldError),
}

impl FieldStatus {
    fn from_check(result: Result<(), FieldError>) -> Self {
        match result {
            Ok(()) => FieldStatus::Valid,
            Err(e) => FieldStatus::Invalid(e),
        }
    }

    pub fn error(self) -> Option<FieldError> {
        match self {
            FieldStatus::Invalid(e) => Some(e),
            _ => None,
        }
    }

    /// Inline style for the control; untouched fields keep the stylesheet's border.
    pub fn control_style(self) -> Option<String> {
        match self {
            FieldStatus::Untouched => None,
            FieldStatus::Valid => Some(format!("border-color: {};", DEFAULT_BORDER_COLOR)),
            FieldStatus::Invalid(_) => Some(format!("border-color: {};", ERROR_COLOR)),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

impl ContactRequest {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Service => &self.service,
            Field::Message => &self.message,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Service => &mut self.service,
            Field::Message => &mut self.message,
        }
    }

    /// Failing fields, in form order.
    pub fn problems(&self) -> Vec<(Field, FieldError)> {
        Field::VALIDATED
            .iter()
            .filter_map(|&field| validate(field, self.value(field)).err().map(|e| (field, e)))
            .collect()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Sending,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FormAction {
    Input(Field, String),
    Blur(Field),
    Submit,
    Delivered,
    Failed,
    DismissOldestBanner,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFormState {
    values: ContactRequest,
    statuses: [FieldStatus; 5],
    phase: SubmitPhase,
    banners: VecDeque<u32>,
    next_banner: u32,
}

impl ContactFormState {
    pub fn values(&self) -> &ContactRequest {
        &self.values
    }

    pub fn status(&self, field: Field) -> FieldStatus {
        self.statuses[field.index()]
    }

    pub fn is_sending(&self) -> bool {
        self.phase == SubmitPhase::Sending
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_sending() {
            SENDING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// Banner ids, newest first (each one is prepended to the form).
    pub fn banners(&self) -> impl Iterator<Item = u32> + '_ {
        self.banners.iter().rev().copied()
    }

    /// The request to hand to the submitter, if a submit right now would be accepted.
    pub fn submission(&self) -> Option<ContactRequest> {
        if self.is_sending() || !self.values.problems().is_empty() {
            return None;
        }
        Some(self.values.clone())
    }

    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::Input(field, value) => {
                *self.values.slot(field) = value;
                // typing clears the error optimistically; blur re-checks
                self.statuses[field.index()] = FieldStatus::Untouched;
            }
            FormAction::Blur(field) => {
                if Field::VALIDATED.contains(&field) {
                    let value = self.values.value(field).trim();
                    self.statuses[field.index()] = FieldStatus::from_check(validate(field, value));
                }
            }
            FormAction::Submit => {
                if self.is_sending() {
                    return;
                }
                let problems = self.values.problems();
                for (field, error) in &problems {
                    self.statuses[field.index()] = FieldStatus::Invalid(*error);
                }
                if problems.is_empty() {
                    self.phase = SubmitPhase::Sending;
                }
            }
            FormAction::Delivered => {
                self.values = ContactRequest::default();
                self.statuses = Default::default();
                self.phase = SubmitPhase::Idle;
                self.banners.push_back(self.next_banner);
                self.next_banner = self.next_banner.wrapping_add(1);
            }
            FormAction::Failed => {
                self.phase = SubmitPhase::Idle;
            }
            FormAction::DismissOldestBanner => {
                self.banners.pop_front();
            }
        }
    }
}
