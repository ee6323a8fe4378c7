use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures at the JS boundary. None of these reach the visitor; they are logged.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("no browser window available")]
    NoWindow,
    #[error("could not create <{0}> element")]
    CreateElement(&'static str),
    #[error("could not install window.{0}")]
    Namespace(&'static str),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        SiteError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("message could not be delivered: {0}")]
    Rejected(String),
}
