use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrackedEvent {
    pub category: &'static str,
    pub action: &'static str,
    pub label: &'static str,
}

impl TrackedEvent {
    pub fn params(&self) -> EventParams {
        EventParams {
            event_category: self.category,
            event_label: self.label,
        }
    }
}

/// Third argument of `gtag("event", action, params)`.
#[derive(Debug, Serialize)]
pub struct EventParams {
    pub event_category: &'static str,
    pub event_label: &'static str,
}

pub const PRIMARY_CTA: TrackedEvent = TrackedEvent {
    category: "Button",
    action: "Click",
    label: "Primary CTA",
};

pub const SERVICE_CARD: TrackedEvent = TrackedEvent {
    category: "Service",
    action: "Click",
    label: "Service Card",
};

/// Events a click produces, given what the click target is.
pub fn events_for_click(is_primary_button: bool, inside_service_card: bool) -> Vec<TrackedEvent> {
    let mut events = Vec::new();
    if is_primary_button {
        events.push(PRIMARY_CTA);
    }
    if inside_service_card {
        events.push(SERVICE_CARD);
    }
    events
}
