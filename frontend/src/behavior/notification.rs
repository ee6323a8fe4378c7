#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    /// Unknown or missing kinds fall back to `Info`.
    pub fn parse(kind: Option<&str>) -> Self {
        match kind.map(str::trim) {
            Some("success") => NotificationKind::Success,
            Some("warning") => NotificationKind::Warning,
            Some("error") => NotificationKind::Error,
            _ => NotificationKind::Info,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
            NotificationKind::Warning => "warning",
            NotificationKind::Error => "error",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            NotificationKind::Info => "#2563eb",
            NotificationKind::Success => "#10b981",
            NotificationKind::Warning => "#f59e0b",
            NotificationKind::Error => "#ef4444",
        }
    }

    pub fn class_name(self) -> String {
        format!("notification notification-{}", self.as_str())
    }

    /// Initial inline style: parked off-screen to the right, ready to slide in.
    pub fn toast_css(self) -> String {
        format!(
            "position: fixed; top: 20px; right: 20px; padding: 1rem 1.5rem; \
             border-radius: 8px; color: white; font-weight: 500; z-index: 10000; \
             transform: {}; transition: transform 0.3s ease; background-color: {};",
            TOAST_HIDDEN,
            self.color()
        )
    }
}

pub const TOAST_HIDDEN: &str = "translateX(100%)";
pub const TOAST_SHOWN: &str = "translateX(0)";

/// Text a toast shows for a numeric message, spelled the way the page's
/// scripts would print it (`42`, not `42.0`).
pub fn number_text(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_palette() {
        assert_eq!(NotificationKind::parse(Some("success")).color(), "#10b981");
        assert_eq!(NotificationKind::parse(Some("warning")).color(), "#f59e0b");
        assert_eq!(NotificationKind::parse(Some("error")).color(), "#ef4444");
        assert_eq!(NotificationKind::parse(Some("info")).color(), "#2563eb");
    }

    #[test]
    fn unknown_kind_defaults_to_info() {
        assert_eq!(NotificationKind::parse(None), NotificationKind::Info);
        assert_eq!(NotificationKind::parse(Some("fatal")), NotificationKind::Info);
        assert_eq!(NotificationKind::parse(Some("fatal")).class_name(), "notification notification-info");
    }

    #[test]
    fn toast_starts_off_screen() {
        let css = NotificationKind::Error.toast_css();
        assert!(css.contains("transform: translateX(100%)"));
        assert!(css.contains("background-color: #ef4444"));
        assert!(css.contains("position: fixed"));
    }

    #[test]
    fn numeric_messages_read_like_script_output() {
        assert_eq!(number_text(42.0), "42");
        assert_eq!(number_text(-0.0), "0");
        assert_eq!(number_text(2.5), "2.5");
        assert_eq!(number_text(f64::NAN), "NaN");
        assert_eq!(number_text(f64::NEG_INFINITY), "-Infinity");
    }
}
