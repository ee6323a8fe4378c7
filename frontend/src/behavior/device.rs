use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::MOBILE_BREAKPOINT_PX;

static MOBILE_UA: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)Android|webOS|iPhone|iPad|iPod|BlackBerry|IEMobile|Opera Mini")
        .expect("mobile user agent pattern")
});
static TABLET_UA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)iPad|Android").expect("tablet user agent pattern"));

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeviceClass {
    pub mobile: bool,
    pub tablet: bool,
}

impl DeviceClass {
    /// A wide Android or iPad client is both mobile and tablet.
    pub fn detect(user_agent: &str, viewport_width: f64) -> Self {
        Self {
            mobile: MOBILE_UA.is_match(user_agent),
            tablet: TABLET_UA.is_match(user_agent) && viewport_width > MOBILE_BREAKPOINT_PX,
        }
    }

    pub fn body_classes(self) -> Vec<&'static str> {
        let mut classes = vec![if self.mobile { "is-mobile" } else { "is-desktop" }];
        if self.tablet {
            classes.push("is-tablet");
        }
        classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IPHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15";
    const IPAD: &str = "Mozilla/5.0 (iPad; CPU OS 16_6 like Mac OS X) AppleWebKit/605.1.15";
    const DESKTOP: &str = "Mozilla/5.0 (X11; Linux x86_64) Gecko/20100101 Firefox/129.0";

    #[test]
    fn phone_is_mobile_only() {
        let device = DeviceClass::detect(IPHONE, 1024.0);
        assert_eq!(device.body_classes(), vec!["is-mobile"]);
    }

    #[test]
    fn wide_ipad_is_mobile_and_tablet() {
        let device = DeviceClass::detect(IPAD, 1024.0);
        assert_eq!(device.body_classes(), vec!["is-mobile", "is-tablet"]);
    }

    #[test]
    fn narrow_ipad_is_not_tablet() {
        let device = DeviceClass::detect(IPAD, 768.0);
        assert!(device.mobile);
        assert!(!device.tablet);
    }

    #[test]
    fn desktop_browser() {
        assert_eq!(DeviceClass::detect(DESKTOP, 1920.0).body_classes(), vec!["is-desktop"]);
    }

    #[test]
    fn match_is_case_insensitive() {
        assert!(DeviceClass::detect("some ANDROID build", 400.0).mobile);
    }

    #[test]
    fn patterns_are_compiled_once_and_shared() {
        let first: *const Regex = Lazy::force(&MOBILE_UA);
        let second: *const Regex = &*MOBILE_UA;
        assert!(std::ptr::eq(first, second));
        assert!(TABLET_UA.is_match(IPAD));
        assert!(!TABLET_UA.is_match(IPHONE));
    }
}
