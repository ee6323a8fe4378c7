use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose while running locally with trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Name of the object installed on `window` for other scripts on the page.
pub const GLOBAL_NAMESPACE: &str = "ROADSAFE";

/// Viewports wider than this are "desktop" for the mobile menu.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

pub const HEADER_SOLID_AFTER_PX: f64 = 100.0;
pub const HEADER_HIDE_AFTER_PX: f64 = 200.0;
pub const HEADER_SELECTOR: &str = ".header";

pub const COUNTER_TICK_MS: u32 = 40;
pub const COUNTER_STEPS: f64 = 50.0;
pub const COUNTER_THRESHOLD: f64 = 0.5;

pub const REVEAL_SELECTOR: &str =
    ".service-card, .feature-item, .stat-item, .contact-item, .hero-content, .hero-image";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";

pub const SUBMIT_DELAY_MS: u32 = 2_000;
pub const SUCCESS_BANNER_MS: u32 = 5_000;

pub const TOAST_SLIDE_IN_MS: u32 = 100;
pub const TOAST_LIFETIME_MS: u32 = 5_000;
pub const TOAST_REMOVE_MS: u32 = 300;

pub const RESIZE_DEBOUNCE_MS: u32 = 250;
pub const PRELOADER_FADE_MS: u32 = 300;
