use std::borrow::Cow;

use crate::behavior::navigation::MenuAction;

/// Element id an in-page link points at. `"#"` alone points nowhere.
pub fn fragment_id(href: &str) -> Option<Cow<'_, str>> {
    let raw = href.strip_prefix('#')?;
    if raw.is_empty() {
        return None;
    }
    match urlencoding::decode(raw) {
        Ok(id) => Some(id),
        Err(_) => Some(Cow::Borrowed(raw)),
    }
}

/// Scroll offset that puts the target's top just under the fixed header.
pub fn scroll_target(offset_top: f64, header_height: f64) -> f64 {
    offset_top - header_height
}

/// Scroll position for a link whose target sits at `target_offset_top`.
/// `None` when no element carries the id, and the viewport stays where it is.
pub fn plan_scroll(target_offset_top: Option<f64>, header_height: f64) -> Option<f64> {
    target_offset_top.map(|top| scroll_target(top, header_height))
}

/// The mobile menu closes only after the page actually moved.
pub fn menu_after_scroll(planned: Option<f64>) -> Option<MenuAction> {
    planned.map(|_| MenuAction::Close)
}

/// Staggered entrance for the n-th service card.
pub fn stagger_delay(index: usize) -> String {
    format!("animation-delay: {}ms;", index * 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_is_extracted_and_decoded() {
        assert_eq!(fragment_id("#contact").as_deref(), Some("contact"));
        assert_eq!(fragment_id("#caf%C3%A9").as_deref(), Some("café"));
    }

    #[test]
    fn bare_hash_and_external_links_have_no_target() {
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id("/pricing#plans"), None);
        assert_eq!(fragment_id(""), None);
    }

    #[test]
    fn target_sits_below_header() {
        assert_eq!(scroll_target(1200.0, 80.0), 1120.0);
        assert_eq!(scroll_target(40.0, 80.0), -40.0);
    }

    #[test]
    fn missing_target_leaves_viewport_and_menu_alone() {
        let planned = plan_scroll(None, 80.0);
        assert_eq!(planned, None);
        assert_eq!(menu_after_scroll(planned), None);
    }

    #[test]
    fn found_target_scrolls_then_closes_menu() {
        let planned = plan_scroll(Some(900.0), 72.0);
        assert_eq!(planned, Some(828.0));
        assert_eq!(menu_after_scroll(planned), Some(MenuAction::Close));
    }

    #[test]
    fn cards_are_staggered_by_a_tenth_of_a_second() {
        assert_eq!(stagger_delay(0), "animation-delay: 0ms;");
        assert_eq!(stagger_delay(3), "animation-delay: 300ms;");
    }
}
