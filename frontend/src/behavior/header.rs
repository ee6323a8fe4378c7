use crate::config::{HEADER_HIDE_AFTER_PX, HEADER_SOLID_AFTER_PX};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeaderStyle {
    pub solid: bool,
    pub hidden: bool,
}

impl HeaderStyle {
    pub fn css(self) -> String {
        let (background, shadow) = if self.solid {
            ("rgba(255, 255, 255, 0.98)", "0 2px 20px rgba(0, 0, 0, 0.1)")
        } else {
            ("rgba(255, 255, 255, 0.95)", "none")
        };
        let transform = if self.hidden { "translateY(-100%)" } else { "translateY(0)" };
        format!(
            "background-color: {}; box-shadow: {}; transform: {};",
            background, shadow, transform
        )
    }
}

/// Remembers the previous scroll offset so the header can tell which way the page moves.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeaderScroll {
    last_scroll_top: f64,
}

impl HeaderScroll {
    pub fn update(&mut self, scroll_top: f64) -> HeaderStyle {
        let style = HeaderStyle {
            solid: scroll_top > HEADER_SOLID_AFTER_PX,
            hidden: scroll_top > self.last_scroll_top && scroll_top > HEADER_HIDE_AFTER_PX,
        };
        self.last_scroll_top = scroll_top;
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_turns_solid_past_threshold() {
        let mut tracker = HeaderScroll::default();
        assert!(!tracker.update(100.0).solid);
        assert!(tracker.update(101.0).solid);
        assert!(!tracker.update(20.0).solid);
    }

    #[test]
    fn header_hides_only_when_scrolling_down_far_enough() {
        let mut tracker = HeaderScroll::default();
        // downward but still near the top
        assert!(!tracker.update(150.0).hidden);
        assert!(tracker.update(250.0).hidden);
        // same position is not "down"
        assert!(!tracker.update(250.0).hidden);
        assert!(tracker.update(400.0).hidden);
        // any upward move shows it again
        assert!(!tracker.update(399.0).hidden);
    }

    #[test]
    fn css_reflects_both_flags() {
        let css = HeaderStyle { solid: true, hidden: true }.css();
        assert!(css.contains("0.98"));
        assert!(css.contains("translateY(-100%)"));

        let css = HeaderStyle::default().css();
        assert!(css.contains("0.95"));
        assert!(css.contains("box-shadow: none"));
        assert!(css.contains("translateY(0)"));
    }
}
