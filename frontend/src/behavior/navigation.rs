use crate::config::MOBILE_BREAKPOINT_PX;

/// Open/closed state of the mobile menu and its overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MenuAction {
    Toggle,
    Open,
    Close,
    Resized(f64),
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn apply(&mut self, action: MenuAction) {
        match action {
            MenuAction::Toggle => self.toggle(),
            MenuAction::Open => self.open(),
            MenuAction::Close => self.close(),
            MenuAction::Resized(width) => {
                if width > MOBILE_BREAKPOINT_PX {
                    self.close();
                }
            }
        }
    }

    /// Class list for `#mobileMenu` and `#mobileOverlay`.
    pub fn panel_class(self, base: &'static str) -> String {
        if self.open {
            format!("{} active", base)
        } else {
            base.to_string()
        }
    }

    pub fn body_overflow(self) -> &'static str {
        if self.open {
            "hidden"
        } else {
            ""
        }
    }
}

/// Inline style of hamburger bar `index`: three bars fold into an X when open.
pub fn hamburger_bar_style(index: usize, open: bool) -> &'static str {
    if !open {
        return "transform: none; opacity: 1;";
    }
    match index {
        0 => "transform: rotate(45deg) translate(6px, 6px);",
        1 => "opacity: 0;",
        2 => "transform: rotate(-45deg) translate(6px, -6px);",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn open_is_idempotent() {
        let mut once = MenuState::default();
        once.open();
        let mut twice = MenuState::default();
        twice.open();
        twice.open();
        assert_eq!(once, twice);
        assert!(twice.is_open());
    }

    #[test]
    fn toggle_flips_between_states() {
        let mut menu = MenuState::default();
        menu.apply(MenuAction::Toggle);
        assert!(menu.is_open());
        menu.apply(MenuAction::Toggle);
        assert!(!menu.is_open());
    }

    #[test]
    fn resize_at_breakpoint_keeps_menu_open() {
        let mut menu = MenuState::default();
        menu.open();
        menu.apply(MenuAction::Resized(768.0));
        assert!(menu.is_open());
    }

    #[test]
    fn open_menu_locks_body_and_marks_panels() {
        let mut menu = MenuState::default();
        assert_eq!(menu.body_overflow(), "");
        assert_eq!(menu.panel_class("mobile-menu"), "mobile-menu");
        menu.open();
        assert_eq!(menu.body_overflow(), "hidden");
        assert_eq!(menu.panel_class("mobile-overlay"), "mobile-overlay active");
    }

    #[test]
    fn hamburger_morphs_into_cross() {
        assert_eq!(hamburger_bar_style(1, true), "opacity: 0;");
        assert!(hamburger_bar_style(0, true).contains("rotate(45deg)"));
        assert!(hamburger_bar_style(2, true).contains("rotate(-45deg)"));
        for bar in 0..3 {
            assert_eq!(hamburger_bar_style(bar, false), "transform: none; opacity: 1;");
        }
    }

    fn arb_action() -> impl Strategy<Value = MenuAction> {
        prop_oneof![
            Just(MenuAction::Toggle),
            Just(MenuAction::Open),
            Just(MenuAction::Close),
            (0.0f64..2000.0).prop_map(MenuAction::Resized),
        ]
    }

    proptest! {
        #[test]
        fn wide_resize_always_closes(
            history in prop::collection::vec(arb_action(), 0..20),
            width in 768.5f64..4000.0,
        ) {
            let mut menu = MenuState::default();
            for action in history {
                menu.apply(action);
            }
            menu.apply(MenuAction::Resized(width));
            prop_assert!(!menu.is_open());
        }
    }
}
