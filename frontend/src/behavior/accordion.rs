/// Expanded/collapsed state of the FAQ list. At most one entry is open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    expanded: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccordionAction {
    Activate(usize),
    CollapseAll,
}

impl Accordion {
    pub fn is_expanded(self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    pub fn apply(&mut self, action: AccordionAction) {
        match action {
            // Activating collapses the others first, then toggles this one.
            AccordionAction::Activate(index) => {
                self.expanded = if self.expanded == Some(index) { None } else { Some(index) };
            }
            AccordionAction::CollapseAll => self.expanded = None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn opening_one_closes_the_other() {
        let mut faq = Accordion::default();
        faq.apply(AccordionAction::Activate(0));
        faq.apply(AccordionAction::Activate(2));
        assert!(!faq.is_expanded(0));
        assert!(faq.is_expanded(2));
    }

    #[test]
    fn activating_open_item_collapses_it() {
        let mut faq = Accordion::default();
        faq.apply(AccordionAction::Activate(1));
        faq.apply(AccordionAction::Activate(1));
        assert_eq!(faq.expanded, None);
    }

    #[test]
    fn collapse_all_is_unconditional() {
        let mut faq = Accordion::default();
        faq.apply(AccordionAction::CollapseAll);
        assert_eq!(faq.expanded, None);
        faq.apply(AccordionAction::Activate(3));
        faq.apply(AccordionAction::CollapseAll);
        assert_eq!(faq.expanded, None);
    }

    proptest! {
        #[test]
        fn never_more_than_one_open(
            items in 1usize..12,
            clicks in prop::collection::vec(0usize..12, 0..40),
        ) {
            let mut faq = Accordion::default();
            for click in clicks {
                if click < items {
                    faq.apply(AccordionAction::Activate(click));
                } else {
                    faq.apply(AccordionAction::CollapseAll);
                }
                let open = (0..items).filter(|&i| faq.is_expanded(i)).count();
                prop_assert!(open <= 1);
            }
        }
    }
}
