use crate::sections::SectionId;

/// Brings a section into view. Returns `false` when the section is not mounted.
pub trait SectionScroller {
    fn scroll_into_view(&self, section: SectionId) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed(self) -> Self {
        Self { open: false }
    }

    /// A pointer-down anywhere outside the header closes the menu.
    pub fn after_pointer_down(self, inside_header: bool) -> Self {
        if inside_header {
            self
        } else {
            self.closed()
        }
    }
}

/// Closes the menu whatever the viewport width, then scrolls if the target exists.
pub fn scroll_to_section<S>(scroller: &S, menu: MobileMenu, section: SectionId) -> MobileMenu
where
    S: SectionScroller + ?Sized,
{
    if !scroller.scroll_into_view(section) {
        log::debug!("section `{}` is not mounted, nothing to scroll", section);
    }
    menu.closed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::NAV_ITEMS;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingScroller {
        mounted: Vec<SectionId>,
        scrolled: RefCell<Vec<SectionId>>,
    }

    impl SectionScroller for RecordingScroller {
        fn scroll_into_view(&self, section: SectionId) -> bool {
            if self.mounted.contains(&section) {
                self.scrolled.borrow_mut().push(section);
                true
            } else {
                false
            }
        }
    }

    #[test]
    fn test_every_nav_item_closes_menu() {
        let scroller = RecordingScroller {
            mounted: SectionId::ALL.to_vec(),
            ..Default::default()
        };
        for item in NAV_ITEMS {
            for menu in [MobileMenu::default(), MobileMenu::default().toggled()] {
                let menu = scroll_to_section(&scroller, menu, item.id);
                assert!(!menu.is_open());
            }
        }
        assert_eq!(scroller.scrolled.borrow().len(), NAV_ITEMS.len() * 2);
    }

    #[test]
    fn test_unmounted_section_is_a_no_op() {
        let scroller = RecordingScroller::default();
        let menu = scroll_to_section(&scroller, MobileMenu::default().toggled(), SectionId::Contact);
        assert!(!menu.is_open());
        assert!(scroller.scrolled.borrow().is_empty());
    }

    #[test]
    fn test_outside_pointer_down_closes_open_menu() {
        let open = MobileMenu::default().toggled();
        assert!(open.after_pointer_down(true).is_open());
        assert!(!open.after_pointer_down(false).is_open());
    }

    #[test]
    fn test_toggle_flips_state() {
        let menu = MobileMenu::default();
        assert!(menu.toggled().is_open());
        assert!(!menu.toggled().toggled().is_open());
    }
}
