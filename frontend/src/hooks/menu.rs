use std::rc::Rc;

use yew::prelude::*;
use webcraft_shared::MobileMenu;

pub enum MenuAction {
    Toggle,
    PointerDown { inside_header: bool },
    /// Result of a navigation, computed outside the reducer where the scroll happens.
    Set(MobileMenu),
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MenuState(pub MobileMenu);

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            MenuAction::Toggle => self.0.toggled(),
            MenuAction::PointerDown { inside_header } => self.0.after_pointer_down(inside_header),
            MenuAction::Set(menu) => menu,
        };
        if next == self.0 {
            self
        } else {
            Rc::new(MenuState(next))
        }
    }
}

#[hook]
pub fn use_mobile_menu() -> UseReducerHandle<MenuState> {
    use_reducer_eq(MenuState::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: MenuState, action: MenuAction) -> MenuState {
        *Rc::new(state).reduce(action)
    }

    #[test]
    fn test_toggle_opens_then_closes() {
        let open = reduce(MenuState::default(), MenuAction::Toggle);
        assert!(open.0.is_open());
        assert!(!reduce(open, MenuAction::Toggle).0.is_open());
    }

    #[test]
    fn test_pointer_down_outside_header_closes() {
        let open = MenuState(MobileMenu::default().toggled());
        assert!(reduce(open, MenuAction::PointerDown { inside_header: true }).0.is_open());
        assert!(!reduce(open, MenuAction::PointerDown { inside_header: false }).0.is_open());
    }

    #[test]
    fn test_set_replaces_menu_state() {
        let open = MenuState(MobileMenu::default().toggled());
        let closed = reduce(open, MenuAction::Set(open.0.closed()));
        assert_eq!(closed, MenuState::default());
    }
}
