pub mod form_state;
pub mod menu;
pub mod metadata;
pub mod observer;
pub mod outside_click;
pub mod reveal;
pub mod scroll_progress;
pub mod scroll_spy;
pub mod theme;

pub use form_state::{use_contact_form, ContactFormHandle};
pub use menu::{use_mobile_menu, MenuAction, MenuState};
pub use metadata::use_document_metadata;
pub use outside_click::use_pointer_down;
pub use reveal::use_reveal;
pub use scroll_progress::use_scroll_progress;
pub use scroll_spy::use_scroll_spy;
pub use theme::{use_theme, ThemeContext, ThemeProvider};
