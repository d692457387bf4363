pub mod animation;
pub mod constants;
pub mod contact;
pub mod content;
pub mod navigation;
pub mod sections;
pub mod theme;
pub mod validation;

pub use contact::{ContactField, ContactForm, ContactFormData, ContactSubmitter, ServiceCategory, SubmitError, SubmitStatus};
pub use navigation::{scroll_to_section, MobileMenu, SectionScroller};
pub use sections::{observer_thresholds, ScrollSpy, SectionId, SectionVisibility};
pub use theme::{RootClassList, StorageError, Theme, ThemeStorage, ThemeStore};
