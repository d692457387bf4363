//! `web-sys` implementations of the seams defined in `webcraft_shared`.

use wasm_bindgen::JsValue;
use web_sys::{window, Document, Element, ScrollBehavior, ScrollIntoViewOptions, Storage};
use webcraft_shared::{RootClassList, SectionId, SectionScroller, StorageError, ThemeStorage, ThemeStore};

pub type BrowserThemeStore = ThemeStore<LocalThemeStorage, DocumentRoot>;

pub fn theme_store() -> BrowserThemeStore {
    ThemeStore::new(LocalThemeStorage, DocumentRoot)
}

pub fn document() -> Option<Document> {
    window()?.document()
}

fn js_reason(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

pub struct LocalThemeStorage;

impl LocalThemeStorage {
    fn storage() -> Result<Storage, StorageError> {
        window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl ThemeStorage for LocalThemeStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?.get_item(key).map_err(|err| StorageError::Read {
            key: key.to_string(),
            reason: js_reason(&err),
        })
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?.set_item(key, value).map_err(|err| StorageError::Write {
            key: key.to_string(),
            reason: js_reason(&err),
        })
    }
}

pub struct DocumentRoot;

impl DocumentRoot {
    fn element() -> Option<Element> {
        document()?.document_element()
    }
}

impl RootClassList for DocumentRoot {
    fn add_class(&self, class: &str) {
        if let Some(root) = Self::element() {
            if let Err(err) = root.class_list().add_1(class) {
                log::warn!("could not add `{}` to the document root: {}", class, js_reason(&err));
            }
        }
    }

    fn remove_class(&self, class: &str) {
        if let Some(root) = Self::element() {
            if let Err(err) = root.class_list().remove_1(class) {
                log::warn!("could not remove `{}` from the document root: {}", class, js_reason(&err));
            }
        }
    }
}

pub struct DomSectionScroller;

impl SectionScroller for DomSectionScroller {
    fn scroll_into_view(&self, section: SectionId) -> bool {
        let Some(element) = document().and_then(|d| d.get_element_by_id(section.as_str())) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}
