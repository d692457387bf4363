use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::THEME_STORAGE_KEY;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme `{0}`")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("failed to read `{key}`: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
}

/// Key/value persistence for the theme preference. The browser implementation
/// wraps `window.localStorage`.
pub trait ThemeStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// The class list of the document root element.
pub trait RootClassList {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
}

/// Owns the only write path for the theme: every change goes through [`ThemeStore::set`],
/// which persists the value and leaves exactly one theme class on the root.
pub struct ThemeStore<S, R> {
    storage: S,
    root: R,
}

impl<S: ThemeStorage, R: RootClassList> ThemeStore<S, R> {
    pub fn new(storage: S, root: R) -> Self {
        Self { storage, root }
    }

    /// Reads the stored preference and applies it to the root. Nothing is written
    /// back, so a first visit leaves storage untouched.
    pub fn load(&self) -> Theme {
        let theme = match self.storage.read(THEME_STORAGE_KEY) {
            Ok(Some(value)) => value.parse::<Theme>().unwrap_or_else(|err: UnknownTheme| {
                log::warn!("ignoring stored theme: {}", err);
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(err) => {
                log::warn!("theme preference not readable, using default: {}", err);
                Theme::default()
            }
        };
        self.apply(theme);
        theme
    }

    pub fn set(&self, theme: Theme) -> Theme {
        if let Err(err) = self.storage.write(THEME_STORAGE_KEY, theme.as_str()) {
            log::warn!("theme preference not persisted: {}", err);
        }
        self.apply(theme);
        theme
    }

    pub fn toggle(&self, current: Theme) -> Theme {
        self.set(current.toggled())
    }

    fn apply(&self, theme: Theme) {
        for other in Theme::ALL {
            self.root.remove_class(other.as_str());
        }
        self.root.add_class(theme.as_str());
    }
}

#[cfg(test)]
pub(crate) mod fakes {
    use super::*;
    use std::cell::RefCell;
    use std::collections::{BTreeSet, HashMap};

    #[derive(Default)]
    pub struct MemoryStorage {
        pub values: RefCell<HashMap<String, String>>,
        pub broken: bool,
    }

    impl ThemeStorage for &MemoryStorage {
        fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
            if self.broken {
                return Err(StorageError::Unavailable);
            }
            Ok(self.values.borrow().get(key).cloned())
        }

        fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.broken {
                return Err(StorageError::Write {
                    key: key.to_string(),
                    reason: "quota exceeded".to_string(),
                });
            }
            self.values.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    pub struct MemoryClassList {
        pub classes: RefCell<BTreeSet<String>>,
    }

    impl MemoryClassList {
        pub fn has(&self, class: &str) -> bool {
            self.classes.borrow().contains(class)
        }
    }

    impl RootClassList for &MemoryClassList {
        fn add_class(&self, class: &str) {
            self.classes.borrow_mut().insert(class.to_string());
        }

        fn remove_class(&self, class: &str) {
            self.classes.borrow_mut().remove(class);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fakes::{MemoryClassList, MemoryStorage};
    use super::*;

    #[test]
    fn test_first_visit_defaults_to_light_without_writing() {
        let storage = MemoryStorage::default();
        let root = MemoryClassList::default();
        let store = ThemeStore::new(&storage, &root);

        assert_eq!(store.load(), Theme::Light);
        assert!(root.has("light"));
        assert!(!root.has("dark"));
        assert!(storage.values.borrow().get(THEME_STORAGE_KEY).is_none());
    }

    #[test]
    fn test_toggle_to_dark_persists_and_swaps_class() {
        let storage = MemoryStorage::default();
        let root = MemoryClassList::default();
        let store = ThemeStore::new(&storage, &root);

        let current = store.load();
        let next = store.toggle(current);

        assert_eq!(next, Theme::Dark);
        assert_eq!(storage.values.borrow().get(THEME_STORAGE_KEY).map(String::as_str), Some("dark"));
        assert!(root.has("dark"));
        assert!(!root.has("light"));
    }

    #[test]
    fn test_double_toggle_restores_original() {
        let storage = MemoryStorage::default();
        storage.values.borrow_mut().insert(THEME_STORAGE_KEY.to_string(), "dark".to_string());
        let root = MemoryClassList::default();
        let store = ThemeStore::new(&storage, &root);

        let original = store.load();
        let back = store.toggle(store.toggle(original));

        assert_eq!(back, original);
        assert!(root.has("dark"));
        assert_eq!(root.classes.borrow().len(), 1);
    }

    #[test]
    fn test_stored_garbage_falls_back_to_light() {
        let storage = MemoryStorage::default();
        storage.values.borrow_mut().insert(THEME_STORAGE_KEY.to_string(), "sepia".to_string());
        let root = MemoryClassList::default();

        assert_eq!(ThemeStore::new(&storage, &root).load(), Theme::Light);
    }

    #[test]
    fn test_broken_storage_keeps_in_memory_value() {
        let storage = MemoryStorage { broken: true, ..Default::default() };
        let root = MemoryClassList::default();
        let store = ThemeStore::new(&storage, &root);

        assert_eq!(store.load(), Theme::Light);
        assert_eq!(store.set(Theme::Dark), Theme::Dark);
        assert!(root.has("dark"));
        assert!(!root.has("light"));
    }

    #[test]
    fn test_parse_round_trip() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert!("Dark".parse::<Theme>().is_err());
    }
}
