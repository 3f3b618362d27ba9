//! Theme store.
//!
//! One global, persisted value applied document-wide. The persisted string is
//! untrusted: a corrupt value fails closed to the default theme with a
//! warning, while `set` only accepts the closed [`Theme`] enum, so an invalid
//! theme can never be applied or persisted.

use driftline_core::Theme;

use crate::storage::{Storage, keys};

/// Holds the currently applied theme and mirrors it to storage.
#[derive(Debug, Clone, Default)]
pub struct ThemeStore {
    current: Theme,
}

impl ThemeStore {
    /// Load the persisted theme, failing closed to the default.
    #[must_use]
    pub fn load(storage: &dyn Storage) -> Self {
        let Some(raw) = storage.get(keys::THEME) else {
            return Self::default();
        };

        match raw.parse::<Theme>() {
            Ok(current) => Self { current },
            Err(e) => {
                tracing::warn!(error = %e, "persisted theme is invalid, using default");
                Self::default()
            }
        }
    }

    /// The currently applied theme.
    #[must_use]
    pub const fn current(&self) -> Theme {
        self.current
    }

    /// Apply and persist a theme.
    pub fn set(&mut self, theme: Theme, storage: &mut dyn Storage) {
        self.current = theme;
        storage.set(keys::THEME, theme.as_str());
    }

    /// Flip between light and dark, returning the newly applied theme.
    pub fn toggle(&mut self, storage: &mut dyn Storage) -> Theme {
        self.set(self.current.flipped(), storage);
        self.current
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::storage::MemoryStorage;

    use super::*;

    #[test]
    fn test_default_is_light() {
        let storage = MemoryStorage::new();
        assert_eq!(ThemeStore::load(&storage).current(), Theme::Light);
    }

    #[test]
    fn test_toggle_twice_restores_original() {
        let mut storage = MemoryStorage::new();
        let mut store = ThemeStore::load(&storage);
        let original = store.current();

        store.toggle(&mut storage);
        assert_ne!(store.current(), original);
        store.toggle(&mut storage);
        assert_eq!(store.current(), original);
    }

    #[test]
    fn test_persisted_value_matches_applied_value() {
        let mut storage = MemoryStorage::new();
        let mut store = ThemeStore::load(&storage);

        store.set(Theme::Dark, &mut storage);
        assert_eq!(storage.get(keys::THEME).unwrap(), "dark");

        store.toggle(&mut storage);
        assert_eq!(storage.get(keys::THEME).unwrap(), store.current().as_str());
    }

    #[test]
    fn test_load_persisted_dark() {
        let storage = MemoryStorage::seeded([(keys::THEME, "dark")]);
        assert_eq!(ThemeStore::load(&storage).current(), Theme::Dark);
    }

    #[test]
    fn test_corrupt_value_fails_closed() {
        let storage = MemoryStorage::seeded([(keys::THEME, "hotdog-stand")]);
        assert_eq!(ThemeStore::load(&storage).current(), Theme::Light);
    }
}
