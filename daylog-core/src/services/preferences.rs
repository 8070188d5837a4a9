//! Preferences service - language and theme
//!
//! Both values are stored as bare strings (`en`, `dark`), not JSON.

use std::str::FromStr;
use std::sync::Arc;

use crate::domain::result::Result;
use crate::domain::{Language, Theme};
use crate::ports::Store;

const LANGUAGE_KEY: &str = "language";
const THEME_KEY: &str = "theme";

pub struct PreferencesService {
    store: Arc<dyn Store>,
}

impl PreferencesService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Read a preference, falling back to the default for missing or unknown values
    fn read<T: FromStr + Default>(&self, key: &str) -> Result<T> {
        let value = self
            .store
            .get(key)?
            .and_then(|raw| raw.trim().trim_matches('"').parse().ok())
            .unwrap_or_default();
        Ok(value)
    }

    pub fn language(&self) -> Result<Language> {
        self.read(LANGUAGE_KEY)
    }

    pub fn set_language(&self, language: Language) -> Result<()> {
        self.store.set(LANGUAGE_KEY, language.as_str())
    }

    pub fn theme(&self) -> Result<Theme> {
        self.read(THEME_KEY)
    }

    pub fn set_theme(&self, theme: Theme) -> Result<()> {
        self.store.set(THEME_KEY, theme.as_str())
    }

    /// Flip between light and dark, returning the new theme
    pub fn toggle_theme(&self) -> Result<Theme> {
        let next = self.theme()?.toggled();
        self.set_theme(next)?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryStore;

    #[test]
    fn test_defaults() {
        let prefs = PreferencesService::new(Arc::new(MemoryStore::new()));
        assert_eq!(prefs.language().unwrap(), Language::En);
        assert_eq!(prefs.theme().unwrap(), Theme::Light);
    }

    #[test]
    fn test_values_stored_bare() {
        let store = Arc::new(MemoryStore::new());
        let prefs = PreferencesService::new(store.clone());

        prefs.set_language(Language::Ru).unwrap();
        assert_eq!(store.get("language").unwrap(), Some("ru".to_string()));
        assert_eq!(prefs.language().unwrap(), Language::Ru);
    }

    #[test]
    fn test_quoted_and_unknown_values() {
        let store = Arc::new(MemoryStore::with_values([
            ("language", "\"ru\""),
            ("theme", "sepia"),
        ]));
        let prefs = PreferencesService::new(store);

        assert_eq!(prefs.language().unwrap(), Language::Ru);
        assert_eq!(prefs.theme().unwrap(), Theme::Light);
    }

    #[test]
    fn test_toggle_theme() {
        let prefs = PreferencesService::new(Arc::new(MemoryStore::new()));
        assert_eq!(prefs.toggle_theme().unwrap(), Theme::Dark);
        assert_eq!(prefs.theme().unwrap(), Theme::Dark);
        assert_eq!(prefs.toggle_theme().unwrap(), Theme::Light);
    }
}
