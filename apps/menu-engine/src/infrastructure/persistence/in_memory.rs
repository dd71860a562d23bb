//! In-memory menu store for testing.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use crate::application::ports::{MenuStore, StoreError, validate_establishment_name};
use crate::domain::menu::MenuDocument;
use crate::infrastructure::persistence::record::MenuRecord;

/// In-memory implementation of `MenuStore`.
///
/// Menus are held as [`MenuRecord`]s so they go through the same conversion
/// as the file store. Suitable for testing and development.
#[derive(Debug)]
pub struct InMemoryMenuStore {
    menus: RwLock<BTreeMap<String, MenuRecord>>,
    create_missing: bool,
}

impl Default for InMemoryMenuStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryMenuStore {
    /// Create an empty store that creates missing menus on load.
    #[must_use]
    pub fn new() -> Self {
        Self {
            menus: RwLock::new(BTreeMap::new()),
            create_missing: true,
        }
    }

    /// Create an empty store that reports missing menus as `NotFound`.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            create_missing: false,
            ..Self::new()
        }
    }

    /// Number of stored menus.
    #[must_use]
    pub fn len(&self) -> usize {
        self.menus
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stored record for an establishment.
    #[must_use]
    pub fn record(&self, establishment: &str) -> Option<MenuRecord> {
        self.menus
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(establishment.trim())
            .cloned()
    }
}

impl MenuStore for InMemoryMenuStore {
    fn load(&self, establishment: &str) -> Result<MenuDocument, StoreError> {
        let name = validate_establishment_name(establishment)?;
        let stored = self
            .menus
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned();
        match stored {
            Some(record) => Ok(MenuDocument::try_from(record)?),
            None if self.create_missing => {
                let menu = MenuDocument::starter();
                self.save(name, &menu)?;
                Ok(menu)
            }
            None => Err(StoreError::NotFound {
                establishment: name.to_string(),
            }),
        }
    }

    fn save(&self, establishment: &str, menu: &MenuDocument) -> Result<(), StoreError> {
        let name = validate_establishment_name(establishment)?;
        let mut menus = self.menus.write().unwrap_or_else(PoisonError::into_inner);
        menus.insert(name.to_string(), MenuRecord::from(menu));
        drop(menus);
        Ok(())
    }

    fn list(&self) -> Result<Vec<String>, StoreError> {
        let menus = self.menus.read().unwrap_or_else(PoisonError::into_inner);
        Ok(menus.keys().cloned().collect())
    }

    fn delete(&self, establishment: &str) -> Result<(), StoreError> {
        let name = validate_establishment_name(establishment)?;
        let mut menus = self.menus.write().unwrap_or_else(PoisonError::into_inner);
        let removed = menus.remove(name);
        drop(menus);
        removed.map(|_| ()).ok_or_else(|| StoreError::NotFound {
            establishment: name.to_string(),
        })
    }

    fn exists(&self, establishment: &str) -> Result<bool, StoreError> {
        let name = validate_establishment_name(establishment)?;
        let menus = self.menus.read().unwrap_or_else(PoisonError::into_inner);
        Ok(menus.contains_key(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::Money;

    #[test]
    fn load_creates_and_stores_starter_menu() {
        let store = InMemoryMenuStore::new();
        assert!(store.is_empty());

        let menu = store.load("Cafe").unwrap();

        assert_eq!(menu, MenuDocument::starter());
        assert!(store.exists("Cafe").unwrap());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn strict_store_reports_missing_menu() {
        let store = InMemoryMenuStore::strict();
        assert!(matches!(
            store.load("Cafe"),
            Err(StoreError::NotFound { .. })
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn save_then_load_returns_same_menu() {
        let store = InMemoryMenuStore::new();
        let mut menu = MenuDocument::starter();
        menu.add_item("food", None, "Burger").unwrap();
        menu.set_price("Burger", Money::from_cents(850)).unwrap();

        store.save("Cafe", &menu).unwrap();

        assert_eq!(store.load("Cafe").unwrap(), menu);
        assert!(store.record("Cafe").unwrap().prices.entries.contains_key("Burger"));
    }

    #[test]
    fn list_is_sorted_and_delete_removes() {
        let store = InMemoryMenuStore::new();
        store.load("Zed's").unwrap();
        store.load("Alpha").unwrap();
        assert_eq!(store.list().unwrap(), vec!["Alpha", "Zed's"]);

        store.delete("Alpha").unwrap();
        assert_eq!(store.list().unwrap(), vec!["Zed's"]);
        assert!(matches!(
            store.delete("Alpha"),
            Err(StoreError::NotFound { .. })
        ));
    }

    #[test]
    fn invalid_names_are_rejected() {
        let store = InMemoryMenuStore::new();
        assert!(matches!(
            store.load("../etc"),
            Err(StoreError::InvalidName { .. })
        ));
        assert!(store.is_empty());
    }
}
