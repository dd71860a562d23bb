//! Edit Menu Use Case
//!
//! Holds one establishment's menu and persists it after every successful
//! edit. Edits run on a copy, so a failed edit or a failed save leaves the
//! held menu as it was.

use std::collections::BTreeSet;
use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::application::ports::{MenuStore, StoreError};
use crate::domain::menu::{ComboModel, MenuDocument, MenuError};
use crate::domain::shared::{Money, Percent};

/// Errors from a menu edit.
#[derive(Debug, Error)]
pub enum EditError {
    /// The edit was rejected.
    #[error(transparent)]
    Menu(#[from] MenuError),

    /// The edited menu could not be saved.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Use case for editing an establishment's menu.
pub struct MenuEditorUseCase<S>
where
    S: MenuStore,
{
    store: Arc<S>,
    establishment: String,
    menu: MenuDocument,
}

impl<S> MenuEditorUseCase<S>
where
    S: MenuStore,
{
    /// Load the establishment's menu for editing.
    ///
    /// # Errors
    ///
    /// Returns error if the store cannot load the menu.
    pub fn open(store: Arc<S>, establishment: &str) -> Result<Self, StoreError> {
        let menu = store.load(establishment)?;
        Ok(Self {
            store,
            establishment: establishment.trim().to_string(),
            menu,
        })
    }

    /// Menu as last saved.
    #[must_use]
    pub const fn menu(&self) -> &MenuDocument {
        &self.menu
    }

    /// Establishment being edited.
    #[must_use]
    pub fn establishment(&self) -> &str {
        &self.establishment
    }

    /// Run an edit, save the result and keep it.
    ///
    /// # Errors
    ///
    /// Returns the edit's error, or the store's if saving fails.
    pub fn apply<T>(
        &mut self,
        action: &str,
        edit: impl FnOnce(&mut MenuDocument) -> Result<T, MenuError>,
    ) -> Result<T, EditError> {
        let mut draft = self.menu.clone();
        let output = edit(&mut draft)?;
        self.store.save(&self.establishment, &draft)?;
        self.menu = draft;
        info!(establishment = %self.establishment, action, "Menu saved");
        Ok(output)
    }

    /// Add a flat section.
    ///
    /// # Errors
    ///
    /// See [`MenuDocument::add_section`].
    pub fn add_section(&mut self, name: &str) -> Result<String, EditError> {
        self.apply("add_section", |menu| menu.add_section(name))
    }

    /// Remove a section.
    ///
    /// # Errors
    ///
    /// See [`MenuDocument::remove_section`].
    pub fn remove_section(&mut self, name: &str) -> Result<(), EditError> {
        self.apply("remove_section", |menu| menu.remove_section(name))
    }

    /// Add a sub-section.
    ///
    /// # Errors
    ///
    /// See [`MenuDocument::add_subsection`].
    pub fn add_subsection(&mut self, section: &str, name: &str) -> Result<String, EditError> {
        self.apply("add_subsection", |menu| menu.add_subsection(section, name))
    }

    /// Remove a sub-section.
    ///
    /// # Errors
    ///
    /// See [`MenuDocument::remove_subsection`].
    pub fn remove_subsection(&mut self, section: &str, name: &str) -> Result<(), EditError> {
        self.apply("remove_subsection", |menu| {
            menu.remove_subsection(section, name)
        })
    }

    /// Add an item.
    ///
    /// # Errors
    ///
    /// See [`MenuDocument::add_item`].
    pub fn add_item(
        &mut self,
        section: &str,
        subsection: Option<&str>,
        name: &str,
    ) -> Result<String, EditError> {
        self.apply("add_item", |menu| menu.add_item(section, subsection, name))
    }

    /// Remove an item.
    ///
    /// # Errors
    ///
    /// See [`MenuDocument::remove_item`].
    pub fn remove_item(
        &mut self,
        section: &str,
        subsection: Option<&str>,
        name: &str,
    ) -> Result<(), EditError> {
        self.apply("remove_item", |menu| {
            menu.remove_item(section, subsection, name)
        })
    }

    /// Set an item limit; 0 removes it.
    ///
    /// # Errors
    ///
    /// See [`MenuDocument::set_item_limit`].
    pub fn set_item_limit(&mut self, item: &str, limit: u32) -> Result<(), EditError> {
        self.apply("set_item_limit", |menu| menu.set_item_limit(item, limit))
    }

    /// Set a price.
    ///
    /// # Errors
    ///
    /// See [`MenuDocument::set_price`].
    pub fn set_price(&mut self, name: &str, price: Money) -> Result<(), EditError> {
        self.apply("set_price", |menu| menu.set_price(name, price))
    }

    /// Set a category default price.
    ///
    /// # Errors
    ///
    /// See [`MenuDocument::set_category_default`].
    pub fn set_category_default(&mut self, category: &str, price: Money) -> Result<(), EditError> {
        self.apply("set_category_default", |menu| {
            menu.set_category_default(category, price)
        })
    }

    /// Clear a price.
    ///
    /// # Errors
    ///
    /// See [`MenuDocument::clear_price`].
    pub fn clear_price(&mut self, name: &str) -> Result<(), EditError> {
        self.apply("clear_price", |menu| menu.clear_price(name))
    }

    /// Add a combo.
    ///
    /// # Errors
    ///
    /// See [`MenuDocument::add_combo`].
    pub fn add_combo(
        &mut self,
        name: &str,
        price: Money,
        mix_and_match: bool,
    ) -> Result<String, EditError> {
        self.apply("add_combo", |menu| menu.add_combo(name, price, mix_and_match))
    }

    /// Replace a combo's price and model.
    ///
    /// # Errors
    ///
    /// See [`MenuDocument::update_combo`].
    pub fn update_combo(
        &mut self,
        name: &str,
        price: Money,
        model: ComboModel,
    ) -> Result<(), EditError> {
        self.apply("update_combo", |menu| menu.update_combo(name, price, model))
    }

    /// Remove a combo.
    ///
    /// # Errors
    ///
    /// See [`MenuDocument::remove_combo`].
    pub fn remove_combo(&mut self, name: &str) -> Result<(), EditError> {
        self.apply("remove_combo", |menu| menu.remove_combo(name))
    }

    /// Add a discount.
    ///
    /// # Errors
    ///
    /// See [`MenuDocument::add_discount`].
    pub fn add_discount(&mut self, name: &str, percent: Percent) -> Result<String, EditError> {
        self.apply("add_discount", |menu| menu.add_discount(name, percent))
    }

    /// Rename and reconfigure a discount.
    ///
    /// # Errors
    ///
    /// See [`MenuDocument::update_discount`].
    pub fn update_discount(
        &mut self,
        name: &str,
        new_name: &str,
        percent: Percent,
        bypass: &BTreeSet<String>,
    ) -> Result<String, EditError> {
        self.apply("update_discount", |menu| {
            menu.update_discount(name, new_name, percent, bypass)
        })
    }

    /// Remove a discount.
    ///
    /// # Errors
    ///
    /// See [`MenuDocument::remove_discount`].
    pub fn remove_discount(&mut self, name: &str) -> Result<(), EditError> {
        self.apply("remove_discount", |menu| menu.remove_discount(name))
    }

    /// Attach a menu image.
    ///
    /// # Errors
    ///
    /// See [`MenuDocument::set_menu_image`].
    pub fn set_menu_image(&mut self, path: &str) -> Result<(), EditError> {
        self.apply("set_menu_image", |menu| menu.set_menu_image(path))
    }

    /// Detach the menu image.
    ///
    /// # Errors
    ///
    /// Returns error if saving fails.
    pub fn clear_menu_image(&mut self) -> Result<(), EditError> {
        self.apply("clear_menu_image", |menu| {
            menu.clear_menu_image();
            Ok(())
        })
    }
}
