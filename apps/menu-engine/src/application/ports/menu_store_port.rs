//! Menu Store Port (Driven Port)
//!
//! Loads and saves one menu document per establishment. Saves are full
//! overwrites; there is no patching and no versioning.

use thiserror::Error;

use crate::domain::menu::{MenuDocument, MenuError};

/// Errors from a menu store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored document is not valid JSON or has the wrong shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Stored document parsed but holds invalid values.
    #[error("Malformed menu: {0}")]
    Malformed(#[from] MenuError),

    /// No menu stored for the establishment.
    #[error("Establishment not found: {establishment}")]
    NotFound {
        /// Establishment name.
        establishment: String,
    },

    /// Establishment name cannot be used as a store key.
    #[error("Invalid establishment name '{name}': {reason}")]
    InvalidName {
        /// Rejected name.
        name: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// Port for menu persistence.
pub trait MenuStore: Send + Sync {
    /// Load an establishment's menu.
    ///
    /// Stores configured to create missing menus persist and return
    /// [`MenuDocument::starter`] for an unknown establishment.
    ///
    /// # Errors
    ///
    /// Returns error if the name is invalid, the menu is missing (and not
    /// created), or the stored document cannot be read.
    fn load(&self, establishment: &str) -> Result<MenuDocument, StoreError>;

    /// Save a menu, replacing whatever was stored.
    ///
    /// # Errors
    ///
    /// Returns error if the name is invalid or the write fails.
    fn save(&self, establishment: &str, menu: &MenuDocument) -> Result<(), StoreError>;

    /// Names of every stored establishment, sorted.
    ///
    /// # Errors
    ///
    /// Returns error if the store cannot be listed.
    fn list(&self) -> Result<Vec<String>, StoreError>;

    /// Delete an establishment's menu.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for unknown establishments.
    fn delete(&self, establishment: &str) -> Result<(), StoreError>;

    /// Returns true if a menu is stored for the establishment.
    ///
    /// # Errors
    ///
    /// Returns error if the name is invalid or the store cannot be checked.
    fn exists(&self, establishment: &str) -> Result<bool, StoreError>;
}

/// Check an establishment name before it is used as a store key.
///
/// Returns the trimmed name.
///
/// # Errors
///
/// Empty names and names containing path separators or `..` are rejected.
pub fn validate_establishment_name(name: &str) -> Result<&str, StoreError> {
    let trimmed = name.trim();
    let reason = if trimmed.is_empty() {
        Some("name is empty")
    } else if trimmed.contains(['/', '\\']) {
        Some("name contains a path separator")
    } else if trimmed.contains("..") {
        Some("name contains '..'")
    } else {
        None
    };
    match reason {
        Some(reason) => Err(StoreError::InvalidName {
            name: name.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(trimmed),
    }
}
