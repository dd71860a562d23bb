//! JSON file menu store.
//!
//! One pretty-printed `<establishment>.json` per establishment under a data
//! directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, info};

use crate::application::ports::{MenuStore, StoreError, validate_establishment_name};
use crate::config::StoreConfig;
use crate::domain::menu::MenuDocument;
use crate::infrastructure::persistence::record::MenuRecord;

const EXTENSION: &str = "json";

/// File-backed implementation of `MenuStore`.
#[derive(Debug, Clone)]
pub struct JsonFileMenuStore {
    data_dir: PathBuf,
    create_missing: bool,
}

impl JsonFileMenuStore {
    /// Store rooted at `data_dir` that creates missing menus on load.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            create_missing: true,
        }
    }

    /// Store built from configuration.
    #[must_use]
    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(&config.data_dir).with_create_missing(config.create_missing)
    }

    /// Set whether `load` creates menus for unknown establishments.
    #[must_use]
    pub const fn with_create_missing(mut self, create_missing: bool) -> Self {
        self.create_missing = create_missing;
        self
    }

    /// Directory holding the menu files.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn path_for(&self, establishment: &str) -> Result<PathBuf, StoreError> {
        let name = validate_establishment_name(establishment)?;
        Ok(self.data_dir.join(format!("{name}.{EXTENSION}")))
    }

    fn write(&self, path: &Path, menu: &MenuDocument) -> Result<(), StoreError> {
        fs::create_dir_all(&self.data_dir)?;
        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        MenuRecord::from(menu).serialize(&mut serializer)?;
        fs::write(path, buf)?;
        Ok(())
    }
}

impl MenuStore for JsonFileMenuStore {
    fn load(&self, establishment: &str) -> Result<MenuDocument, StoreError> {
        let path = self.path_for(establishment)?;
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound && self.create_missing => {
                let menu = MenuDocument::starter();
                self.write(&path, &menu)?;
                info!(path = %path.display(), "Created starter menu");
                return Ok(menu);
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StoreError::NotFound {
                    establishment: establishment.trim().to_string(),
                });
            }
            Err(e) => return Err(e.into()),
        };
        let record: MenuRecord = serde_json::from_str(&contents)?;
        let menu = MenuDocument::try_from(record)?;
        debug!(path = %path.display(), "Loaded menu");
        Ok(menu)
    }

    fn save(&self, establishment: &str, menu: &MenuDocument) -> Result<(), StoreError> {
        let path = self.path_for(establishment)?;
        self.write(&path, menu)?;
        info!(path = %path.display(), "Saved menu");
        Ok(())
    }

    fn list(&self) -> Result<Vec<String>, StoreError> {
        let entries = match fs::read_dir(&self.data_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn delete(&self, establishment: &str) -> Result<(), StoreError> {
        let path = self.path_for(establishment)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                info!(path = %path.display(), "Deleted menu");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Err(StoreError::NotFound {
                establishment: establishment.trim().to_string(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    fn exists(&self, establishment: &str) -> Result<bool, StoreError> {
        Ok(self.path_for(establishment)?.is_file())
    }
}
