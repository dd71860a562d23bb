//! Menu store configuration.

use serde::{Deserialize, Serialize};

/// Where menus are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory holding one JSON file per establishment.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// Write a starter menu when an unknown establishment is loaded.
    #[serde(default = "default_create_missing")]
    pub create_missing: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            create_missing: default_create_missing(),
        }
    }
}

fn default_data_dir() -> String {
    "data/menus".to_string()
}

const fn default_create_missing() -> bool {
    true
}
