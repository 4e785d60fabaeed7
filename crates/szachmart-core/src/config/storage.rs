//! Local storage configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Settings for durable client-side state.
///
/// The data directory holds the single token slot and the cart file, so a
/// browsing session survives across CLI invocations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory for the token slot and cart file.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl StorageConfig {
    /// Path of the access token slot.
    pub fn token_path(&self) -> PathBuf {
        self.data_dir.join("token")
    }

    /// Path of the persisted cart file.
    pub fn cart_path(&self) -> PathBuf {
        self.data_dir.join("cart.json")
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".szachmart")
}
