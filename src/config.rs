//! Bridge client configuration.
//!
//! Loaded from TOML. Every field has a default, so an empty file is valid:
//!
//! ```toml
//! base_url = "https://files.example.com/"
//! download_files_by_ajax = true
//! download_dir = "/tmp/downloads"
//!
//! [endpoints]
//! list_url = "bridges/php/handler.php"
//!
//! [http]
//! timeout_secs = 30
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{BridgeError, Result};

const DEFAULT_HANDLER: &str = "bridges/php/handler.php";

/// Top-level configuration for a [`crate::FileManager`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Base URL that relative endpoints are resolved against.
    pub base_url: String,
    pub endpoints: Endpoints,
    /// Fetch downloads through the transport instead of handing the URL to the host.
    pub download_files_by_ajax: bool,
    /// Directory the default host saves downloads into.
    pub download_dir: PathBuf,
    pub http: HttpConfig,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/".to_string(),
            endpoints: Endpoints::default(),
            download_files_by_ajax: true,
            download_dir: PathBuf::from("."),
            http: HttpConfig::default(),
        }
    }
}

/// Per-operation endpoint URLs. Relative values are resolved against `base_url`.
///
/// `move` shares `rename_url` with `rename`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub list_url: String,
    pub upload_url: String,
    pub rename_url: String,
    pub copy_url: String,
    pub remove_url: String,
    pub edit_url: String,
    pub get_content_url: String,
    pub create_folder_url: String,
    pub download_file_url: String,
    pub compress_url: String,
    pub extract_url: String,
    pub permissions_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        let handler = DEFAULT_HANDLER.to_string();
        Self {
            list_url: handler.clone(),
            upload_url: handler.clone(),
            rename_url: handler.clone(),
            copy_url: handler.clone(),
            remove_url: handler.clone(),
            edit_url: handler.clone(),
            get_content_url: handler.clone(),
            create_folder_url: handler.clone(),
            download_file_url: handler.clone(),
            compress_url: handler.clone(),
            extract_url: handler.clone(),
            permissions_url: handler,
        }
    }
}

impl Endpoints {
    fn fields_mut(&mut self) -> [&mut String; 12] {
        [
            &mut self.list_url,
            &mut self.upload_url,
            &mut self.rename_url,
            &mut self.copy_url,
            &mut self.remove_url,
            &mut self.edit_url,
            &mut self.get_content_url,
            &mut self.create_folder_url,
            &mut self.download_file_url,
            &mut self.compress_url,
            &mut self.extract_url,
            &mut self.permissions_url,
        ]
    }
}

/// Settings for the built-in reqwest transport.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Whole-request timeout. `None` leaves requests unbounded.
    pub timeout_secs: Option<u64>,
    /// Proxy URL (e.g., "http://proxy:8080" or "socks5://proxy:1080").
    pub proxy: Option<String>,
}

impl BridgeConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| BridgeError::Config(e.to_string()))
    }

    /// Load a config file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Return a copy of the endpoints with every URL made absolute.
    pub fn resolve_endpoints(&self) -> Result<Endpoints> {
        let base = Url::parse(&self.base_url)?;
        let mut resolved = self.endpoints.clone();
        for field in resolved.fields_mut() {
            *field = base.join(field.as_str())?.to_string();
        }
        Ok(resolved)
    }
}
