//! Localized failure messages.
//!
//! Each operation has a default message that is used when the transport fails
//! and the bridge reply carries no error of its own. Messages are looked up
//! through a [`Translator`] so UIs can plug in their own catalog.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{BridgeError, Result};

/// Identifier of a default failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    Listing,
    Copying,
    /// Shared by `move` and `rename`.
    Renaming,
    Deleting,
    Uploading,
    GettingContent,
    Modifying,
    Downloading,
    Compressing,
    Extracting,
    ChangingPerms,
    CreatingFolder,
}

impl MessageKey {
    pub const ALL: [MessageKey; 12] = [
        MessageKey::Listing,
        MessageKey::Copying,
        MessageKey::Renaming,
        MessageKey::Deleting,
        MessageKey::Uploading,
        MessageKey::GettingContent,
        MessageKey::Modifying,
        MessageKey::Downloading,
        MessageKey::Compressing,
        MessageKey::Extracting,
        MessageKey::ChangingPerms,
        MessageKey::CreatingFolder,
    ];

    /// Catalog identifier, e.g. `error_copying`.
    pub fn id(&self) -> &'static str {
        match self {
            MessageKey::Listing => "error_listing",
            MessageKey::Copying => "error_copying",
            MessageKey::Renaming => "error_renaming",
            MessageKey::Deleting => "error_deleting",
            MessageKey::Uploading => "error_uploading",
            MessageKey::GettingContent => "error_getting_content",
            MessageKey::Modifying => "error_modifying",
            MessageKey::Downloading => "error_downloading",
            MessageKey::Compressing => "error_compressing",
            MessageKey::Extracting => "error_extracting",
            MessageKey::ChangingPerms => "error_changing_perms",
            MessageKey::CreatingFolder => "error_creating_folder",
        }
    }

    /// Built-in English text.
    pub fn english(&self) -> &'static str {
        match self {
            MessageKey::Listing => "Unknown error listing, check the response",
            MessageKey::Copying => "An error occurred copying the files",
            MessageKey::Renaming => "An error occurred renaming the file",
            MessageKey::Deleting => "An error occurred deleting the file or folder",
            MessageKey::Uploading => "Unknown error uploading files",
            MessageKey::GettingContent => "An error occurred getting the content of the file",
            MessageKey::Modifying => "An error occurred modifying the file",
            MessageKey::Downloading => "An error occurred downloading the file",
            MessageKey::Compressing => "An error occurred compressing the file or folder",
            MessageKey::Extracting => "An error occurred extracting the file",
            MessageKey::ChangingPerms => "An error occurred changing the permissions",
            MessageKey::CreatingFolder => "An error occurred creating the folder",
        }
    }
}

/// Message lookup used for default failure messages.
pub trait Translator: Send + Sync {
    fn translate(&self, key: MessageKey) -> String;
}

/// Translator that always returns the built-in English text.
#[derive(Debug, Clone, Copy, Default)]
pub struct English;

impl Translator for English {
    fn translate(&self, key: MessageKey) -> String {
        key.english().to_string()
    }
}

/// Message catalog loaded from a flat TOML table keyed by message id.
///
/// ```toml
/// error_copying = "Impossible de copier les fichiers"
/// ```
///
/// Missing keys fall back to English.
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    messages: HashMap<String, String>,
}

impl MessageCatalog {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let messages: HashMap<String, String> =
            toml::from_str(text).map_err(|e| BridgeError::Config(e.to_string()))?;
        Ok(Self { messages })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Ids of [`MessageKey`]s this catalog has no entry for.
    pub fn missing(&self) -> Vec<&'static str> {
        MessageKey::ALL
            .iter()
            .map(MessageKey::id)
            .filter(|id| !self.messages.contains_key(*id))
            .collect()
    }
}

impl Translator for MessageCatalog {
    fn translate(&self, key: MessageKey) -> String {
        self.messages
            .get(key.id())
            .cloned()
            .unwrap_or_else(|| key.english().to_string())
    }
}
