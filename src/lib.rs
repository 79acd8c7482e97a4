//! # fmbridge
//!
//! Rust client library for file-manager bridge backends (the PHP/Python/Java
//! "bridge" handlers that expose a server directory over a single JSON endpoint).
//!
//! ## Features
//!
//! - **Filesystem Operations**:
//!   - List folders (`list`, `list_items`).
//!   - Copy, move (`mv`), rename and delete (`remove`) files/folders.
//!   - Create folders (`create_folder`) and change permissions.
//! - **Content**: Read and save text files (`get_content`, `read_text`, `edit`).
//! - **Archives**: Compress files and extract archives on the server.
//! - **File Transfers**:
//!   - Multipart uploads of local files or in-memory buffers.
//!   - Downloads saved through the host, or delegated as a URL.
//! - **Status**: A shared busy flag and last error message, observable through
//!   a watch channel.
//!
//! Every reply goes through the same normalization: the bridge may report
//! failure through the HTTP status, a `result.error` string or an
//! `error.message` string, and all of them surface as
//! [`BridgeError::Rejected`] carrying the message and the raw reply.
//!
//! ## Example: Basic Usage
//!
//! ```no_run
//! use fmbridge::{BridgeConfig, FileManager, Item, ItemKind};
//!
//! # async fn example() -> fmbridge::Result<()> {
//! let config = BridgeConfig::load("fmbridge.toml")?;
//! let manager = FileManager::new(&config)?;
//!
//! // List the root folder
//! for item in manager.list_items::<&str>(&[]).await? {
//!     println!("{} ({} bytes)", item.name, item.size);
//! }
//!
//! // Create a folder and copy a file into it
//! manager.create_folder("backup", &["docs"]).await?;
//! let report = Item::from_path("/docs/report.pdf", ItemKind::File);
//! manager.copy(&[&report], &["docs", "backup"]).await?;
//!
//! if manager.is_busy() {
//!     println!("still working");
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod fs;
pub mod host;
pub mod http;
pub mod i18n;
pub mod manager;
pub mod status;
pub mod transport;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use api::{ApiClient, Envelope, Mode, RequestDescriptor, MALFORMED_RESPONSE};
pub use config::{BridgeConfig, Endpoints, HttpConfig};
pub use error::{BridgeError, Result};
pub use fs::{Download, FileRef, Item, ItemKind, UploadEntry};
pub use host::{Capabilities, Host, LocalHost};
pub use http::HttpClient;
pub use i18n::{English, MessageCatalog, MessageKey, Translator};
pub use manager::{FileManager, FileManagerBuilder};
pub use status::{StatusSnapshot, StatusTracker};
pub use transport::{FilePart, RequestBody, Transport, TransportResult, UploadForm};
