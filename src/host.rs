//! Host environment capabilities.
//!
//! The host is whatever embeds the client: a desktop shell, a TUI, a test.
//! It decides whether multipart uploads and client-side saving are possible,
//! and how to open a URL in a new browsing context.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{BridgeError, Result};

/// Feature flags reported by a [`Host`], read once when the client is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    /// Multipart form uploads are available.
    pub multipart_upload: bool,
    /// Downloaded bytes can be saved to a file on the client side.
    pub binary_save: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            multipart_upload: true,
            binary_save: true,
        }
    }
}

/// Environment hooks used by uploads and downloads.
#[async_trait]
pub trait Host: Send + Sync {
    fn capabilities(&self) -> Capabilities;

    /// Hand a download URL to the environment (new window, external opener).
    fn open_in_new_window(&self, url: &str);

    /// Save downloaded bytes under `file_name`.
    async fn save_as(&self, data: &[u8], file_name: &str) -> Result<()>;
}

/// Host that saves downloads into a local directory.
///
/// It has no browsing context, so delegated downloads are only logged and the
/// URL is surfaced to the caller through [`crate::Download::Delegated`].
#[derive(Debug, Clone)]
pub struct LocalHost {
    download_dir: PathBuf,
}

impl LocalHost {
    pub fn new(download_dir: impl Into<PathBuf>) -> Self {
        Self {
            download_dir: download_dir.into(),
        }
    }

    pub fn download_dir(&self) -> &Path {
        &self.download_dir
    }

    /// Destination for `file_name`, stripped of any directory components.
    pub fn target_path(&self, file_name: &str) -> Result<PathBuf> {
        let base = Path::new(file_name)
            .file_name()
            .ok_or_else(|| BridgeError::Custom(format!("Invalid file name: {:?}", file_name)))?;
        Ok(self.download_dir.join(base))
    }
}

#[async_trait]
impl Host for LocalHost {
    fn capabilities(&self) -> Capabilities {
        Capabilities::default()
    }

    fn open_in_new_window(&self, url: &str) {
        info!(url, "download delegated to the environment");
    }

    async fn save_as(&self, data: &[u8], file_name: &str) -> Result<()> {
        let path = self.target_path(file_name)?;
        tokio::fs::write(&path, data).await?;
        info!(path = %path.display(), bytes = data.len(), "saved download");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_path_strips_directories() {
        let host = LocalHost::new("/downloads");
        assert_eq!(
            host.target_path("../../etc/passwd").unwrap(),
            PathBuf::from("/downloads/passwd")
        );
        assert_eq!(
            host.target_path("report.pdf").unwrap(),
            PathBuf::from("/downloads/report.pdf")
        );
        assert!(host.target_path("..").is_err());
        assert!(host.target_path("").is_err());
    }

    #[tokio::test]
    async fn test_save_as_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let host = LocalHost::new(dir.path());

        host.save_as(b"hello", "greeting.txt").await.unwrap();
        assert_eq!(
            std::fs::read(dir.path().join("greeting.txt")).unwrap(),
            b"hello"
        );
    }

    #[tokio::test]
    async fn test_save_as_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let host = LocalHost::new(dir.path().join("missing"));

        let err = host.save_as(b"hello", "greeting.txt").await.unwrap_err();
        assert!(matches!(err, BridgeError::Io(_)));
    }

    #[test]
    fn test_local_host_capabilities() {
        let caps = LocalHost::new(".").capabilities();
        assert!(caps.multipart_upload);
        assert!(caps.binary_save);
    }
}
