//! Upload operations.

use std::future::Future;
use std::path::PathBuf;

use bytes::Bytes;
use serde_json::Value;
use tracing::debug;

use super::utils::rooted;
use crate::error::{BridgeError, Result};
use crate::i18n::MessageKey;
use crate::manager::FileManager;
use crate::transport::{FilePart, UploadForm};

/// A candidate for upload.
///
/// In-memory buffers are always attached. Paths are attached only when they
/// point to a regular file; anything else is skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadEntry {
    Bytes { file_name: String, data: Bytes },
    Path(PathBuf),
}

impl UploadEntry {
    pub fn bytes(file_name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        UploadEntry::Bytes {
            file_name: file_name.into(),
            data: data.into(),
        }
    }

    pub fn path(path: impl Into<PathBuf>) -> Self {
        UploadEntry::Path(path.into())
    }

    async fn into_part(self) -> Option<FilePart> {
        match self {
            UploadEntry::Bytes { file_name, data } => Some(FilePart { file_name, data }),
            UploadEntry::Path(path) => {
                let metadata = tokio::fs::metadata(&path).await.ok()?;
                if !metadata.is_file() {
                    debug!(path = %path.display(), "skipping non-file upload entry");
                    return None;
                }
                let file_name = path.file_name()?.to_string_lossy().into_owned();
                match tokio::fs::read(&path).await {
                    Ok(data) => Some(FilePart::new(file_name, data)),
                    Err(e) => {
                        debug!(
                            path = %path.display(),
                            error = %e,
                            "skipping unreadable upload entry"
                        );
                        None
                    }
                }
            }
        }
    }
}

impl FileManager {
    /// Upload files into a folder.
    ///
    /// The capability check happens immediately: if the host cannot send
    /// multipart forms this returns `Err(BridgeError::Unsupported)` and no
    /// future is created. Otherwise the returned future performs the upload.
    ///
    /// Each attached entry is sent as `file-<index>`, where `index` is its
    /// position in `entries` (skipped entries leave gaps).
    ///
    /// # Example
    /// ```no_run
    /// # use fmbridge::{BridgeConfig, FileManager, UploadEntry};
    /// # async fn example() -> fmbridge::Result<()> {
    /// let manager = FileManager::new(&BridgeConfig::default())?;
    /// let entries = vec![
    ///     UploadEntry::path("report.pdf"),
    ///     UploadEntry::bytes("notes.txt", "hello"),
    /// ];
    /// manager.upload(entries, &["docs"])?.await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn upload<S: AsRef<str>>(
        &self,
        entries: Vec<UploadEntry>,
        path: &[S],
    ) -> Result<impl Future<Output = Result<Value>> + Send + '_> {
        if !self.capabilities.multipart_upload {
            return Err(BridgeError::Unsupported("multipart upload"));
        }

        let destination = rooted(path);
        Ok(async move {
            // Reading local files is part of the call.
            let in_flight = self.api.status().begin();

            let mut form = UploadForm::new(destination);
            for (index, entry) in entries.into_iter().enumerate() {
                if let Some(part) = entry.into_part().await {
                    form.attach(index, part);
                }
            }

            self.api
                .upload_in_flight(
                    &in_flight,
                    &self.endpoints.upload_url,
                    form,
                    &self.message(MessageKey::Uploading),
                )
                .await
        })
    }
}
