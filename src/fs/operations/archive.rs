//! Archive operations.

use serde_json::Value;

use super::utils::{file_list, joined_or_root};
use crate::api::{Mode, RequestDescriptor};
use crate::error::Result;
use crate::fs::item::FileRef;
use crate::i18n::MessageKey;
use crate::manager::FileManager;

impl FileManager {
    /// Compress files into an archive placed in `path` (root when empty).
    pub async fn compress<F: FileRef, S: AsRef<str>>(
        &self,
        files: &[F],
        path: &[S],
    ) -> Result<Value> {
        let request = RequestDescriptor::new(Mode::Compress)
            .param("items", file_list(files))
            .param("destination", joined_or_root(path));

        self.api
            .request(
                &self.endpoints.compress_url,
                request,
                &self.message(MessageKey::Compressing),
            )
            .await
    }

    /// Extract an archive into `path` (root when empty).
    pub async fn extract<F: FileRef + ?Sized, S: AsRef<str>>(
        &self,
        item: &F,
        path: &[S],
    ) -> Result<Value> {
        let request = RequestDescriptor::new(Mode::Extract)
            .param("path", item.full_path())
            .param("destination", joined_or_root(path));

        self.api
            .request(
                &self.endpoints.extract_url,
                request,
                &self.message(MessageKey::Extracting),
            )
            .await
    }
}
