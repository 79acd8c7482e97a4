//! Download operations.

use std::fmt;

use bytes::Bytes;
use futures::future::{BoxFuture, FutureExt};
use tracing::{debug, warn};

use crate::api::Mode;
use crate::error::Result;
use crate::fs::item::FileRef;
use crate::i18n::MessageKey;
use crate::manager::FileManager;

/// Outcome of [`FileManager::download`].
pub enum Download<'a> {
    /// The target was a folder; nothing happened.
    Skipped,
    /// The URL was handed to the host environment. Nothing to wait for.
    Delegated(String),
    /// The bytes are being fetched and will be saved through the host.
    Dispatched(BoxFuture<'a, Result<Bytes>>),
}

impl Download<'_> {
    pub fn is_skipped(&self) -> bool {
        matches!(self, Download::Skipped)
    }

    pub fn is_delegated(&self) -> bool {
        matches!(self, Download::Delegated(_))
    }

    pub fn is_dispatched(&self) -> bool {
        matches!(self, Download::Dispatched(_))
    }

    /// URL handed to the host, if delegated.
    pub fn url(&self) -> Option<&str> {
        match self {
            Download::Delegated(url) => Some(url),
            _ => None,
        }
    }

    /// Wait for a dispatched download. Returns the saved bytes, or `None`
    /// when there was nothing to wait for.
    pub async fn wait(self) -> Result<Option<Bytes>> {
        match self {
            Download::Dispatched(fut) => fut.await.map(Some),
            _ => Ok(None),
        }
    }
}

impl fmt::Debug for Download<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Download::Skipped => f.write_str("Skipped"),
            Download::Delegated(url) => f.debug_tuple("Delegated").field(url).finish(),
            Download::Dispatched(_) => f.write_str("Dispatched(..)"),
        }
    }
}

impl FileManager {
    /// Download URL for an item: `<download endpoint>?mode=download&path=<path>`.
    pub fn get_url<F: FileRef + ?Sized>(&self, item: &F) -> String {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("mode", Mode::Download.as_str())
            .append_pair("path", &item.full_path())
            .finish();
        format!("{}?{}", self.endpoints.download_file_url, query)
    }

    /// Download a file.
    ///
    /// Folders are skipped. The URL is delegated to the host when downloading
    /// through the client is disabled, `force_new_window` is set, or the host
    /// cannot save binary data. Otherwise the bytes are fetched and passed to
    /// [`crate::Host::save_as`] under the item's name. The call stays in flight
    /// until the save completes, and a failed save is recorded as the last error.
    ///
    /// # Example
    /// ```no_run
    /// # use fmbridge::{BridgeConfig, Download, FileManager, Item, ItemKind};
    /// # async fn example() -> fmbridge::Result<()> {
    /// let manager = FileManager::new(&BridgeConfig::default())?;
    /// let item = Item::from_path("/docs/report.pdf", ItemKind::File);
    /// match manager.download(&item, false) {
    ///     Download::Dispatched(fut) => {
    ///         let data = fut.await?;
    ///         println!("saved {} bytes", data.len());
    ///     }
    ///     Download::Delegated(url) => println!("open {}", url),
    ///     Download::Skipped => {}
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn download<F: FileRef + ?Sized>(
        &self,
        item: &F,
        force_new_window: bool,
    ) -> Download<'_> {
        if item.is_folder() {
            debug!(path = item.full_path().as_str(), "not downloading a folder");
            return Download::Skipped;
        }

        let url = self.get_url(item);
        if !self.download_by_ajax || force_new_window || !self.capabilities.binary_save {
            if self.download_by_ajax && !force_new_window {
                warn!("host cannot save binary data, delegating download");
            }
            self.host.open_in_new_window(&url);
            return Download::Delegated(url);
        }

        let file_name = item.name().to_string();
        let default_error = self.message(MessageKey::Downloading);
        Download::Dispatched(
            async move {
                let in_flight = self.api.status().begin();
                let data = self
                    .api
                    .fetch_in_flight(&in_flight, &url, &default_error)
                    .await?;

                if let Err(e) = self.host.save_as(&data, &file_name).await {
                    warn!(file_name = file_name.as_str(), error = %e, "failed to save download");
                    self.api.status().record_error(&e.to_string());
                    return Err(e);
                }
                Ok(data)
            }
            .boxed(),
        )
    }
}
