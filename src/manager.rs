//! The bridge client facade.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use crate::api::ApiClient;
use crate::config::{BridgeConfig, Endpoints};
use crate::error::Result;
use crate::host::{Capabilities, Host, LocalHost};
use crate::http::HttpClient;
use crate::i18n::{English, MessageKey, Translator};
use crate::status::StatusSnapshot;
use crate::transport::Transport;

/// Client for a file-manager bridge backend.
///
/// Operations are defined in `fs::operations`. All of them take `&self`, so
/// a single client can have several requests in flight.
pub struct FileManager {
    pub(crate) api: ApiClient,
    pub(crate) endpoints: Endpoints,
    pub(crate) download_by_ajax: bool,
    pub(crate) host: Arc<dyn Host>,
    pub(crate) capabilities: Capabilities,
    messages: Arc<dyn Translator>,
}

impl FileManager {
    /// Create a client with the default transport, host and messages.
    pub fn new(config: &BridgeConfig) -> Result<Self> {
        Self::builder(config.clone()).build()
    }

    pub fn builder(config: BridgeConfig) -> FileManagerBuilder {
        FileManagerBuilder {
            config,
            transport: None,
            host: None,
            translator: None,
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Resolved endpoint URLs.
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Host capabilities, as read at construction.
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn status(&self) -> StatusSnapshot {
        self.api.status().snapshot()
    }

    /// Whether any operation is between dispatch and settlement.
    pub fn is_busy(&self) -> bool {
        self.api.status().is_busy()
    }

    pub fn last_error(&self) -> String {
        self.api.status().last_error()
    }

    pub fn subscribe(&self) -> watch::Receiver<StatusSnapshot> {
        self.api.status().subscribe()
    }

    pub(crate) fn message(&self, key: MessageKey) -> String {
        self.messages.translate(key)
    }
}

/// Builder for [`FileManager`] that allows replacing each collaborator.
pub struct FileManagerBuilder {
    config: BridgeConfig,
    transport: Option<Arc<dyn Transport>>,
    host: Option<Arc<dyn Host>>,
    translator: Option<Arc<dyn Translator>>,
}

impl FileManagerBuilder {
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_host(mut self, host: Arc<dyn Host>) -> Self {
        self.host = Some(host);
        self
    }

    pub fn with_translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.translator = Some(translator);
        self
    }

    pub fn build(self) -> Result<FileManager> {
        let endpoints = self.config.resolve_endpoints()?;

        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HttpClient::from_config(&self.config.http)?),
        };
        let host: Arc<dyn Host> = match self.host {
            Some(host) => host,
            None => Arc::new(LocalHost::new(self.config.download_dir.clone())),
        };
        let messages: Arc<dyn Translator> = match self.translator {
            Some(translator) => translator,
            None => Arc::new(English),
        };
        let capabilities = host.capabilities();

        debug!(
            base_url = self.config.base_url.as_str(),
            multipart_upload = capabilities.multipart_upload,
            binary_save = capabilities.binary_save,
            "file manager ready"
        );

        Ok(FileManager {
            api: ApiClient::with_transport(transport),
            endpoints,
            download_by_ajax: self.config.download_files_by_ajax,
            host,
            capabilities,
            messages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BridgeError;
    use crate::i18n::MessageCatalog;
    use crate::test_support::{test_config, HANDLER_URL};

    #[test]
    fn test_default_build() {
        let manager = FileManager::new(&test_config()).unwrap();
        assert_eq!(manager.endpoints().list_url, HANDLER_URL);
        assert_eq!(manager.capabilities(), Capabilities::default());
        assert!(!manager.is_busy());
        assert_eq!(manager.status(), StatusSnapshot::default());
    }

    #[test]
    fn test_bad_base_url_fails_build() {
        let config = BridgeConfig {
            base_url: "relative/only".to_string(),
            ..BridgeConfig::default()
        };
        assert!(matches!(
            FileManager::new(&config),
            Err(BridgeError::UrlError(_))
        ));
    }

    #[test]
    fn test_custom_translator() {
        let catalog =
            MessageCatalog::from_toml_str("error_deleting = \"Suppression impossible\"").unwrap();
        let manager = FileManager::builder(test_config())
            .with_translator(Arc::new(catalog))
            .build()
            .unwrap();

        assert_eq!(manager.message(MessageKey::Deleting), "Suppression impossible");
        assert_eq!(
            manager.message(MessageKey::Copying),
            MessageKey::Copying.english()
        );
    }

    #[test]
    fn test_file_manager_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FileManager>();
    }
}
