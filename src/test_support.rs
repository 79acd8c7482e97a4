//! Test doubles for the transport and host seams.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use serde_json::{json, Value};
use tokio::sync::oneshot;

use crate::config::BridgeConfig;
use crate::error::{BridgeError, Result};
use crate::host::{Capabilities, Host};
use crate::manager::FileManager;
use crate::transport::{RequestBody, Transport, TransportResult, UploadForm};

pub(crate) const BASE_URL: &str = "http://bridge.test/";
pub(crate) const HANDLER_URL: &str = "http://bridge.test/bridges/php/handler.php";

#[derive(Debug, Clone)]
pub(crate) enum Call {
    Post { url: String, body: RequestBody },
    Get { url: String },
}

/// Records every call and answers from a queue of canned replies.
///
/// With an empty queue it answers `{"result": {"success": true, "error": null}}`.
#[derive(Default)]
pub(crate) struct RecordingTransport {
    calls: Mutex<Vec<Call>>,
    replies: Mutex<VecDeque<TransportResult>>,
}

impl RecordingTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reply(&self, reply: TransportResult) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub(crate) fn reply_json(&self, success: bool, value: Value) {
        let body = Bytes::from(value.to_string());
        self.reply(if success {
            TransportResult::Success(body)
        } else {
            TransportResult::Failure(body)
        });
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn json_bodies(&self) -> Vec<Value> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Post {
                    body: RequestBody::Json(value),
                    ..
                } => Some(value),
                _ => None,
            })
            .collect()
    }

    /// `params` object of the only JSON request made so far.
    pub(crate) fn single_params(&self) -> Value {
        let bodies = self.json_bodies();
        assert_eq!(bodies.len(), 1, "expected exactly one JSON request");
        bodies[0]["params"].clone()
    }

    pub(crate) fn forms(&self) -> Vec<UploadForm> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Post {
                    body: RequestBody::Multipart(form),
                    ..
                } => Some(form),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn urls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .map(|call| match call {
                Call::Post { url, .. } | Call::Get { url } => url,
            })
            .collect()
    }

    fn next_reply(&self) -> TransportResult {
        self.replies.lock().unwrap().pop_front().unwrap_or_else(|| {
            TransportResult::Success(Bytes::from(
                json!({ "result": { "success": true, "error": null } }).to_string(),
            ))
        })
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn post(&self, url: &str, body: RequestBody) -> TransportResult {
        self.calls.lock().unwrap().push(Call::Post {
            url: url.to_string(),
            body,
        });
        self.next_reply()
    }

    async fn get(&self, url: &str) -> TransportResult {
        self.calls.lock().unwrap().push(Call::Get {
            url: url.to_string(),
        });
        self.next_reply()
    }
}

/// Holds the first request open until the test releases it.
pub(crate) struct GatedTransport {
    gate: Mutex<Option<oneshot::Receiver<TransportResult>>>,
}

impl GatedTransport {
    pub(crate) fn new() -> (Self, oneshot::Sender<TransportResult>) {
        let (tx, rx) = oneshot::channel();
        (
            Self {
                gate: Mutex::new(Some(rx)),
            },
            tx,
        )
    }

    async fn wait(&self) -> TransportResult {
        let gate = self.gate.lock().unwrap().take();
        match gate {
            Some(rx) => rx
                .await
                .unwrap_or(TransportResult::Failure(Bytes::new())),
            None => TransportResult::Failure(Bytes::new()),
        }
    }
}

#[async_trait]
impl Transport for GatedTransport {
    async fn post(&self, _url: &str, _body: RequestBody) -> TransportResult {
        self.wait().await
    }

    async fn get(&self, _url: &str) -> TransportResult {
        self.wait().await
    }
}

/// Host that records what it was asked to open and save.
pub(crate) struct RecordingHost {
    capabilities: Capabilities,
    save_error: Option<String>,
    pub(crate) opened: Mutex<Vec<String>>,
    pub(crate) saved: Mutex<Vec<(String, Vec<u8>)>>,
}

impl RecordingHost {
    pub(crate) fn new(capabilities: Capabilities) -> Self {
        Self {
            capabilities,
            save_error: None,
            opened: Mutex::new(Vec::new()),
            saved: Mutex::new(Vec::new()),
        }
    }

    /// Host whose saves always fail with `message`.
    pub(crate) fn failing_saves(message: &str) -> Self {
        Self {
            save_error: Some(message.to_string()),
            ..Self::new(Capabilities::default())
        }
    }

    pub(crate) fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }

    pub(crate) fn saved(&self) -> Vec<(String, Vec<u8>)> {
        self.saved.lock().unwrap().clone()
    }
}

#[async_trait]
impl Host for RecordingHost {
    fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    fn open_in_new_window(&self, url: &str) {
        self.opened.lock().unwrap().push(url.to_string());
    }

    async fn save_as(&self, data: &[u8], file_name: &str) -> Result<()> {
        if let Some(message) = &self.save_error {
            return Err(BridgeError::Custom(message.clone()));
        }
        self.saved
            .lock()
            .unwrap()
            .push((file_name.to_string(), data.to_vec()));
        Ok(())
    }
}

pub(crate) fn test_config() -> BridgeConfig {
    BridgeConfig {
        base_url: BASE_URL.to_string(),
        ..BridgeConfig::default()
    }
}

/// File manager over a recording transport and a fully capable recording host.
pub(crate) fn manager() -> (FileManager, Arc<RecordingTransport>, Arc<RecordingHost>) {
    manager_with(test_config(), Capabilities::default())
}

pub(crate) fn manager_with(
    config: BridgeConfig,
    capabilities: Capabilities,
) -> (FileManager, Arc<RecordingTransport>, Arc<RecordingHost>) {
    let transport = Arc::new(RecordingTransport::new());
    let host = Arc::new(RecordingHost::new(capabilities));
    let manager = FileManager::builder(config)
        .with_transport(transport.clone())
        .with_host(host.clone())
        .build()
        .unwrap();
    (manager, transport, host)
}

/// File manager over a gated transport. The first request stays open until
/// a reply is sent through the returned sender.
pub(crate) fn gated_manager(
    host: RecordingHost,
) -> (FileManager, oneshot::Sender<TransportResult>, Arc<RecordingHost>) {
    let (transport, release) = GatedTransport::new();
    let host = Arc::new(host);
    let manager = FileManager::builder(test_config())
        .with_transport(Arc::new(transport))
        .with_host(host.clone())
        .build()
        .unwrap();
    (manager, release, host)
}
