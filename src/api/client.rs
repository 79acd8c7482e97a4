//! Bridge API client with request/response handling.

use std::sync::Arc;

use bytes::Bytes;
use serde_json::Value;
use tracing::{debug, warn};

use super::envelope::Envelope;
use super::request::RequestDescriptor;
use crate::error::{BridgeError, Result};
use crate::http::HttpClient;
use crate::status::{InFlight, StatusTracker};
use crate::transport::{RequestBody, Transport, TransportResult, UploadForm};

/// Dispatches bridge requests and normalizes their replies.
///
/// Every call goes through the same pipeline: register as in flight, hand the
/// body to the transport, classify the reply, record any rejection message,
/// settle. The status record is shared by all calls on this client.
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    status: StatusTracker,
}

impl ApiClient {
    /// Create a client over the default reqwest transport.
    pub fn new() -> Self {
        Self::with_transport(Arc::new(HttpClient::new()))
    }

    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            status: StatusTracker::new(),
        }
    }

    pub fn status(&self) -> &StatusTracker {
        &self.status
    }

    /// Send a JSON request.
    ///
    /// # Arguments
    /// * `url` - Endpoint to post to
    /// * `request` - Mode tag and parameters
    /// * `default_error` - Message used if the transport fails and the reply carries none
    pub async fn request(
        &self,
        url: &str,
        request: RequestDescriptor,
        default_error: &str,
    ) -> Result<Value> {
        let _in_flight = self.status.begin();
        debug!(mode = %request.mode(), url, "bridge request");

        let reply = self
            .transport
            .post(url, RequestBody::Json(request.to_body()))
            .await;
        self.settle(reply, default_error)
    }

    /// Send a multipart upload form.
    pub async fn upload(&self, url: &str, form: UploadForm, default_error: &str) -> Result<Value> {
        let in_flight = self.status.begin();
        self.upload_in_flight(&in_flight, url, form, default_error).await
    }

    /// Send a multipart upload form under a call the caller already registered.
    pub(crate) async fn upload_in_flight(
        &self,
        _in_flight: &InFlight<'_>,
        url: &str,
        form: UploadForm,
        default_error: &str,
    ) -> Result<Value> {
        debug!(
            url,
            destination = form.destination(),
            files = form.files().len(),
            "bridge upload"
        );

        let reply = self.transport.post(url, RequestBody::Multipart(form)).await;
        self.settle(reply, default_error)
    }

    /// GET raw bytes. A successful reply is returned as-is, without
    /// envelope classification.
    pub async fn fetch(&self, url: &str, default_error: &str) -> Result<Bytes> {
        let in_flight = self.status.begin();
        self.fetch_in_flight(&in_flight, url, default_error).await
    }

    /// [`Self::fetch`] under a call the caller already registered.
    pub(crate) async fn fetch_in_flight(
        &self,
        _in_flight: &InFlight<'_>,
        url: &str,
        default_error: &str,
    ) -> Result<Bytes> {
        debug!(url, "bridge fetch");

        match self.transport.get(url).await {
            TransportResult::Success(body) => Ok(body),
            TransportResult::Failure(body) => {
                Err(self.reject(Envelope::from_bytes(&body).into_rejection(default_error)))
            }
        }
    }

    fn settle(&self, reply: TransportResult, default_error: &str) -> Result<Value> {
        let (envelope, default_error) = match reply {
            TransportResult::Success(body) => (Envelope::from_bytes(&body), None),
            TransportResult::Failure(body) => (Envelope::from_bytes(&body), Some(default_error)),
        };
        envelope.normalize(default_error).map_err(|e| self.reject(e))
    }

    fn reject(&self, error: BridgeError) -> BridgeError {
        if let BridgeError::Rejected { message, .. } = &error {
            warn!(message = message.as_str(), "bridge rejected request");
            self.status.record_error(message);
        }
        error
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
