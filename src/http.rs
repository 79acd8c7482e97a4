//! HTTP client wrapper for bridge requests.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, ClientBuilder};
use tracing::warn;

use crate::config::HttpConfig;
use crate::error::{BridgeError, Result};
use crate::transport::{RequestBody, Transport, TransportResult, UploadForm};

/// HTTP client for making requests to a bridge backend.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client.
    pub fn new() -> Self {
        Self {
            client: Self::builder().build().unwrap_or_default(),
        }
    }

    /// Create a new HTTP client with a proxy.
    pub fn with_proxy(proxy: &str) -> Result<Self> {
        Self::from_config(&HttpConfig {
            proxy: Some(proxy.to_string()),
            ..HttpConfig::default()
        })
    }

    /// Create a client from the `[http]` section of the bridge config.
    pub fn from_config(config: &HttpConfig) -> Result<Self> {
        let mut builder = Self::builder();

        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(proxy) = &config.proxy {
            let proxy = reqwest::Proxy::all(proxy)
                .map_err(|e| BridgeError::Config(format!("Invalid proxy: {}", e)))?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| BridgeError::Config(format!("Failed to build client: {}", e)))?;

        Ok(Self { client })
    }

    fn builder() -> ClientBuilder {
        let mut headers = HeaderMap::new();
        headers.insert("X-Requested-With", HeaderValue::from_static("XMLHttpRequest"));
        Client::builder().default_headers(headers)
    }

    fn multipart(form: UploadForm) -> Form {
        let mut multipart = Form::new().text("destination", form.destination().to_string());
        for (field, part) in form.files() {
            multipart = multipart.part(
                field.clone(),
                Part::stream_with_length(part.data.clone(), part.data.len() as u64)
                    .file_name(part.file_name.clone()),
            );
        }
        multipart
    }

    async fn settle(request: reqwest::RequestBuilder, url: &str) -> TransportResult {
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(url, error = %e, "bridge request failed");
                return TransportResult::Failure(Bytes::new());
            }
        };

        let status = response.status();
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                warn!(url, error = %e, "failed to read bridge response body");
                return TransportResult::Failure(Bytes::new());
            }
        };

        if status.is_success() {
            TransportResult::Success(body)
        } else {
            warn!(url, status = status.as_u16(), "bridge returned error status");
            TransportResult::Failure(body)
        }
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn post(&self, url: &str, body: RequestBody) -> TransportResult {
        let request = match body {
            RequestBody::Json(value) => self.client.post(url).json(&value),
            RequestBody::Multipart(form) => self.client.post(url).multipart(Self::multipart(form)),
        };
        Self::settle(request, url).await
    }

    async fn get(&self, url: &str) -> TransportResult {
        Self::settle(self.client.get(url), url).await
    }
}
