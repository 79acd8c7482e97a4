//! Transport seam between the bridge client and the wire.
//!
//! The client never talks to reqwest directly; it hands a [`RequestBody`] to a
//! [`Transport`] and gets back a [`TransportResult`]. [`crate::http::HttpClient`]
//! is the production implementation.

use async_trait::async_trait;
use bytes::Bytes;
use serde_json::Value;

/// Outcome of a single transport call.
///
/// Both variants carry the raw response body. A network-level failure with no
/// response at all is reported as `Failure` with an empty body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportResult {
    Success(Bytes),
    Failure(Bytes),
}

impl TransportResult {
    pub fn is_success(&self) -> bool {
        matches!(self, TransportResult::Success(_))
    }

    /// Consume the result, returning the body regardless of tag.
    pub fn into_body(self) -> Bytes {
        match self {
            TransportResult::Success(body) | TransportResult::Failure(body) => body,
        }
    }
}

/// A file attached to an upload form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub file_name: String,
    pub data: Bytes,
}

impl FilePart {
    pub fn new(file_name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            data: data.into(),
        }
    }
}

/// Multipart upload form: a `destination` field plus `file-<index>` parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadForm {
    destination: String,
    files: Vec<(String, FilePart)>,
}

impl UploadForm {
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            files: Vec::new(),
        }
    }

    /// Attach a file under the field name `file-<index>`.
    pub fn attach(&mut self, index: usize, part: FilePart) {
        self.files.push((format!("file-{}", index), part));
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Attached parts as `(field name, part)` pairs, in attach order.
    pub fn files(&self) -> &[(String, FilePart)] {
        &self.files
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.files.iter().map(|(name, _)| name.as_str()).collect()
    }
}

/// Body of a POST request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Json(Value),
    Multipart(UploadForm),
}

/// Request executor used by the bridge client.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST `body` to `url`.
    async fn post(&self, url: &str, body: RequestBody) -> TransportResult;

    /// GET `url`, returning the raw body.
    async fn get(&self, url: &str) -> TransportResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_form_keeps_original_indices() {
        let mut form = UploadForm::new("/docs");
        form.attach(0, FilePart::new("a.txt", &b"a"[..]));
        form.attach(2, FilePart::new("c.txt", &b"c"[..]));

        assert_eq!(form.destination(), "/docs");
        assert_eq!(form.field_names(), vec!["file-0", "file-2"]);
        assert_eq!(form.files()[1].1.file_name, "c.txt");
    }

    #[test]
    fn test_transport_result_body() {
        let ok = TransportResult::Success(Bytes::from_static(b"{}"));
        let err = TransportResult::Failure(Bytes::new());
        assert!(ok.is_success());
        assert!(!err.is_success());
        assert_eq!(ok.into_body(), Bytes::from_static(b"{}"));
        assert!(err.into_body().is_empty());
    }
}
