//! Bridge API client and wire types.

pub mod client;
pub mod envelope;
pub mod request;

pub use client::ApiClient;
pub use envelope::{Envelope, MALFORMED_RESPONSE};
pub use request::{Mode, RequestDescriptor};
