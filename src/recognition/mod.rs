//! Recognition service boundary
//!
//! Everything that talks to the external `/upload` endpoint lives here: the
//! result type it answers with and the HTTP client that sends images to it.
//! No recognition happens locally.

pub mod client;
pub mod result;

pub use client::UploadClient;
pub use result::{format_confidence, RecognitionResult};
