//! Upload session state
//!
//! The single piece of state the window owns: which image is selected, its
//! preview, the in-flight submission and the latest recognition result.
//! Background work only reaches it through [`UploadOutcome`] messages.

pub mod messages;
pub mod preview;
pub mod selection;
pub mod state;

pub use messages::{DecodedPreview, UploadOutcome};
pub use preview::PreviewReference;
pub use selection::SelectedImage;
pub use state::{SubmitRequest, SubmitTicket, UploadSession};
