//! Messages sent from submission tasks back to the UI thread

use crate::error::Result;
use crate::recognition::RecognitionResult;
use crate::session::preview::PreviewPixels;
use crate::session::SubmitTicket;

/// Outcome of one submission, tagged with the ticket it was issued under
#[derive(Debug)]
pub struct UploadOutcome {
    pub ticket: SubmitTicket,
    pub result: Result<RecognitionResult>,
}

/// Preview pixels decoded off the UI thread
#[derive(Debug)]
pub struct DecodedPreview {
    /// Id of the [`PreviewReference`](crate::session::PreviewReference) decoded
    pub id: u64,
    pub uri: String,
    /// `None` when the selection is not a decodable image
    pub pixels: Option<PreviewPixels>,
}
