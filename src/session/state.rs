//! Upload session state machine
//!
//! Idle -> Loading -> {Succeeded, Failed}. Selecting a new file always
//! drops the current result; a submission only installs its result if no
//! newer file was selected while it was in flight.

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::history::{sample_history, HistoryEntry};
use crate::recognition::RecognitionResult;
use crate::session::{PreviewReference, SelectedImage};

/// Where the current submission stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadPhase {
    /// Nothing submitted since the last selection
    #[default]
    Idle,
    /// A request is in flight; submit is disabled
    Loading,
    /// The last submission produced a result
    Succeeded,
    /// The last submission failed and raised an alert
    Failed,
}

impl UploadPhase {
    /// Caption for the submit button
    pub fn button_label(&self) -> &'static str {
        match self {
            UploadPhase::Loading => "Processing...",
            _ => "Detect License Plate",
        }
    }
}

/// Identifies which selection a submission was made for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitTicket {
    generation: u64,
}

/// Work handed to the background task by [`UploadSession::submit`]
#[derive(Debug, Clone)]
pub struct SubmitRequest {
    pub ticket: SubmitTicket,
    pub image: SelectedImage,
}

/// Everything the window shows, owned by the UI thread
#[derive(Debug)]
pub struct UploadSession {
    selected: Option<SelectedImage>,
    preview: Option<PreviewReference>,
    result: Option<RecognitionResult>,
    phase: UploadPhase,
    /// Pending blocking alert
    alert: Option<String>,
    /// Bumped on every selection
    generation: u64,
    history: Vec<HistoryEntry>,
}

impl Default for UploadSession {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadSession {
    pub fn new() -> Self {
        Self {
            selected: None,
            preview: None,
            result: None,
            phase: UploadPhase::Idle,
            alert: None,
            generation: 0,
            history: sample_history(),
        }
    }

    /// Replace the selected image, regenerate its preview and clear the result
    pub fn select_file(&mut self, image: SelectedImage) {
        self.generation += 1;
        info!(
            "Selected {} ({} bytes, {})",
            image.file_name(),
            image.len(),
            image.content_type()
        );

        self.preview = Some(PreviewReference::from_image(self.generation, &image));
        self.selected = Some(image);
        self.result = None;

        // A request still in flight keeps the button disabled until it lands
        if self.phase != UploadPhase::Loading {
            self.phase = UploadPhase::Idle;
        }
    }

    /// Start a submission for the selected image
    ///
    /// Raises the "Please select an image" alert when nothing is selected.
    pub fn submit(&mut self) -> Result<SubmitRequest> {
        if self.phase == UploadPhase::Loading {
            debug!("Submit ignored, request already in flight");
            return Err(Error::SubmissionInFlight);
        }

        let Some(image) = &self.selected else {
            let err = Error::NoFileSelected;
            self.alert = Some(err.user_message());
            return Err(err);
        };

        self.phase = UploadPhase::Loading;
        Ok(SubmitRequest {
            ticket: SubmitTicket {
                generation: self.generation,
            },
            image: image.clone(),
        })
    }

    /// Apply the outcome of a submission and leave Loading
    ///
    /// Returns `false` when the outcome belonged to an older selection and
    /// was discarded.
    pub fn complete(&mut self, ticket: SubmitTicket, outcome: Result<RecognitionResult>) -> bool {
        if self.phase != UploadPhase::Loading {
            warn!("Received a submission outcome while not loading");
        }

        if ticket.generation != self.generation {
            debug!(
                "Discarding outcome for selection {} (current {})",
                ticket.generation, self.generation
            );
            self.phase = UploadPhase::Idle;
            return false;
        }

        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.phase = UploadPhase::Succeeded;
            }
            Err(err) => {
                warn!("Submission failed: {}", err);
                self.alert = Some(err.user_message());
                self.phase = UploadPhase::Failed;
            }
        }
        true
    }

    /// Raise an alert for an error that happened outside a submission
    pub fn report_error(&mut self, err: &Error) {
        warn!("{}", err);
        self.alert = Some(err.user_message());
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn phase(&self) -> UploadPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == UploadPhase::Loading
    }

    pub fn selected(&self) -> Option<&SelectedImage> {
        self.selected.as_ref()
    }

    pub fn preview(&self) -> Option<&PreviewReference> {
        self.preview.as_ref()
    }

    pub fn result(&self) -> Option<&RecognitionResult> {
        self.result.as_ref()
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(name: &str) -> SelectedImage {
        SelectedImage::new(name, b"image bytes".to_vec())
    }

    fn plate(text: &str, confidence: f64) -> RecognitionResult {
        RecognitionResult::new(text, confidence)
    }

    #[test]
    fn test_initial_state() {
        let session = UploadSession::new();
        assert_eq!(session.phase(), UploadPhase::Idle);
        assert!(session.selected().is_none());
        assert!(session.preview().is_none());
        assert!(session.result().is_none());
        assert!(session.alert().is_none());
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn test_submit_without_file() {
        let mut session = UploadSession::new();

        let err = session.submit().unwrap_err();

        assert!(matches!(err, Error::NoFileSelected));
        assert_eq!(session.alert(), Some("Please select an image"));
        assert!(!session.is_loading());
    }

    #[test]
    fn test_successful_submission() {
        let mut session = UploadSession::new();
        session.select_file(image("car.jpg"));

        let request = session.submit().unwrap();
        assert!(session.is_loading());
        assert_eq!(session.phase().button_label(), "Processing...");
        assert_eq!(request.image.file_name(), "car.jpg");

        assert!(session.complete(request.ticket, Ok(plate("DL8CAF5031", 0.94))));

        assert!(!session.is_loading());
        assert_eq!(session.phase(), UploadPhase::Succeeded);
        assert_eq!(session.phase().button_label(), "Detect License Plate");
        let result = session.result().unwrap();
        assert_eq!(result.text, "DL8CAF5031");
        assert_eq!(result.confidence_label(), "94.00%");
        assert!(session.alert().is_none());
    }

    #[test]
    fn test_failed_submission() {
        let mut session = UploadSession::new();
        session.select_file(image("car.jpg"));
        let request = session.submit().unwrap();

        let status = Error::Status(reqwest::StatusCode::BAD_REQUEST);
        assert!(session.complete(request.ticket, Err(status)));

        assert!(!session.is_loading());
        assert_eq!(session.phase(), UploadPhase::Failed);
        assert!(session.result().is_none());
        assert_eq!(session.alert(), Some("Failed to process image"));

        session.dismiss_alert();
        assert!(session.alert().is_none());
    }

    #[test]
    fn test_selection_clears_result() {
        let mut session = UploadSession::new();
        session.select_file(image("first.jpg"));
        let request = session.submit().unwrap();
        session.complete(request.ticket, Ok(plate("MH12AB1234", 0.89)));
        assert!(session.result().is_some());
        let first_preview = session.preview().unwrap().id();

        session.select_file(image("second.jpg"));

        assert!(session.result().is_none());
        assert_eq!(session.phase(), UploadPhase::Idle);
        assert_eq!(session.selected().unwrap().file_name(), "second.jpg");
        assert_ne!(session.preview().unwrap().id(), first_preview);
    }

    #[test]
    fn test_submit_rejected_while_loading() {
        let mut session = UploadSession::new();
        session.select_file(image("car.jpg"));
        session.submit().unwrap();

        let err = session.submit().unwrap_err();

        assert!(matches!(err, Error::SubmissionInFlight));
        assert!(session.is_loading());
        assert!(session.alert().is_none());
    }

    #[test]
    fn test_stale_outcome_discarded() {
        let mut session = UploadSession::new();
        session.select_file(image("old.jpg"));
        let request = session.submit().unwrap();

        // New selection while the old request is still running
        session.select_file(image("new.jpg"));
        assert!(session.is_loading());

        assert!(!session.complete(request.ticket, Ok(plate("OLD0001", 0.99))));

        assert!(!session.is_loading());
        assert_eq!(session.phase(), UploadPhase::Idle);
        assert!(session.result().is_none());
        assert_eq!(session.selected().unwrap().file_name(), "new.jpg");

        // The newer selection can now be submitted
        let request = session.submit().unwrap();
        assert!(session.complete(request.ticket, Ok(plate("NEW0002", 0.5))));
        assert_eq!(session.result().unwrap().text, "NEW0002");
    }

    #[test]
    fn test_stale_failure_raises_no_alert() {
        let mut session = UploadSession::new();
        session.select_file(image("old.jpg"));
        let request = session.submit().unwrap();
        session.select_file(image("new.jpg"));

        let status = Error::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        session.complete(request.ticket, Err(status));

        assert!(session.alert().is_none());
        assert!(!session.is_loading());
    }

    #[test]
    fn test_resubmit_same_image() {
        let mut session = UploadSession::new();
        session.select_file(image("car.jpg"));

        let first = session.submit().unwrap();
        session.complete(first.ticket, Err(Error::Status(reqwest::StatusCode::BAD_GATEWAY)));
        assert_eq!(session.phase(), UploadPhase::Failed);

        let second = session.submit().unwrap();
        assert_eq!(first.ticket, second.ticket);
        session.complete(second.ticket, Ok(plate("DL8CAF5031", 0.94)));
        assert_eq!(session.phase(), UploadPhase::Succeeded);
    }

    #[test]
    fn test_read_error_alert() {
        let mut session = UploadSession::new();
        let err = SelectedImage::from_path(std::path::Path::new("/nonexistent/x.png")).unwrap_err();

        session.report_error(&err);

        assert_eq!(session.alert(), Some("Could not read /nonexistent/x.png"));
        assert!(session.selected().is_none());
    }
}
