//! Detection history shown below the upload panel
//!
//! The table is fixed sample data. Nothing here is fetched, stored, or
//! derived from live detections.

use serde::{Deserialize, Serialize};

use crate::recognition::format_confidence;

/// One row of the history table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: u32,
    pub image_url: String,
    pub plate_text: String,
    pub confidence: f64,
    pub created_at: String,
}

impl HistoryEntry {
    pub fn confidence_label(&self) -> String {
        format_confidence(self.confidence)
    }
}

/// The sample rows rendered in the history table
pub fn sample_history() -> Vec<HistoryEntry> {
    vec![
        HistoryEntry {
            id: 1,
            image_url: "/media/sample1.jpg".to_string(),
            plate_text: "DL8CAF5031".to_string(),
            confidence: 0.94,
            created_at: "2025-01-12 14:32".to_string(),
        },
        HistoryEntry {
            id: 2,
            image_url: "/media/sample2.jpg".to_string(),
            plate_text: "MH12AB1234".to_string(),
            confidence: 0.89,
            created_at: "2025-01-11 10:18".to_string(),
        },
    ]
}
