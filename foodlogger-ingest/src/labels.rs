//! Confidence filtering for image-classification output.

use serde::{Deserialize, Serialize};

use crate::describe::UNKNOWN_FOOD;

/// Labels at or below this confidence are discarded.
pub const CONFIDENCE_FLOOR: f32 = 0.3;

/// At most this many labels feed the description and classifier.
pub const MAX_LABELS: usize = 3;

/// One raw classification result from the vision collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisionObservation {
    pub identifier: String,
    pub confidence: f32,
}

impl VisionObservation {
    pub fn new(identifier: impl Into<String>, confidence: f32) -> Self {
        Self {
            identifier: identifier.into(),
            confidence,
        }
    }
}

/// Top labels above the confidence floor, in observed order. Falls back to a
/// placeholder label so downstream code always has something to work with.
pub fn select_labels(observations: &[VisionObservation]) -> Vec<String> {
    let labels: Vec<String> = observations
        .iter()
        .filter(|o| o.confidence > CONFIDENCE_FLOOR)
        .take(MAX_LABELS)
        .map(|o| o.identifier.clone())
        .collect();

    if labels.is_empty() {
        vec![UNKNOWN_FOOD.to_string()]
    } else {
        labels
    }
}
