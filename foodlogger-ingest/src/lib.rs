//! foodlogger-ingest: entry creation pipelines over raw text, voice transcripts, and vision labels

pub mod describe;
pub mod draft;
pub mod labels;

pub use describe::{UNKNOWN_FOOD, describe_text, describe_transcript, describe_vision_labels};
pub use draft::{draft_photo_entry, draft_text_entry, draft_voice_entry};
pub use labels::{CONFIDENCE_FLOOR, MAX_LABELS, VisionObservation, select_labels};
