//! Exercise Video Common Library
//!
//! CLIとWeb(WASM)で共有されるセッション状態と型

pub mod types;
pub mod error;
pub mod exercise;
pub mod media;
pub mod score;
pub mod config;
pub mod upload;
pub mod training;
pub mod comparison;
pub mod route;

pub use types::{Phase, SubmissionRecord};
pub use error::{Error, Result};
pub use exercise::Exercise;
pub use media::{is_video_media_type, media_type_for_file_name, MediaFile, VideoFile};
pub use score::{MatchTier, SimilarityScore};
pub use config::SimulationConfig;
pub use upload::{
    ComparisonBackend, FormField, SimulatedBackend, TrainingBackend, UploadError, UploadForm,
};
pub use training::{TrainingJob, TrainingSession};
pub use comparison::{ComparisonJob, ComparisonMode, ComparisonSession, Slot};
pub use route::{Route, AFTER_TRAINING_PATH};
