use thiserror::Error;

use crate::core::subtitles::model::SubtitleType;

/// The specialized subtitle result.
pub type Result<T> = std::result::Result<T, SubtitleError>;

/// Represents errors specific to subtitle handling.
/// Per-block and per-line failures are absorbed by the parsers and never surface here,
/// the worst case of a degraded parse is an empty cue track.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubtitleError {
    /// The file extension doesn't map to a supported subtitle format.
    #[error("Extension {0} is not supported")]
    ExtensionNotSupported(String),
    /// IO error occurred while reading the subtitle file.
    #[error("Failed to read file {0}: {1}")]
    IO(String, String),
    /// Subtitle conversion failed.
    #[error("Subtitle conversion to {0} failed: {1}")]
    ConversionFailed(SubtitleType, String),
}
