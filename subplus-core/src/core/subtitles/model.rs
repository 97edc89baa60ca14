use derive_more::Display;

use crate::core::subtitles::cue::SubtitleCue;
use crate::core::subtitles::{Result, SubtitleError};

const SRT_EXTENSIONS: [&str; 1] = ["srt"];
const VTT_EXTENSIONS: [&str; 1] = ["vtt"];
const ASS_EXTENSIONS: [&str; 2] = ["ass", "ssa"];

const SUBTITLE_TYPES: [SubtitleType; 3] = [SubtitleType::Srt, SubtitleType::Vtt, SubtitleType::Ass];

/// The supported subtitle file formats.
#[derive(Debug, Display, Clone, PartialEq, Eq, Hash)]
pub enum SubtitleType {
    Srt,
    Vtt,
    Ass,
}

impl SubtitleType {
    /// Retrieve the subtitle type for the given file extension.
    /// The extension is matched case-insensitively and an unknown extension is rejected
    /// before any parsing is attempted.
    pub fn from_extension(extension: &str) -> Result<SubtitleType> {
        let normalized = extension.to_lowercase();

        for subtitle in SUBTITLE_TYPES {
            if subtitle.extensions().contains(&normalized.as_str()) {
                return Ok(subtitle);
            }
        }

        Err(SubtitleError::ExtensionNotSupported(extension.to_string()))
    }

    /// The default file extension of this subtitle type.
    pub fn extension(&self) -> &str {
        self.extensions()[0]
    }

    fn extensions(&self) -> &[&str] {
        match self {
            SubtitleType::Srt => &SRT_EXTENSIONS,
            SubtitleType::Vtt => &VTT_EXTENSIONS,
            SubtitleType::Ass => &ASS_EXTENSIONS,
        }
    }
}

/// The two language tracks parsed from a single bilingual subtitle file.
/// The tracks don't share any invariant and are queried independently at playback time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BilingualSubtitles {
    primary: Vec<SubtitleCue>,
    secondary: Vec<SubtitleCue>,
}

impl BilingualSubtitles {
    pub fn new(primary: Vec<SubtitleCue>, secondary: Vec<SubtitleCue>) -> Self {
        Self { primary, secondary }
    }

    /// The cues of the primary language track.
    pub fn primary(&self) -> &[SubtitleCue] {
        &self.primary
    }

    /// The cues of the secondary language track.
    pub fn secondary(&self) -> &[SubtitleCue] {
        &self.secondary
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.secondary.is_empty()
    }

    /// Consume the subtitles into the `(primary, secondary)` track pair.
    pub fn into_tracks(self) -> (Vec<SubtitleCue>, Vec<SubtitleCue>) {
        (self.primary, self.secondary)
    }
}

/// The outcome of parsing a subtitle file.
/// SRT and VTT files produce a single track, ASS files produce a bilingual pair.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedSubtitle {
    Single(Vec<SubtitleCue>),
    Bilingual(BilingualSubtitles),
}

impl ParsedSubtitle {
    /// Verify if parsing yielded no cues at all.
    /// An empty result is not an error, the caller decides how to surface an unreadable file.
    pub fn is_empty(&self) -> bool {
        match self {
            ParsedSubtitle::Single(cues) => cues.is_empty(),
            ParsedSubtitle::Bilingual(subtitles) => subtitles.is_empty(),
        }
    }
}
