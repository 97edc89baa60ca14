use std::fmt::Debug;
use std::fs;
use std::path::Path;

use log::trace;

pub use ass::AssParser;
pub use srt::SrtParser;
pub use vtt::VttParser;

use crate::core::subtitles::cue::SubtitleCue;
use crate::core::subtitles::model::{ParsedSubtitle, SubtitleType};
use crate::core::subtitles::{Result, SubtitleError};

mod ass;
mod srt;
mod timecode;
mod vtt;

const NEWLINE: &str = "\n";
const TAG_PATTERN: &str = "<[^>]*>";

/// A subtitle parser which converts raw subtitle text into cues or visa-versa.
pub trait Parser: Debug {
    /// Parse the given raw content to subtitle cues.
    /// Invalid blocks or lines within the content are skipped by the parser and logged as a warning.
    fn parse(&self, content: &str) -> Vec<SubtitleCue>;

    /// Convert the given cues back to the raw format of this parser.
    /// This is always represented as a plain text value.
    ///
    /// * `cues` - The cues to convert, consisting of at least one cue to prevent corruption of the output.
    ///
    /// It returns the plain text value on success, else the [SubtitleError].
    fn convert(&self, cues: &[SubtitleCue]) -> Result<String>;
}

/// Parse the given raw subtitle content based on its declared file extension.
/// An unsupported extension is rejected before any parsing is attempted, which is
/// distinct from a supported file parsing to zero cues.
pub fn parse(content: &str, extension: &str) -> Result<ParsedSubtitle> {
    let subtitle_type = SubtitleType::from_extension(extension)?;

    Ok(parse_with_type(content, &subtitle_type))
}

/// Parse the subtitle file at the given path.
/// The format is selected from the path's extension.
pub fn parse_file(path: &Path) -> Result<ParsedSubtitle> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
    let subtitle_type = SubtitleType::from_extension(extension)?;
    let content = fs::read_to_string(path)
        .map_err(|e| SubtitleError::IO(path.display().to_string(), e.to_string()))?;

    Ok(parse_with_type(content.as_str(), &subtitle_type))
}

/// Convert the given cues to the raw format of the given output type.
/// It returns the raw format string for the given type on success, else the error.
pub fn convert(cues: &[SubtitleCue], output_type: SubtitleType) -> Result<String> {
    match output_type {
        SubtitleType::Srt => SrtParser::new().convert(cues),
        SubtitleType::Vtt => VttParser::new().convert(cues),
        SubtitleType::Ass => Err(SubtitleError::ConversionFailed(
            output_type,
            "format is not supported as conversion output".to_string(),
        )),
    }
}

fn parse_with_type(content: &str, subtitle_type: &SubtitleType) -> ParsedSubtitle {
    trace!("Parsing subtitle content as {}", subtitle_type);
    match subtitle_type {
        SubtitleType::Srt => ParsedSubtitle::Single(SrtParser::new().parse(content)),
        SubtitleType::Vtt => ParsedSubtitle::Single(VttParser::new().parse(content)),
        SubtitleType::Ass => ParsedSubtitle::Bilingual(AssParser::new().parse(content)),
    }
}
