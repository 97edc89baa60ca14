use log::{trace, warn};
use regex::Regex;

use crate::core::subtitles::cue::SubtitleCue;
use crate::core::subtitles::model::SubtitleType;
use crate::core::subtitles::parsers::{timecode, Parser, NEWLINE, TAG_PATTERN};
use crate::core::subtitles::{Result, SubtitleError};

const TIME_SEPARATOR: &str = "-->";
const TIME_PATTERN: &str =
    "(\\d{2}):(\\d{2}):(\\d{2}),(\\d{3})\\s*-->\\s*(\\d{2}):(\\d{2}):(\\d{2}),(\\d{3})";
const BLOCK_PATTERN: &str = "\\n\\s*\\n";
const MIN_BLOCK_LINES: usize = 3;

/// Parses and formats [SubtitleType::Srt] subtitle files.
///
/// The input is handled as blocks separated by blank lines. A block consists of an
/// index line (ignored), a time range line and one or more text lines.
#[derive(Debug)]
pub struct SrtParser {
    time_regex: Regex,
    block_regex: Regex,
    tag_regex: Regex,
}

impl SrtParser {
    /// Create a new srt parser instance.
    pub fn new() -> Self {
        Self {
            time_regex: Regex::new(TIME_PATTERN).expect("Time pattern should be valid"),
            block_regex: Regex::new(BLOCK_PATTERN).expect("Block pattern should be valid"),
            tag_regex: Regex::new(TAG_PATTERN).expect("Tag pattern should be valid"),
        }
    }

    /// Parse a single subtitle block into a cue.
    /// Incomplete blocks and blocks with a malformed time range are dropped.
    fn parse_block(&self, block: &str) -> Option<SubtitleCue> {
        let lines: Vec<&str> = block.trim().lines().collect();

        if lines.len() < MIN_BLOCK_LINES {
            trace!("Skipping incomplete subtitle block {:?}", block);
            return None;
        }

        match self.time_regex.captures(lines[1]) {
            Some(captures) => {
                let start_time = timecode::seconds_from_millis_groups(&captures, 1);
                let end_time = timecode::seconds_from_millis_groups(&captures, 5);
                let text = self
                    .tag_regex
                    .replace_all(lines[2..].join(NEWLINE).as_str(), "")
                    .to_string();

                Some(SubtitleCue::new(start_time, end_time, text))
            }
            None => {
                warn!("Skipping subtitle block with invalid time range {:?}", lines[1]);
                None
            }
        }
    }

    fn convert_time_to_string(seconds: f64) -> String {
        format!("{},000", timecode::time_from_seconds(seconds).format("%H:%M:%S"))
    }
}

impl Parser for SrtParser {
    fn parse(&self, content: &str) -> Vec<SubtitleCue> {
        self.block_regex
            .split(content.trim())
            .filter_map(|block| self.parse_block(block))
            .collect()
    }

    fn convert(&self, cues: &[SubtitleCue]) -> Result<String> {
        if cues.is_empty() {
            return Err(SubtitleError::ConversionFailed(
                SubtitleType::Srt,
                "no cues to convert".to_string(),
            ));
        }

        let mut output = String::new();

        for (index, cue) in cues.iter().enumerate() {
            output.push_str((index + 1).to_string().as_str());
            output.push_str(NEWLINE);
            output.push_str(
                format!(
                    "{} {} {}",
                    Self::convert_time_to_string(cue.start_time()),
                    TIME_SEPARATOR,
                    Self::convert_time_to_string(cue.end_time())
                )
                .as_str(),
            );
            output.push_str(NEWLINE);
            output.push_str(cue.text());
            output.push_str(NEWLINE);
            output.push_str(NEWLINE);
        }

        Ok(output)
    }
}

#[cfg(test)]
mod test {
    use crate::testing::{init_logger, read_test_file_to_string};

    use super::*;

    #[test]
    fn test_parse_single_cue() {
        init_logger();
        let parser = SrtParser::new();
        let expected_result = vec![SubtitleCue::new(1.0, 2.5, "Hello".to_string())];

        let result = parser.parse("1\n00:00:01,000 --> 00:00:02,500\nHello");

        assert_eq!(expected_result, result)
    }

    #[test]
    fn test_parse_multiple_blocks_in_file_order() {
        init_logger();
        let parser = SrtParser::new();
        let expected_result = vec![
            SubtitleCue::new(1.0, 2.5, "Hello".to_string()),
            SubtitleCue::new(3.0, 4.0, "World".to_string()),
        ];

        let result =
            parser.parse("1\n00:00:01,000 --> 00:00:02,500\nHello\n\n2\n00:00:03,000 --> 00:00:04,000\nWorld");

        assert_eq!(expected_result, result)
    }

    #[test]
    fn test_parse_multi_line_text_joined_with_newline() {
        init_logger();
        let parser = SrtParser::new();
        let expected_result = vec![SubtitleCue::new(
            7941.0,
            7942.5,
            "This is the path\nyou've chosen, is it?".to_string(),
        )];

        let result = parser
            .parse("1526\n02:12:21,000 --> 02:12:22,500\nThis is the path\nyou've chosen, is it?");

        assert_eq!(expected_result, result)
    }

    #[test]
    fn test_parse_strips_markup_tags() {
        init_logger();
        let parser = SrtParser::new();

        let result = parser.parse("1\n00:00:01,000 --> 00:00:02,000\n<b>Hello</b> <i>world</i>");

        assert_eq!("Hello world", result[0].text())
    }

    #[test]
    fn test_parse_skips_block_with_invalid_time_range() {
        init_logger();
        let parser = SrtParser::new();
        let expected_result = vec![SubtitleCue::new(3.0, 4.0, "World".to_string())];

        let result =
            parser.parse("1\n00:00:01 --> 00:00:02\nHello\n\n2\n00:00:03,000 --> 00:00:04,000\nWorld");

        assert_eq!(expected_result, result)
    }

    #[test]
    fn test_parse_skips_incomplete_block() {
        init_logger();
        let parser = SrtParser::new();

        let result = parser.parse("1\n00:00:01,000 --> 00:00:02,000");

        assert_eq!(Vec::<SubtitleCue>::new(), result)
    }

    #[test]
    fn test_parse_crlf_line_endings() {
        init_logger();
        let parser = SrtParser::new();
        let expected_result = vec![
            SubtitleCue::new(1.0, 2.0, "Hello".to_string()),
            SubtitleCue::new(3.0, 4.0, "World".to_string()),
        ];

        let result = parser
            .parse("1\r\n00:00:01,000 --> 00:00:02,000\r\nHello\r\n\r\n2\r\n00:00:03,000 --> 00:00:04,000\r\nWorld");

        assert_eq!(expected_result, result)
    }

    #[test]
    fn test_parse_resource_file() {
        init_logger();
        let parser = SrtParser::new();
        let content = read_test_file_to_string("example.srt");
        let expected_result = vec![
            SubtitleCue::new(1.0, 2.5, "Hello".to_string()),
            SubtitleCue::new(3.0, 4.0, "World".to_string()),
        ];

        let result = parser.parse(content.as_str());

        assert_eq!(expected_result, result)
    }

    #[test]
    fn test_convert() {
        init_logger();
        let parser = SrtParser::new();
        let cues = vec![
            SubtitleCue::new(30.0, 48.1, "lorem".to_string()),
            SubtitleCue::new(50.0, 52.0, "ipsum\ndolor".to_string()),
        ];
        let expected_result = "1\n00:00:30,000 --> 00:00:48,000\nlorem\n\n2\n00:00:50,000 --> 00:00:52,000\nipsum\ndolor\n\n".to_string();

        let result = parser.convert(&cues);

        assert_eq!(expected_result, result.expect("Expected the conversion to succeed"))
    }

    #[test]
    fn test_convert_without_cues() {
        init_logger();
        let parser = SrtParser::new();

        let result = parser.convert(&[]);

        match result {
            Err(SubtitleError::ConversionFailed(subtitle_type, _)) => {
                assert_eq!(SubtitleType::Srt, subtitle_type)
            }
            _ => panic!("Expected the conversion to have been rejected"),
        }
    }

    #[test]
    fn test_convert_reparses_with_whole_second_precision() {
        init_logger();
        let parser = SrtParser::new();
        let cues = vec![SubtitleCue::new(1.25, 2.75, "Hello".to_string())];

        let raw = parser.convert(&cues).expect("Expected the conversion to succeed");
        let result = parser.parse(raw.as_str());

        assert_eq!(vec![SubtitleCue::new(1.0, 2.0, "Hello".to_string())], result)
    }
}
