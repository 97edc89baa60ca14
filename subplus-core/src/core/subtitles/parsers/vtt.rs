use log::trace;
use regex::Regex;

use crate::core::subtitles::cue::{SubtitleCue, SubtitleCueBuilder};
use crate::core::subtitles::model::SubtitleType;
use crate::core::subtitles::parsers::{timecode, Parser, NEWLINE, TAG_PATTERN};
use crate::core::subtitles::{Result, SubtitleError};

const HEADER: &str = "WEBVTT";
const TIME_INDICATOR: &str = "-->";
const TIME_PATTERN: &str =
    "(\\d{2}):(\\d{2}):(\\d{2})\\.(\\d{3})\\s*-->\\s*(\\d{2}):(\\d{2}):(\\d{2})\\.(\\d{3})";

/// Parses and formats [SubtitleType::Vtt] subtitle files.
///
/// The input is handled line by line instead of in blocks, as cue bodies may be preceded
/// by identifier lines and interleaved with cue setting lines. A time range line starts a
/// new pending cue and finalizes the previous one, any other non-blank line is appended
/// to the pending cue text.
#[derive(Debug)]
pub struct VttParser {
    time_regex: Regex,
    tag_regex: Regex,
}

impl VttParser {
    /// Create a new vtt parser instance.
    pub fn new() -> Self {
        Self {
            time_regex: Regex::new(TIME_PATTERN).expect("Time pattern should be valid"),
            tag_regex: Regex::new(TAG_PATTERN).expect("Tag pattern should be valid"),
        }
    }

    fn convert_time_to_string(seconds: f64) -> String {
        format!("{}.000", timecode::time_from_seconds(seconds).format("%H:%M:%S"))
    }
}

impl Parser for VttParser {
    fn parse(&self, content: &str) -> Vec<SubtitleCue> {
        let mut cues: Vec<SubtitleCue> = vec![];
        let mut pending: Option<SubtitleCueBuilder> = None;

        for line in content.lines() {
            let line = line.trim();

            if line == HEADER || line.is_empty() {
                continue;
            }

            if let Some(captures) = self.time_regex.captures(line) {
                if let Some(builder) = pending.take() {
                    cues.push(builder.build());
                }

                let mut builder = SubtitleCueBuilder::new();
                builder
                    .start_time(timecode::seconds_from_millis_groups(&captures, 1))
                    .end_time(timecode::seconds_from_millis_groups(&captures, 5));
                pending = Some(builder);
            } else if let Some(builder) = pending.as_mut() {
                builder.append_line(self.tag_regex.replace_all(line, "").as_ref());
            } else {
                trace!("Ignoring line outside of a cue {:?}", line);
            }
        }

        if let Some(builder) = pending.take() {
            cues.push(builder.build());
        }

        cues
    }

    fn convert(&self, cues: &[SubtitleCue]) -> Result<String> {
        if cues.is_empty() {
            return Err(SubtitleError::ConversionFailed(
                SubtitleType::Vtt,
                "no cues to convert".to_string(),
            ));
        }

        let mut output = format!("{}\n\n", HEADER);

        for cue in cues.iter() {
            output.push_str(
                format!(
                    "{} {} {}",
                    Self::convert_time_to_string(cue.start_time()),
                    TIME_INDICATOR,
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
        let parser = VttParser::new();
        let expected_result = vec![SubtitleCue::new(1.0, 2.0, "Hi there".to_string())];

        let result = parser.parse("WEBVTT\n\n00:00:01.000 --> 00:00:02.000\nHi there");

        assert_eq!(expected_result, result)
    }

    #[test]
    fn test_parse_multi_line_text_joined_with_newline() {
        init_logger();
        let parser = VttParser::new();
        let expected_result = vec![SubtitleCue::new(1.0, 2.0, "Hi there\nGeneral Kenobi".to_string())];

        let result = parser.parse("WEBVTT\n\n00:00:01.000 --> 00:00:02.000\nHi there\nGeneral Kenobi");

        assert_eq!(expected_result, result)
    }

    #[test]
    fn test_parse_identifier_lines_are_ignored() {
        init_logger();
        let parser = VttParser::new();
        let expected_result = vec![
            SubtitleCue::new(1.0, 2.0, "Hello".to_string()),
            SubtitleCue::new(3.0, 4.0, "World".to_string()),
        ];

        let result = parser.parse(
            "WEBVTT\n\nintro\n00:00:01.000 --> 00:00:02.000\nHello\n\noutro\n00:00:03.000 --> 00:00:04.000\nWorld",
        );

        assert_eq!(expected_result, result)
    }

    #[test]
    fn test_parse_cue_settings_after_time_range_are_ignored() {
        init_logger();
        let parser = VttParser::new();
        let expected_result = vec![SubtitleCue::new(1.0, 2.0, "Hello".to_string())];

        let result =
            parser.parse("WEBVTT\n\n00:00:01.000 --> 00:00:02.000 position:10%,line-left\nHello");

        assert_eq!(expected_result, result)
    }

    #[test]
    fn test_parse_finalizes_pending_cue_at_end_of_input() {
        init_logger();
        let parser = VttParser::new();

        let result = parser.parse("WEBVTT\n\n00:00:01.000 --> 00:00:02.000");

        assert_eq!(vec![SubtitleCue::new(1.0, 2.0, "".to_string())], result)
    }

    #[test]
    fn test_parse_strips_markup_tags() {
        init_logger();
        let parser = VttParser::new();

        let result =
            parser.parse("WEBVTT\n\n00:00:01.000 --> 00:00:02.000\n<v Roger>Hello <i>world</i>");

        assert_eq!("Hello world", result[0].text())
    }

    #[test]
    fn test_parse_srt_time_grammar_is_not_accepted() {
        init_logger();
        let parser = VttParser::new();

        let result = parser.parse("WEBVTT\n\n00:00:01,000 --> 00:00:02,000\nHello");

        assert_eq!(Vec::<SubtitleCue>::new(), result)
    }

    #[test]
    fn test_parse_resource_file() {
        init_logger();
        let parser = VttParser::new();
        let content = read_test_file_to_string("example.vtt");
        let expected_result = vec![
            SubtitleCue::new(1.0, 2.0, "Hi there".to_string()),
            SubtitleCue::new(3.5, 5.0, "Second line one\nSecond line two".to_string()),
        ];

        let result = parser.parse(content.as_str());

        assert_eq!(expected_result, result)
    }

    #[test]
    fn test_convert() {
        init_logger();
        let parser = VttParser::new();
        let cues = vec![SubtitleCue::new(30.0, 48.1, "lorem\nipsum".to_string())];
        let expected_result =
            "WEBVTT\n\n00:00:30.000 --> 00:00:48.000\nlorem\nipsum\n\n".to_string();

        let result = parser.convert(&cues);

        assert_eq!(expected_result, result.expect("Expected the conversion to succeed"))
    }

    #[test]
    fn test_convert_without_cues() {
        init_logger();
        let parser = VttParser::new();

        let result = parser.convert(&[]);

        match result {
            Err(SubtitleError::ConversionFailed(subtitle_type, _)) => {
                assert_eq!(SubtitleType::Vtt, subtitle_type)
            }
            _ => panic!("Expected the conversion to have been rejected"),
        }
    }
}
