use itertools::Itertools;
use log::{trace, warn};
use regex::Regex;

use crate::core::subtitles::cue::SubtitleCue;
use crate::core::subtitles::model::BilingualSubtitles;
use crate::core::subtitles::parsers::timecode;

const EVENTS_HEADER: &str = "[Events]";
const SECTION_PREFIX: &str = "[";
const DIALOGUE_PREFIX: &str = "Dialogue:";
const PRIMARY_STYLE: &str = "Default";
const SECONDARY_STYLE: &str = "Secondary";
const TIME_PATTERN: &str = "(\\d+):(\\d{2}):(\\d{2})\\.(\\d{2})";
const OVERRIDE_PATTERN: &str = "\\{[^}]*\\}";
const LINE_BREAK: &str = "\\N";
const HARD_SPACE: &str = "\\h";
const MIN_DIALOGUE_FIELDS: usize = 10;
const START_FIELD: usize = 1;
const END_FIELD: usize = 2;
const STYLE_FIELD: usize = 3;
const TEXT_FIELD: usize = 9;

/// Parses ASS/SSA subtitle files into bilingual cue tracks.
///
/// Dialogue cues within the `[Events]` section are partitioned by their style name,
/// "Default" fills the primary track and "Secondary" fills the secondary track.
/// Cues with any other style are dropped without error.
#[derive(Debug)]
pub struct AssParser {
    time_regex: Regex,
    override_regex: Regex,
}

impl AssParser {
    /// Create a new ass parser instance.
    pub fn new() -> Self {
        Self {
            time_regex: Regex::new(TIME_PATTERN).expect("Time pattern should be valid"),
            override_regex: Regex::new(OVERRIDE_PATTERN).expect("Override pattern should be valid"),
        }
    }

    pub fn parse(&self, content: &str) -> BilingualSubtitles {
        let mut primary: Vec<SubtitleCue> = vec![];
        let mut secondary: Vec<SubtitleCue> = vec![];
        let mut in_events = false;

        for line in content.lines() {
            let line = line.trim();

            if line == EVENTS_HEADER {
                in_events = true;
                continue;
            }
            if line.starts_with(SECTION_PREFIX) {
                in_events = false;
                continue;
            }
            if !in_events || !line.starts_with(DIALOGUE_PREFIX) {
                continue;
            }

            let fields: Vec<&str> = line.split(',').collect();
            if fields.len() < MIN_DIALOGUE_FIELDS {
                trace!("Skipping dialogue line with only {} fields", fields.len());
                continue;
            }

            let start_time = self.parse_time(fields[START_FIELD]);
            let end_time = self.parse_time(fields[END_FIELD]);
            // the cue text may contain commas itself, so the remaining fields are rejoined
            let text = self.clean_text(fields[TEXT_FIELD..].iter().join(",").trim());

            match (start_time, end_time) {
                (Some(start_time), Some(end_time)) => {
                    if text.is_empty() {
                        trace!("Dropping dialogue cue with empty text");
                        continue;
                    }

                    let cue = SubtitleCue::new(start_time, end_time, text);
                    match fields[STYLE_FIELD] {
                        PRIMARY_STYLE => primary.push(cue),
                        SECONDARY_STYLE => secondary.push(cue),
                        style => trace!("Dropping dialogue cue with unmatched style {:?}", style),
                    }
                }
                _ => warn!("Skipping dialogue line with invalid time range {:?}", line),
            }
        }

        BilingualSubtitles::new(primary, secondary)
    }

    /// Parse an `H:MM:SS.cc` time value to seconds.
    /// It returns [None] when the value doesn't match the grammar, never a sentinel `0.0`.
    fn parse_time(&self, value: &str) -> Option<f64> {
        self.time_regex
            .captures(value)
            .map(|captures| timecode::seconds_from_centis_groups(&captures, 1))
    }

    /// Remove override tag groups and translate the ASS escape sequences.
    /// Override groups are stripped in a single non-nested pass.
    fn clean_text(&self, text: &str) -> String {
        self.override_regex
            .replace_all(text, "")
            .replace(LINE_BREAK, "\n")
            .replace(HARD_SPACE, " ")
            .trim()
            .to_string()
    }
}
