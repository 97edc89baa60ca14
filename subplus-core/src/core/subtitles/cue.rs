use derive_more::Display;

/// A parsed subtitle cue from a subtitle file.
/// Times are expressed in seconds relative to the start of the playback.
#[derive(Debug, Display, Clone, PartialEq)]
#[display("start_time: {}, end_time: {}, text: {}", start_time, end_time, text)]
pub struct SubtitleCue {
    start_time: f64,
    end_time: f64,
    text: String,
}

impl SubtitleCue {
    pub fn new(start_time: f64, end_time: f64, text: String) -> Self {
        Self {
            start_time,
            end_time,
            text,
        }
    }

    /// The time at which the cue becomes active, in seconds.
    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    /// The time at which the cue stops being active, in seconds.
    pub fn end_time(&self) -> f64 {
        self.end_time
    }

    /// The cue text, stripped of markup.
    /// It may contain embedded newlines for multi-line cues.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Verify if the cue is active at the given playback time.
    /// The time interval of a cue is closed on both ends.
    pub fn is_active_at(&self, time: f64) -> bool {
        time >= self.start_time && time <= self.end_time
    }
}

/// Accumulates the data of a single cue while a parser scans through the input.
#[derive(Debug, Clone, PartialEq)]
pub struct SubtitleCueBuilder {
    start_time: f64,
    end_time: f64,
    text: String,
}

impl SubtitleCueBuilder {
    pub fn new() -> Self {
        Self {
            start_time: 0.0,
            end_time: 0.0,
            text: String::new(),
        }
    }

    pub fn start_time(&mut self, start_time: f64) -> &mut Self {
        self.start_time = start_time;
        self
    }

    pub fn end_time(&mut self, end_time: f64) -> &mut Self {
        self.end_time = end_time;
        self
    }

    /// Append a line to the cue text.
    /// Lines are joined with a newline once text is present, a leading newline is never added.
    pub fn append_line(&mut self, line: &str) -> &mut Self {
        if !self.text.is_empty() {
            self.text.push('\n');
        }

        self.text.push_str(line);
        self
    }

    pub fn build(&self) -> SubtitleCue {
        SubtitleCue::new(self.start_time, self.end_time, self.text.clone())
    }
}
