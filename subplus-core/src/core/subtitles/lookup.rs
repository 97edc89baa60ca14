use log::trace;

use crate::core::subtitles::cue::SubtitleCue;
use crate::core::subtitles::model::BilingualSubtitles;

/// Find the cue which is active at the given playback time.
///
/// A cue is active when the time lies within its closed `[start_time, end_time]` interval.
/// When multiple cues overlap the same time, the first one in track order wins.
/// Tracks are not guaranteed to be sorted by time, so the scan is linear.
pub fn find_active_cue(time: f64, cues: &[SubtitleCue]) -> Option<&SubtitleCue> {
    cues.iter().find(|cue| cue.is_active_at(time))
}

/// The loaded subtitle tracks of a playback session.
///
/// The set holds up to two language tracks plus a legacy single-track fallback.
/// Tracks are replaced wholesale on reload and are never validated or reordered.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubtitleSet {
    primary: Vec<SubtitleCue>,
    secondary: Vec<SubtitleCue>,
    fallback: Vec<SubtitleCue>,
}

impl SubtitleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the primary language track.
    pub fn update_primary(&mut self, cues: Vec<SubtitleCue>) {
        trace!("Replacing primary track with {} cues", cues.len());
        self.primary = cues;
    }

    /// Replace the secondary language track.
    pub fn update_secondary(&mut self, cues: Vec<SubtitleCue>) {
        trace!("Replacing secondary track with {} cues", cues.len());
        self.secondary = cues;
    }

    /// Replace the legacy single track.
    /// This track is only queried when no language track is loaded.
    pub fn update_fallback(&mut self, cues: Vec<SubtitleCue>) {
        trace!("Replacing fallback track with {} cues", cues.len());
        self.fallback = cues;
    }

    /// Replace both language tracks from a parsed bilingual file.
    pub fn update_bilingual(&mut self, subtitles: BilingualSubtitles) {
        let (primary, secondary) = subtitles.into_tracks();
        self.update_primary(primary);
        self.update_secondary(secondary);
    }

    /// Remove all loaded tracks from the set.
    pub fn clear(&mut self) {
        trace!("Clearing all subtitle tracks");
        self.primary.clear();
        self.secondary.clear();
        self.fallback.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.secondary.is_empty() && self.fallback.is_empty()
    }

    /// Resolve the cues which are active at the given playback time.
    ///
    /// The primary and secondary tracks are queried independently at the same time value.
    /// When both language tracks are empty, the fallback track is queried instead and its
    /// result is reported as the secondary language.
    pub fn active_at(&self, time: f64) -> ActiveCues<'_> {
        let mut primary = None;
        let mut secondary = None;

        if !self.primary.is_empty() {
            primary = find_active_cue(time, &self.primary);
        }
        if !self.secondary.is_empty() {
            secondary = find_active_cue(time, &self.secondary);
        }
        if self.primary.is_empty() && self.secondary.is_empty() && !self.fallback.is_empty() {
            secondary = find_active_cue(time, &self.fallback);
        }

        ActiveCues { primary, secondary }
    }
}

/// The cues which are active at a single playback time.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveCues<'a> {
    primary: Option<&'a SubtitleCue>,
    secondary: Option<&'a SubtitleCue>,
}

impl<'a> ActiveCues<'a> {
    /// The active cue of the primary language track.
    pub fn primary(&self) -> Option<&'a SubtitleCue> {
        self.primary
    }

    /// The active cue of the secondary language track.
    pub fn secondary(&self) -> Option<&'a SubtitleCue> {
        self.secondary
    }

    /// Verify if no cue is active in any track.
    pub fn is_empty(&self) -> bool {
        self.primary.is_none() && self.secondary.is_none()
    }
}
