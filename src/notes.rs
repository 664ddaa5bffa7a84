//! Floating music-note decoration behind the page.

use std::{ops::Range, rc::Rc};

pub const NOTE_COUNT: usize = 20;

pub const LEFT_PERCENT_RANGE: Range<f64> = 0.0..100.0;
pub const SIZE_PX_RANGE: Range<f64> = 12.0..28.0;
pub const DURATION_SECS_RANGE: Range<f64> = 14.0..28.0;
pub const DELAY_SECS_RANGE: Range<f64> = 0.0..12.0;
pub const OPACITY_RANGE: Range<f64> = 0.05..0.18;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    EighthNote,
    BeamedNotes,
    MusicalNote,
}

impl Glyph {
    pub const ALL: [Glyph; 3] = [Self::EighthNote, Self::BeamedNotes, Self::MusicalNote];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::EighthNote => "♪",
            Self::BeamedNotes => "♫",
            Self::MusicalNote => "🎵",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoteSpec {
    pub left_percent: f64,
    pub size_px: f64,
    pub duration_secs: f64,
    pub delay_secs: f64,
    pub glyph: Glyph,
    pub opacity: f64,
}

impl NoteSpec {
    pub fn random(rng: &mut fastrand::Rng) -> Self {
        Self {
            left_percent: sample(rng, LEFT_PERCENT_RANGE),
            size_px: sample(rng, SIZE_PX_RANGE),
            duration_secs: sample(rng, DURATION_SECS_RANGE),
            delay_secs: sample(rng, DELAY_SECS_RANGE),
            glyph: Glyph::ALL[rng.usize(..Glyph::ALL.len())],
            opacity: sample(rng, OPACITY_RANGE),
        }
    }

    /// Inline style for the note's `<span>`; `floatUp` lives in the stylesheet.
    pub fn style(&self) -> String {
        format!(
            "left: {}%; bottom: -10vh; font-size: {}px; opacity: {}; animation: floatUp {}s linear {}s infinite;",
            self.left_percent, self.size_px, self.opacity, self.duration_secs, self.delay_secs
        )
    }
}

pub fn generate_notes(rng: &mut fastrand::Rng) -> Vec<NoteSpec> {
    let notes: Vec<NoteSpec> = (0..NOTE_COUNT).map(|_| NoteSpec::random(rng)).collect();
    tracing::debug!(count = notes.len(), "generated background notes");
    notes
}

/// One mount's worth of notes. Generated once; clones share the same set, so
/// re-rendering from a held field never draws new values.
#[derive(Clone, Debug, PartialEq)]
pub struct NoteField {
    notes: Rc<[NoteSpec]>,
}

impl NoteField {
    pub fn generate(rng: &mut fastrand::Rng) -> Self {
        Self {
            notes: generate_notes(rng).into(),
        }
    }

    pub fn notes(&self) -> &[NoteSpec] {
        &self.notes
    }
}

fn sample(rng: &mut fastrand::Rng, range: Range<f64>) -> f64 {
    let value = range.start + rng.f64() * (range.end - range.start);
    // Rounding can land exactly on the open end.
    if value < range.end {
        value
    } else {
        range.start
    }
}
