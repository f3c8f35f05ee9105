//! Pitch classes, chord qualities, and diatonic scales.
//!
//! Everything here is pure arithmetic on semitone indices with A = 0. The
//! twelve diatonic major-scale sets are built once at compile time and
//! shared read-only by the rest of the crate.

use thiserror::Error;

use crate::tokenizer::{ChordToken, Extension};

/// Number of pitch classes per octave.
pub(crate) const SEMITONES: usize = 12;

/// Canonical note-name table, A = 0.
///
/// Enharmonic spellings (`Bb`/`A#`, `Db`/`C#`, ...) intentionally share a
/// pitch class; the mapping is many-to-one and must stay exactly as listed.
const NOTE_NAMES: &[(&str, u8)] = &[
    ("A", 0),
    ("A#", 1),
    ("Bb", 1),
    ("B", 2),
    ("B#", 3),
    ("Cb", 2),
    ("C", 3),
    ("C#", 4),
    ("Db", 4),
    ("D", 5),
    ("D#", 6),
    ("Eb", 6),
    ("E", 7),
    ("E#", 8),
    ("Fb", 7),
    ("F", 8),
    ("F#", 9),
    ("Gb", 9),
    ("G", 10),
    ("G#", 11),
    ("Ab", 11),
];

/// Major-scale interval pattern: whole-whole-half-whole-whole-whole-half.
const MAJOR_SCALE_STEPS: [u8; 7] = [2, 2, 1, 2, 2, 2, 1];

/// Pitch-class bitmasks of the twelve diatonic major scales, indexed by
/// root.
pub(crate) const SCALES: [u16; SEMITONES] = make_scales();

const fn make_scales() -> [u16; SEMITONES] {
    let mut scales = [0u16; SEMITONES];
    let mut root = 0;
    while root < SEMITONES {
        let mut mask = 1u16 << root;
        let mut note = root;
        let mut step = 0;
        while step < MAJOR_SCALE_STEPS.len() {
            note = (note + MAJOR_SCALE_STEPS[step] as usize) % SEMITONES;
            mask |= 1 << note;
            step += 1;
        }
        scales[root] = mask;
        root += 1;
    }
    scales
}

/// Errors raised while normalizing a chart.
#[derive(Debug, Error)]
pub enum ChartError {
    /// A note spelling fell outside the canonical twelve-name table.
    #[error("unknown note name `{0}`")]
    UnknownNoteName(String),

    /// No diatonic key fit the chart and the prompt produced no usable
    /// answer. Fatal for the chart: nothing can be converted without a key.
    #[error("no key could be resolved")]
    KeyUnresolved,
}

/// One of the twelve pitch classes, indexed with A = 0.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Wrap a semitone index (possibly negative) into `[0, 11]`.
    pub const fn new(semitone: i32) -> PitchClass {
        PitchClass(((semitone % 12) + 12) as u8 % 12)
    }

    /// Semitone index in `[0, 11]`.
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Canonical sharp-preferring spelling, e.g. `"A#"` for pitch class 1.
    pub const fn name(self) -> &'static str {
        match self.0 {
            0 => "A",
            1 => "A#",
            2 => "B",
            3 => "C",
            4 => "C#",
            5 => "D",
            6 => "D#",
            7 => "E",
            8 => "F",
            9 => "F#",
            10 => "G",
            _ => "G#",
        }
    }
}

/// Resolve a note spelling to its pitch class.
pub fn pitch_class_of(name: &str) -> Result<PitchClass, ChartError> {
    NOTE_NAMES
        .iter()
        .find(|&&(spelling, _)| spelling == name)
        .map(|&(_, semitone)| PitchClass(semitone))
        .ok_or_else(|| ChartError::UnknownNoteName(name.to_string()))
}

/// The seven pitch classes of the major scale rooted at `root`.
pub fn diatonic_scale(root: PitchClass) -> [PitchClass; 7] {
    let mut notes = [root; 7];
    let mut semitone = root.index() as usize;
    for (slot, &step) in notes[1..].iter_mut().zip(&MAJOR_SCALE_STEPS) {
        semitone = (semitone + step as usize) % SEMITONES;
        *slot = PitchClass(semitone as u8);
    }
    notes
}

/// Interval offsets from the root that define a chord's sound, independent
/// of which root it is played on.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ChordQuality {
    /// Offset of the third: 4 major, 3 minor.
    pub third: u8,
    /// Offset of the upper voice: 7 (the fifth) for plain triads, 11 for a
    /// major seventh, 10 for a dominant/minor seventh.
    pub upper: u8,
}

impl ChordQuality {
    /// Derive the quality from a token's minor marker and extension.
    ///
    /// The minor marker lowers the third and the extension replaces the
    /// upper voice; the two adjustments are independent, so `m` and `7`
    /// together yield (3, 10).
    pub fn of(is_minor: bool, extension: &Extension) -> ChordQuality {
        let third = if is_minor { 3 } else { 4 };
        let upper = match extension {
            Extension::MajorSeventh => 11,
            Extension::Seventh => 10,
            _ => 7,
        };
        ChordQuality { third, upper }
    }
}

/// Split a chord token into the absolute semitone positions of its three
/// voices: root, third, and fifth or seventh.
///
/// Positions are not reduced modulo 12; reduction happens when they are
/// recorded in a [`NoteHistogram`].
pub fn notes_of(token: &ChordToken) -> Result<[u8; 3], ChartError> {
    let root = pitch_class_of(&token.root)?.index();
    let quality = ChordQuality::of(token.is_minor, &token.extension);
    Ok([root, root + quality.third, root + quality.upper])
}

/// Per-pitch-class occurrence counts accumulated over a whole song.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteHistogram {
    counts: [u32; SEMITONES],
}

impl NoteHistogram {
    /// An all-zero histogram.
    pub fn new() -> NoteHistogram {
        NoteHistogram::default()
    }

    /// Record every voice of a chord, reduced to its pitch class.
    pub fn track(&mut self, notes: &[u8]) {
        for &note in notes {
            self.counts[note as usize % SEMITONES] += 1;
        }
    }

    /// Occurrence count for one pitch class.
    pub fn count(&self, pitch_class: PitchClass) -> u32 {
        self.counts[pitch_class.index() as usize]
    }

    /// Bitmask over the pitch classes with a nonzero count.
    pub(crate) fn used_mask(&self) -> u16 {
        let mut mask = 0u16;
        for (semitone, &count) in self.counts.iter().enumerate() {
            if count > 0 {
                mask |= 1 << semitone;
            }
        }
        mask
    }

    /// The pitch classes with a nonzero count, in increasing index order.
    pub fn used(&self) -> impl Iterator<Item = PitchClass> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(semitone, _)| PitchClass(semitone as u8))
    }
}
