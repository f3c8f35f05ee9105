//! Chord Tokenizer
//!
//! Scans lines of a lyric/tab sheet and extracts chord symbols in the order
//! they appear: line order, left to right within a line.
//!
//! Chord symbols are only recognized between `>`/`<` delimiters, so a chord
//! name embedded inside an ordinary word is never picked up. Lines that look
//! like lyrics are skipped wholesale before any chord scanning happens.

use std::fmt::Display;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

lazy_static! {
    // Root letter, optional accidental, optional minor marker, optional
    // extension, optional add/sus marker, optional slash bass.
    static ref CHORD_RE: Regex = Regex::new(
        r">([A-Ga-g][b#]?)(m)?((?:maj)?[0-9])?(sus[0-9]|add[0-9])?(/[A-Ga-g][b#]?)?<",
    )
    .unwrap();

    // Lyric-line heuristic: the standalone word "a" at the start of a line
    // or between two words. Such lines are text, and scanning them would
    // misread the word "a" as the note A.
    static ref TEXT_LINE_RE: Regex = Regex::new(r"(^[aA] \w|\w a \w)").unwrap();
}

/// Extension suffix of a chord symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Extension {
    /// Plain triad, no extension.
    None,
    /// Dominant/minor seventh shorthand (`7`).
    Seventh,
    /// Major seventh (`maj7`).
    MajorSeventh,
    /// Any other matched extension text (e.g. `9`, `maj9`); carried through
    /// unchanged but ignored by pitch-class computation.
    Other(String),
}

impl Extension {
    fn from_match(text: &str) -> Extension {
        match text {
            "7" => Extension::Seventh,
            "maj7" => Extension::MajorSeventh,
            other => Extension::Other(other.to_string()),
        }
    }

    /// The extension as it appeared in the source text; empty for
    /// [`Extension::None`].
    pub fn as_str(&self) -> &str {
        match self {
            Extension::None => "",
            Extension::Seventh => "7",
            Extension::MajorSeventh => "maj7",
            Extension::Other(text) => text,
        }
    }
}

impl Display for Extension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single chord symbol recognized in the source text.
///
/// Created once per occurrence by [`parse_lines`] and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordToken {
    /// Root note spelling with the letter capitalized, e.g. `"A"`, `"Bb"`,
    /// `"F#"`.
    pub root: String,
    /// Whether the symbol carries the minor marker `m`.
    pub is_minor: bool,
    /// Extension suffix, if any.
    pub extension: Extension,
    /// `sus`/`add` marker (e.g. `"sus2"`), carried through untouched and
    /// ignored by theory computation.
    pub add_sus: Option<String>,
    /// Slash bass note spelling (without the slash), carried through
    /// untouched and ignored by theory computation.
    pub slash_bass: Option<String>,
}

/// Scan `lines` for chord symbols and return them in source order.
///
/// A line matching the lyric heuristic contributes no tokens even if it
/// contains delimited chords; a chord-free line is not an error.
pub fn parse_lines<I, S>(lines: I) -> Vec<ChordToken>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tokens = Vec::new();
    for line in lines {
        let line = line.as_ref();
        if TEXT_LINE_RE.is_match(line) {
            continue;
        }
        for caps in CHORD_RE.captures_iter(line) {
            let (letter, accidental) = caps[1].split_at(1);
            tokens.push(ChordToken {
                root: format!("{}{}", letter.to_ascii_uppercase(), accidental),
                is_minor: caps.get(2).is_some(),
                extension: caps
                    .get(3)
                    .map_or(Extension::None, |m| Extension::from_match(m.as_str())),
                add_sus: caps.get(4).map(|m| m.as_str().to_string()),
                slash_bass: caps
                    .get(5)
                    .map(|m| m.as_str().trim_start_matches('/').to_string()),
            });
        }
    }
    debug!("tokenized {} chord symbols", tokens.len());
    tokens
}
