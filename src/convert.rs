//! Universal Converter
//!
//! Re-expresses chords relative to a resolved key, and ties the whole
//! pipeline together: tokenize a chart, accumulate note usage, infer and
//! resolve the key, then convert every chord in source order.

use std::fmt::{self, Display};

use log::debug;

use crate::key::{self, KeyPrompt};
use crate::theory::{self, ChartError, NoteHistogram, PitchClass};
use crate::tokenizer::{self, ChordToken, Extension};

/// Degree names for the seven diatonic scale-degree offsets.
const DEGREE_NAMES: [(u8, &str); 7] = [
    (0, "I"),
    (2, "ii"),
    (4, "iii"),
    (5, "IV"),
    (7, "V"),
    (9, "vi"),
    (11, "vii"),
];

/// A chord re-expressed relative to the resolved key.
///
/// The same progression played in different keys normalizes to the same
/// sequence of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniversalChord {
    /// Semitone distance from the key's tonic to the chord root, in
    /// `[0, 11]`.
    pub degree: u8,
    /// The original chord's extension, carried through unchanged.
    pub extension: Extension,
}

impl UniversalChord {
    /// Roman-numeral name of the degree, for the seven diatonic offsets
    /// (`I`, `ii`, `iii`, `IV`, `V`, `vi`, `vii`).
    ///
    /// Chromatic degrees have no name and yield `None`.
    pub fn degree_name(&self) -> Option<&'static str> {
        DEGREE_NAMES
            .iter()
            .find(|&&(offset, _)| offset == self.degree)
            .map(|&(_, name)| name)
    }
}

impl Display for UniversalChord {
    /// Prints `<degree> <extension>`, naming diatonic degrees with Roman
    /// numerals and falling back to the bare semitone offset for chromatic
    /// ones.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.degree_name() {
            Some(name) => write!(f, "{name}")?,
            None => write!(f, "{}", self.degree)?,
        }
        if self.extension != Extension::None {
            write!(f, " {}", self.extension)?;
        }
        Ok(())
    }
}

/// Re-express `token` relative to `key`.
pub fn to_universal(key: PitchClass, token: &ChordToken) -> Result<UniversalChord, ChartError> {
    let root = theory::pitch_class_of(&token.root)?;
    let degree = PitchClass::new(root.index() as i32 - key.index() as i32).index();
    Ok(UniversalChord {
        degree,
        extension: token.extension.clone(),
    })
}

/// One-shot chart pipeline.
///
/// Owns the [`KeyPrompt`] it consults when key inference is inconclusive;
/// everything else is pure and deterministic, so the same chart with the
/// same prompt answers always converts to the same sequence.
pub struct ChartConverter<P> {
    prompt: P,
}

impl<P> ChartConverter<P>
where
    P: KeyPrompt,
{
    /// Create a converter that consults `prompt` when the key is ambiguous.
    pub fn new(prompt: P) -> ChartConverter<P> {
        ChartConverter { prompt }
    }

    /// Convert a whole chart to universal representation.
    ///
    /// The histogram over every chord's voices is fully accumulated before
    /// key inference runs, since inference needs global knowledge of the
    /// song. Chords come back one per recognized symbol, in source order,
    /// without deduplication.
    pub fn convert<I, S>(&mut self, lines: I) -> Result<Vec<UniversalChord>, ChartError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens = tokenizer::parse_lines(lines);

        let mut histogram = NoteHistogram::new();
        for token in &tokens {
            histogram.track(&theory::notes_of(token)?);
        }

        let candidates = key::candidate_keys(&histogram);
        let key = key::resolve_key(&candidates, &mut self.prompt)?;
        debug!("resolved key {} for {} chords", key.name(), tokens.len());

        tokens.iter().map(|token| to_universal(key, token)).collect()
    }
}
