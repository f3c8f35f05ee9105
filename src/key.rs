//! Key inference and disambiguation.
//!
//! A key is the pitch class of the tonic of the major scale that best
//! explains a song's chords. Inference is set arithmetic over the whole
//! song's note usage; when it comes back with zero or several candidates,
//! an injected prompt settles the question.

use log::debug;

use crate::theory::{self, ChartError, NoteHistogram, PitchClass, SCALES, SEMITONES};

/// Capability to ask the user to choose a key when inference is
/// inconclusive.
///
/// Implemented by whatever the caller wants to stand between the library
/// and a human: a terminal prompt in an application, a scripted fake in
/// tests. A blanket impl covers plain closures.
pub trait KeyPrompt {
    /// Ask for a key, suggesting `default` when one is given.
    ///
    /// Return the answer as a note spelling. `None` or an empty string
    /// means the user gave no answer and accepts the suggestion, if any.
    fn ask_key(&mut self, default: Option<&str>) -> Option<String>;
}

impl<F> KeyPrompt for F
where
    F: FnMut(Option<&str>) -> Option<String>,
{
    fn ask_key(&mut self, default: Option<&str>) -> Option<String> {
        self(default)
    }
}

/// Roots of every major scale whose pitch-class set covers all pitch
/// classes used by the song, in increasing pitch-class order.
///
/// The list may be empty (no diatonic explanation), a singleton (the key is
/// unambiguous), or longer (the song's vocabulary fits several keys, e.g.
/// relative major/minor pairs). An all-zero histogram is covered by every
/// scale, so all twelve roots come back.
pub fn candidate_keys(histogram: &NoteHistogram) -> Vec<PitchClass> {
    let used = histogram.used_mask();
    let candidates: Vec<PitchClass> = (0..SEMITONES)
        .filter(|&root| SCALES[root] & used == used)
        .map(|root| PitchClass::new(root as i32))
        .collect();
    debug!(
        "{} candidate keys for {} used pitch classes",
        candidates.len(),
        used.count_ones()
    );
    candidates
}

/// Resolve exactly one key from the inference candidates.
///
/// A single candidate is returned directly and the prompt is never
/// invoked. With several candidates the prompt is asked with the lowest
/// pitch-class candidate's name as the suggested default; with none it is
/// asked without a suggestion. An empty or absent answer falls back to the
/// suggestion, and when no suggestion applies either, the key stays
/// unresolved.
pub fn resolve_key<P>(candidates: &[PitchClass], prompt: &mut P) -> Result<PitchClass, ChartError>
where
    P: KeyPrompt,
{
    match candidates {
        [only] => Ok(*only),
        [] => answer_to_key(prompt.ask_key(None), None),
        [first, ..] => {
            let default = first.name();
            answer_to_key(prompt.ask_key(Some(default)), Some(default))
        }
    }
}

fn answer_to_key(answer: Option<String>, default: Option<&str>) -> Result<PitchClass, ChartError> {
    let answer = answer.filter(|text| !text.is_empty());
    match answer.as_deref().or(default) {
        Some(name) => theory::pitch_class_of(name),
        None => Err(ChartError::KeyUnresolved),
    }
}
