//! # chord_chart
//!
//! Extract chord symbols from plain-text song sheets (lyrics interleaved
//! with delimited chord names), infer the most likely major key, and
//! re-express every chord as a key-relative scale degree, so the same song
//! in different keys, or different songs, can be compared degree for
//! degree.
//!
//! Chords are recognized between `>`/`<` delimiters; lines that look like
//! lyrics are skipped. Key inference matches the song's aggregate note
//! usage against the twelve diatonic major scales, and when that comes
//! back with zero or several candidates, a caller-supplied [`KeyPrompt`]
//! settles the question.
//!
//! ## Example
//! ```rust
//! use chord_chart::ChartConverter;
//!
//! fn run() -> Result<(), chord_chart::ChartError> {
//!     let sheet = [
//!         "a song about four chords",
//!         ">C<      >G<      >Am<     >F<",
//!     ];
//!
//!     // This sheet is unambiguously in C major, so the prompt is never
//!     // consulted; a real application would hook up a terminal prompt.
//!     let no_prompt = |_default: Option<&str>| -> Option<String> { None };
//!     let mut converter = ChartConverter::new(no_prompt);
//!
//!     for chord in converter.convert(sheet)? {
//!         println!("{chord}"); // I, V, vi, IV
//!     }
//!     Ok(())
//! }
//! # run().unwrap();
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rust_2018_idioms)]
#![deny(clippy::all)]

/// Whole-chart pipeline and key-relative chord representation.
pub use convert::{to_universal, ChartConverter, UniversalChord};

/// Key inference and disambiguation.
pub use key::{candidate_keys, resolve_key, KeyPrompt};

/// Pitch-class arithmetic and chord-quality resolution.
pub use theory::{
    diatonic_scale, notes_of, pitch_class_of, ChartError, ChordQuality, NoteHistogram, PitchClass,
};

/// Chord-symbol extraction from text.
pub use tokenizer::{parse_lines, ChordToken, Extension};

/// Universal conversion module.
pub mod convert;

/// Key inference module.
pub mod key;

/// Music-theory primitives module.
pub mod theory;

/// Chord tokenization module.
pub mod tokenizer;
