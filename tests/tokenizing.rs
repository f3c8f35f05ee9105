//! Integration tests for chord-symbol extraction from sheet text.

use chord_chart::{parse_lines, ChordToken, Extension};

fn single_token(line: &str) -> ChordToken {
    let mut tokens = parse_lines([line]);
    assert_eq!(tokens.len(), 1, "expected one chord in {line:?}");
    tokens.remove(0)
}

#[test]
fn standalone_word_a_marks_a_lyric_line() {
    assert!(parse_lines(["a new day"]).is_empty());
    assert!(parse_lines(["got a grip on the wheel"]).is_empty());
    // The heuristic wins even when the line carries a delimited chord.
    assert!(parse_lines(["but >F< got a line"]).is_empty());
}

#[test]
fn delimited_chords_are_extracted_in_order() {
    let tokens = parse_lines(["play >Am< now", ">C<  >G7<"]);
    let roots: Vec<&str> = tokens.iter().map(|t| t.root.as_str()).collect();
    assert_eq!(roots, ["A", "C", "G"]);
    assert!(tokens[0].is_minor);
    assert_eq!(tokens[2].extension, Extension::Seventh);
}

#[test]
fn undelimited_text_is_never_a_chord() {
    assert!(parse_lines(["Am I wrong"]).is_empty());
    assert!(parse_lines(["CAGED system practice"]).is_empty());
}

#[test]
fn root_letter_is_capitalized_and_accidental_kept() {
    assert_eq!(single_token("strum >f#m<").root, "F#");
    assert_eq!(single_token(">bb<").root, "Bb");
}

#[test]
fn minor_marker_and_major_seventh_disentangle() {
    let amaj7 = single_token(">Amaj7<");
    assert!(!amaj7.is_minor);
    assert_eq!(amaj7.extension, Extension::MajorSeventh);

    let am7 = single_token(">Am7<");
    assert!(am7.is_minor);
    assert_eq!(am7.extension, Extension::Seventh);
}

#[test]
fn add_sus_and_slash_bass_are_carried_through() {
    let token = single_token(">Gbmaj7/Bb<");
    assert_eq!(token.root, "Gb");
    assert_eq!(token.extension, Extension::MajorSeventh);
    assert_eq!(token.slash_bass.as_deref(), Some("Bb"));

    let token = single_token(">Csus2<");
    assert_eq!(token.extension, Extension::None);
    assert_eq!(token.add_sus.as_deref(), Some("sus2"));

    let token = single_token(">Dadd9<");
    assert_eq!(token.add_sus.as_deref(), Some("add9"));
}

#[test]
fn other_extensions_are_preserved_verbatim() {
    let token = single_token(">C9<");
    assert_eq!(token.extension, Extension::Other("9".to_string()));
    assert_eq!(token.extension.as_str(), "9");
}

#[test]
fn chord_free_lines_yield_no_tokens() {
    assert!(parse_lines(["", "   ", "chorus:"]).is_empty());
    assert!(parse_lines(Vec::<String>::new()).is_empty());
}
