//! Search session integration harness.
//!
//! # What this covers
//!
//! - **Loading**: documents read from disk keep their file name and bytes;
//!   unreadable paths surface as I/O errors.
//! - **Decoding**: a leading byte order mark is dropped; invalid UTF-8 is
//!   reported with the offending byte offset.
//! - **Line splitting**: `\n`, `\r\n`, a lone `\r` and the Unicode line
//!   separators all end a line; blank and whitespace-only lines never reach
//!   the scanner, so they do not break the Spanish/Greek pairing.
//! - **Validation order**: a missing document is reported before an empty
//!   term, and an empty term before any decode error. A term made only of
//!   combining accents counts as empty.
//! - **Outcomes**: found and not-found outcomes carry the term as typed; a
//!   generated multi-chapter document keeps heading and verse context.
//!
//! # What this does NOT cover
//!
//! - Scanner semantics (see scan_harness)
//! - Output formatting and exit codes (see headless_harness)
//!
//! # Running
//!
//! ```sh
//! cargo test --test session_harness
//! ```

mod common;
use common::*;

use interlinear_core::{Document, Fold, SearchError, SearchOutcome, SearchRequest, Severity};
use pretty_assertions::assert_eq;
use rstest::rstest;

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

#[test]
fn document_from_disk_is_searchable() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_document(dir.path(), "juan.txt", JOHN_1.join("\n"));

    let document = Document::from_path(&path).unwrap();
    assert_eq!(document.name, "juan.txt");

    let outcome = SearchRequest::new(Some(&document), "λογ").run().unwrap();
    let report = outcome.report().unwrap();
    assert_found_words!(report, ["λόγος"]);
    assert_eq!(report.occurrences.len(), 3);
}

#[test]
fn directory_is_not_a_document() {
    let dir = tempfile::tempdir().unwrap();
    let err = Document::from_path(dir.path()).unwrap_err();
    assert!(matches!(err, SearchError::Io { .. }), "{err:?}");
    assert_eq!(err.severity(), Severity::Error);
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

#[test]
fn byte_order_mark_does_not_hide_the_first_heading() {
    let text = format!("\u{feff}{}", BASIC.join("\n"));
    let document = Document::new("bom.txt", text);
    let outcome = SearchRequest::new(Some(&document), "αρχ").run().unwrap();
    let report = outcome.report().unwrap();
    assert_all_headings!(&report.occurrences, Some("Juan 1"));
}

#[test]
fn invalid_utf8_reports_offset() {
    let mut bytes = b"Juan 1\n1 En el principio\n".to_vec();
    let offset = bytes.len();
    bytes.extend_from_slice(&[0xce, 0x20]);

    let document = Document::new("roto.txt", bytes);
    let err = SearchRequest::new(Some(&document), "αρχ").run().unwrap_err();
    match err {
        SearchError::Decode { name, offset: at, .. } => {
            assert_eq!(name, "roto.txt");
            assert_eq!(at, offset);
        }
        other => panic!("expected a decode error, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Line splitting
// ---------------------------------------------------------------------------

#[rstest]
#[case::lf("\n")]
#[case::crlf("\r\n")]
#[case::cr("\r")]
#[case::line_separator("\u{2028}")]
#[case::paragraph_separator("\u{2029}")]
#[case::next_line("\u{85}")]
fn every_line_break_yields_the_same_lines(#[case] newline: &str) {
    let document = Document::new("juan.txt", JOHN_1.join(newline));
    assert_eq!(document.lines().unwrap(), JOHN_1);
}

#[test]
fn crlf_documents_scan_like_lf_documents() {
    let builder = InterlinearBuilder::new()
        .heading("Juan 1")
        .verse("1", "En el principio", "Ἐν ἀρχῇ ἦν ὁ λόγος");
    let lf = builder.document("lf.txt");
    let crlf = InterlinearBuilder::new()
        .heading("Juan 1")
        .verse("1", "En el principio", "Ἐν ἀρχῇ ἦν ὁ λόγος")
        .crlf()
        .document("crlf.txt");

    let a = SearchRequest::new(Some(&lf), "λογ").run().unwrap();
    let b = SearchRequest::new(Some(&crlf), "λογ").run().unwrap();
    assert_eq!(a, b);
}

#[test]
fn blank_lines_do_not_break_verse_pairs() {
    let document = Document::new(
        "juan.txt",
        "Juan 1\n\n\n1 En el principio\n   \t\n1 Ἐν ἀρχῇ ἦν ὁ λόγος\n\n",
    );
    let outcome = SearchRequest::new(Some(&document), "αρχ").run().unwrap();
    let report = outcome.report().unwrap();
    assert_eq!(
        report.occurrences,
        vec![OccurrenceBuilder::new("ἀρχῇ")
            .heading("Juan 1")
            .verse("1")
            .spanish("En el principio")
            .greek("Ἐν ἀρχῇ ἦν ὁ λόγος")
            .build()]
    );
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    let document = Document::new("juan.txt", "  Juan 1  \n\t1 En el principio\n 1 Ἐν ἀρχῇ \n");
    assert_eq!(
        document.lines().unwrap(),
        vec!["Juan 1", "1 En el principio", "1 Ἐν ἀρχῇ"]
    );
}

// ---------------------------------------------------------------------------
// Validation order
// ---------------------------------------------------------------------------

#[rstest]
#[case::nothing(None, "", "MissingFile")]
#[case::term_only(None, "σπ", "MissingFile")]
#[case::empty_term(Some(BASIC.join("\n").into_bytes()), "", "EmptyTerm")]
#[case::empty_term_undecodable(Some(vec![0xff, 0xfe, 0xfd]), "", "EmptyTerm")]
#[case::accents_only(Some(BASIC.join("\n").into_bytes()), "\u{0301}", "EmptyTerm")]
#[case::breathing_and_circumflex(Some(BASIC.join("\n").into_bytes()), "\u{0313}\u{0342}", "EmptyTerm")]
#[case::undecodable(Some(vec![0xff, 0xfe, 0xfd]), "σπ", "Decode")]
fn rejections_are_reported_in_order(
    #[case] bytes: Option<Vec<u8>>,
    #[case] term: &str,
    #[case] expected: &str,
) {
    let document = bytes.map(|b| Document::new("doc.txt", b));
    let err = SearchRequest::new(document.as_ref(), term).run().unwrap_err();
    let kind = match err {
        SearchError::MissingFile => "MissingFile",
        SearchError::EmptyTerm => "EmptyTerm",
        SearchError::Decode { .. } => "Decode",
        SearchError::Io { .. } => "Io",
    };
    assert_eq!(kind, expected);
}

#[test]
fn whitespace_term_is_searched_as_typed() {
    let document = Document::new("juan.txt", BASIC.join("\n"));
    let outcome = SearchRequest::new(Some(&document), " ").run().unwrap();
    assert_eq!(outcome, SearchOutcome::NotFound { term: " ".to_string() });
}

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

#[test]
fn strict_mode_needs_matching_breathings() {
    let document = Document::new("juan.txt", JOHN_1.join("\n"));

    let loose = SearchRequest::new(Some(&document), "εν").run().unwrap();
    assert!(loose.report().unwrap().found_words.iter().any(|w| w == "ἐν"));

    let strict = SearchRequest::new(Some(&document), "ἐν").fold(Fold::Case).run().unwrap();
    let words = &strict.report().unwrap().found_words;
    assert!(words.iter().any(|w| w == "ἐν"));
    assert!(!words.iter().any(|w| w == "ἐγένετο"));
}

#[test]
fn large_document_keeps_chapter_context() {
    let document = Document::new("grande.txt", synthetic_corpus(2_000).join("\n"));
    let outcome = SearchRequest::new(Some(&document), "φαιν").run().unwrap();
    let report = outcome.report().unwrap();
    assert_found_words!(report, ["φαίνει"]);
    assert_eq!(report.occurrences.len(), 400);

    let first = &report.occurrences[0];
    assert_eq!((first.heading.as_deref(), first.verse.as_str()), (Some("Capítulo 1"), "5"));
    assert_eq!(first.greek_text, "καὶ τὸ φῶς ἐν τῇ σκοτίᾳ φαίνει");

    let last = &report.occurrences[399];
    assert_eq!((last.heading.as_deref(), last.verse.as_str()), (Some("Capítulo 100"), "20"));
}

#[test]
fn empty_document_finds_nothing() {
    let document = Document::new("vacío.txt", "");
    let outcome = SearchRequest::new(Some(&document), "σπ").run().unwrap();
    assert_eq!(outcome, SearchOutcome::NotFound { term: "σπ".to_string() });
}
