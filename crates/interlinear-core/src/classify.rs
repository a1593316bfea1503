//! Line classification: tells section headings and verse lines apart.
//!
//! Two shapes are recognised on a trimmed line:
//!
//! - **Heading**: digit-free text, a whitespace character, then a trailing
//!   run of digits (`"Juan 1"`, `"San Mateo 12"`).
//! - **Verse**: a leading run of digits, exactly one whitespace character,
//!   then the verse text (`"3 Todas las cosas por él fueron hechas"`).
//!
//! Anything else is [`LineKind::Other`]. Digits are ASCII `0-9` only, so a
//! verse numbered with other Unicode decimal digits (`"١ ..."`, `"１ ..."`)
//! is not a verse and a heading may contain them; whitespace is anything
//! `char::is_whitespace` accepts.

/// A verse line split into its number and text. Both borrow from the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verse<'a> {
    pub number: &'a str,
    pub text: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Heading,
    Verse(Verse<'a>),
    Other,
}

/// Classify a line. Surrounding whitespace is ignored.
///
/// Heading wins over verse; a line can never be both because a heading may
/// not start with a digit.
pub fn classify(line: &str) -> LineKind<'_> {
    let line = line.trim();
    if is_heading(line) {
        LineKind::Heading
    } else if let Some(verse) = parse_verse(line) {
        LineKind::Verse(verse)
    } else {
        LineKind::Other
    }
}

/// `true` when the whole line is digit-free text, one whitespace character
/// and a trailing digit run.
///
/// The text before the separator may itself contain whitespace, including
/// trailing whitespace, so `"Juan  1"` is still a heading.
pub fn is_heading(line: &str) -> bool {
    let line = line.trim();
    let prefix = line.trim_end_matches(|c: char| c.is_ascii_digit());
    if prefix.len() == line.len() {
        return false;
    }

    let mut chars = prefix.chars();
    match chars.next_back() {
        Some(c) if c.is_whitespace() => {}
        _ => return false,
    }
    let label = chars.as_str();
    !label.is_empty() && !label.chars().any(|c| c.is_ascii_digit())
}

/// Split a verse line into its number and text.
///
/// Returns `None` unless the line starts with a digit run followed by one
/// whitespace character and at least one more character.
pub fn parse_verse(line: &str) -> Option<Verse<'_>> {
    let line = line.trim();
    let digits = line
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(line.len());
    if digits == 0 {
        return None;
    }

    let (number, rest) = line.split_at(digits);
    let mut chars = rest.chars();
    match chars.next() {
        Some(c) if c.is_whitespace() => {}
        _ => return None,
    }
    let text = chars.as_str();
    if text.is_empty() {
        return None;
    }
    Some(Verse { number, text })
}

/// Remove `number` (and the whitespace after it) from the start of a Greek
/// line, but only when the line repeats exactly that verse number.
///
/// `"10 ..."` is left alone for verse `"1"`: the number must be followed by
/// a non-digit.
pub fn strip_verse_number<'a>(greek: &'a str, number: &str) -> &'a str {
    match greek.strip_prefix(number) {
        Some(rest) if !rest.starts_with(|c: char| c.is_ascii_digit()) => rest.trim_start(),
        _ => greek,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::book_and_chapter("Juan 1")]
    #[case::two_word_label("San Mateo 12")]
    #[case::double_space("Juan  3")]
    #[case::greek_label("ΚΑΤΑ ΙΩΑΝΝΗΝ 1")]
    #[case::surrounding_whitespace("  Hechos 2  ")]
    fn headings(#[case] line: &str) {
        assert!(is_heading(line), "{line:?} should be a heading");
        assert_eq!(classify(line), LineKind::Heading);
    }

    #[rstest]
    #[case::leading_digit("1 Corintios 3")]
    #[case::no_number("Prólogo")]
    #[case::no_separator("Juan1")]
    #[case::digits_in_label("Juan 3 16")]
    #[case::only_digits("12")]
    #[case::separator_only(" 12")]
    #[case::trailing_text("Juan 1a")]
    fn not_headings(#[case] line: &str) {
        assert!(!is_heading(line), "{line:?} should not be a heading");
    }

    #[rstest]
    #[case::arabic_indic("١ En el principio")]
    #[case::fullwidth("１ En el principio")]
    fn non_ascii_digits_are_not_verse_numbers(#[case] line: &str) {
        assert_eq!(parse_verse(line), None);
        assert_eq!(classify(line), LineKind::Other);
    }

    #[test]
    fn non_ascii_digits_do_not_end_a_heading() {
        assert!(!is_heading("Juan ١"));
        assert!(is_heading("Juan ١ 2"));
    }

    #[test]
    fn verse_splits_number_and_text() {
        assert_eq!(
            parse_verse("1 En el principio era el Verbo"),
            Some(Verse { number: "1", text: "En el principio era el Verbo" })
        );
        assert_eq!(
            parse_verse("14 Y aquel Verbo fue hecho carne"),
            Some(Verse { number: "14", text: "Y aquel Verbo fue hecho carne" })
        );
    }

    #[test]
    fn verse_keeps_extra_separator_whitespace_in_text() {
        assert_eq!(
            parse_verse("2  Este era"),
            Some(Verse { number: "2", text: " Este era" })
        );
    }

    #[rstest]
    #[case::no_digits("En el principio")]
    #[case::no_separator("1En el principio")]
    #[case::number_only("7")]
    #[case::empty("")]
    fn not_verses(#[case] line: &str) {
        assert_eq!(parse_verse(line), None);
    }

    #[test]
    fn classify_other() {
        assert_eq!(classify("Ἐν ἀρχῇ ἦν ὁ λόγος"), LineKind::Other);
    }

    #[test]
    fn classify_greek_verse() {
        assert_eq!(
            classify("1 Ἐν ἀρχῇ"),
            LineKind::Verse(Verse { number: "1", text: "Ἐν ἀρχῇ" })
        );
    }

    #[test]
    fn strip_repeated_number() {
        assert_eq!(strip_verse_number("1 Ἐν ἀρχῇ", "1"), "Ἐν ἀρχῇ");
        assert_eq!(strip_verse_number("Ἐν ἀρχῇ", "1"), "Ἐν ἀρχῇ");
        assert_eq!(strip_verse_number("2 καὶ", "1"), "2 καὶ");
    }

    #[test]
    fn strip_requires_number_boundary() {
        assert_eq!(strip_verse_number("10 οὗτος", "1"), "10 οὗτος");
        assert_eq!(strip_verse_number("10 οὗτος", "10"), "οὗτος");
    }
}
