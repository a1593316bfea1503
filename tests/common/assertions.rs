//! Domain-specific assertion macros for interlinear harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that say which
//! scan invariant was violated.

/// Assert that a report's found-word list is strictly ascending, which also
/// rules out duplicates.
///
/// ```rust
/// assert_words_sorted_unique!(report);
/// ```
#[macro_export]
macro_rules! assert_words_sorted_unique {
    ($report:expr) => {{
        let report: &interlinear_core::ScanReport = &$report;
        for pair in report.found_words.windows(2) {
            if pair[0] >= pair[1] {
                panic!(
                    "assert_words_sorted_unique! failed: {:?} is not before {:?}\n  words: {:?}",
                    pair[0], pair[1], report.found_words
                );
            }
        }
    }};
}

/// Assert the exact found-word list of a report.
///
/// ```rust
/// assert_found_words!(report, ["ἀρχῇ"]);
/// ```
#[macro_export]
macro_rules! assert_found_words {
    ($report:expr, [$($word:expr),* $(,)?]) => {{
        let report: &interlinear_core::ScanReport = &$report;
        let expected: Vec<&str> = vec![$($word),*];
        let actual: Vec<&str> = report.found_words.iter().map(String::as_str).collect();
        pretty_assertions::assert_eq!(actual, expected, "found words differ");
    }};
}

/// Assert that every occurrence carries `heading` (`None` for "no heading").
#[macro_export]
macro_rules! assert_all_headings {
    ($occurrences:expr, $heading:expr) => {{
        let expected: Option<&str> = $heading;
        for occ in $occurrences {
            let occ: &interlinear_core::Occurrence = occ;
            if occ.heading.as_deref() != expected {
                panic!(
                    "assert_all_headings! failed:\n  expected: {:?}\n  actual:   {:?}\n  verse {} word {:?}",
                    expected, occ.heading, occ.verse, occ.found_word
                );
            }
        }
    }};
}
