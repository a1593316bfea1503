//! Static interlinear corpora used across harnesses.

use std::path::{Path, PathBuf};

/// The three-line example document: one heading, one Spanish verse, one
/// Greek verse.
pub const BASIC: &[&str] = &["Juan 1", "1 En el principio", "1 Ἐν ἀρχῇ ἦν ὁ λόγος"];

/// John 1:1-5 as a Spanish/Greek interlinear, with a second chapter heading.
pub const JOHN_1: &[&str] = &[
    "Juan 1",
    "1 En el principio era el Verbo, y el Verbo era con Dios, y el Verbo era Dios.",
    "1 Ἐν ἀρχῇ ἦν ὁ λόγος, καὶ ὁ λόγος ἦν πρὸς τὸν θεόν, καὶ θεὸς ἦν ὁ λόγος.",
    "2 Este era en el principio con Dios.",
    "2 οὗτος ἦν ἐν ἀρχῇ πρὸς τὸν θεόν.",
    "3 Todas las cosas por él fueron hechas, y sin él nada de lo que ha sido hecho, fue hecho.",
    "3 πάντα δι’ αὐτοῦ ἐγένετο, καὶ χωρὶς αὐτοῦ ἐγένετο οὐδὲ ἕν ὃ γέγονεν.",
    "Juan 2",
    "1 Al tercer día se hicieron unas bodas en Caná de Galilea.",
    "1 Καὶ τῇ ἡμέρᾳ τῇ τρίτῃ γάμος ἐγένετο ἐν Κανὰ τῆς Γαλιλαίας.",
];

/// Greek alphabet plus a few accented forms, for generated words.
pub const GREEK_LETTERS: &str = "αβγδεζηθικλμνξοπρστυφχψωάέήίόύώἀἐἠὁῇ";

/// A synthetic interlinear of `verses` verses split into chapters of 20.
pub fn synthetic_corpus(verses: usize) -> Vec<String> {
    const GREEK: &[&str] = &[
        "Ἐν ἀρχῇ ἦν ὁ λόγος",
        "καὶ ὁ λόγος ἦν πρὸς τὸν θεόν",
        "πάντα δι’ αὐτοῦ ἐγένετο",
        "ἐν αὐτῷ ζωὴ ἦν",
        "καὶ τὸ φῶς ἐν τῇ σκοτίᾳ φαίνει",
    ];
    let mut lines = Vec::with_capacity(verses * 2 + verses / 20 + 1);
    for i in 0..verses {
        if i % 20 == 0 {
            lines.push(format!("Capítulo {}", i / 20 + 1));
        }
        let n = i % 20 + 1;
        lines.push(format!("{n} Versículo {i} en castellano"));
        lines.push(format!("{n} {}", GREEK[i % GREEK.len()]));
    }
    lines
}

/// Write `text` to `dir/name` and return the path.
pub fn write_document(dir: &Path, name: &str, text: impl AsRef<[u8]>) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, text).expect("write fixture document");
    path
}
