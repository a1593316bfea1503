//! Search session error types.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("no se ha cargado ningún archivo de texto")]
    MissingFile,

    #[error("el término de búsqueda está vacío")]
    EmptyTerm,

    #[error("{name} no es texto UTF-8 válido (byte inválido en la posición {offset})")]
    Decode {
        name: String,
        offset: usize,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("no se pudo leer {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// How a [`SearchError`] should be presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Something the user has not provided yet.
    Warning,
    /// The input could not be processed.
    Error,
}

impl SearchError {
    pub fn severity(&self) -> Severity {
        match self {
            SearchError::MissingFile | SearchError::EmptyTerm => Severity::Warning,
            SearchError::Decode { .. } | SearchError::Io { .. } => Severity::Error,
        }
    }
}

/// Result type for search session operations
pub type SearchResult<T> = Result<T, SearchError>;
