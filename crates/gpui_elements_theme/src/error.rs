use thiserror::Error;

/// Errors produced while loading or reading theme values.
///
/// Merging never fails; these only surface at the edges, when a theme is
/// parsed from text or when a caller asks for a token of a specific type.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("could not parse theme: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("no theme value at `{0}`")]
    Missing(String),

    #[error("expected {expected} at `{path}`, found {found}")]
    Mismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },
}
