use thiserror::Error;

/// Why a locale dictionary could not be loaded.
///
/// Never surfaced to the user: the loader absorbs it and falls back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("invalid language code `{0}`")]
    InvalidLanguage(String),

    #[error("request for {url} failed: {reason}")]
    Fetch { url: String, reason: String },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("malformed locale content: {0}")]
    Malformed(String),
}
