use thiserror::Error;

/// Top-level error type for the kerfis kernel.
#[derive(Debug, Error)]
pub enum KerfisError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// Errors raised while reading path data text.
///
/// Parsing is deterministic, so none of these are retryable; a failure
/// aborts the import that triggered it.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid character {found:?} while reading a number")]
    MalformedNumber { found: char },

    #[error("x coordinate {x} has no matching y value")]
    MissingCoordinate { x: f64 },

    #[error("unexpected character {found:?} in path data")]
    UnexpectedToken { found: char },
}

/// Errors raised while importing or assembling an SVG document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("document has no <svg> root element")]
    MissingRoot,

    #[error("cannot split scalar {0:?} into value and unit")]
    MalformedScalar(String),

    #[error("malformed attribute {name}={value:?}")]
    MalformedAttribute { name: &'static str, value: String },

    #[error("shape handle does not belong to this document")]
    UnknownShape,

    #[error("xml error: {0}")]
    Xml(#[from] quick_xml::Error),
}

/// Convenience type alias for results using [`KerfisError`].
pub type Result<T> = std::result::Result<T, KerfisError>;
