use thiserror::Error;

/// Result type for C# generation.
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal generation errors. Generation aborts before any output is
/// returned; there is no partial artifact.
#[derive(Debug, Error)]
pub enum Error {
    /// A property schema carried a primitive kind outside the translation
    /// table. This indicates a malformed definition, so the offending
    /// fragment is included verbatim.
    #[error("cannot translate primitive type in property schema:\n{fragment}")]
    UnknownPrimitive { fragment: String },
}
