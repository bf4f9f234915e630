use thiserror::Error;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors that can surface from the navigation engine.
///
/// Deliberately small: dangling references, cycles, and depth overruns are
/// tolerated conditions reported through warnings, not errors.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The artifact carried no chunks or pages at all
    #[error("Document contains no chunks")]
    EmptyDocument,

    /// An explicit navigation target names an id outside the corpus
    #[error("Unknown chunk id: {0}")]
    UnknownChunk(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
