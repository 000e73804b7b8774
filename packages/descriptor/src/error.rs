use thiserror::Error;

/// A structural mistake in the descriptor or its inputs.
///
/// Fatal and surfaced immediately; nothing is retried and no partial
/// environment is produced.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error("unknown toolchain extension: {0}")]
    UnknownExtension(String),

    #[error("invalid target triple: {0:?}")]
    InvalidTarget(String),

    #[error("invalid package entry: {0}")]
    InvalidPackage(String),

    #[error("malformed descriptor manifest: {0}")]
    Manifest(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// An external collaborator could not satisfy a pinned requirement.
///
/// Propagated verbatim from the collaborator; fatal, no local recovery.
#[derive(Error, Debug)]
pub enum ResolutionError {
    #[error("required executable not found on PATH: {0}")]
    MissingExecutable(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
