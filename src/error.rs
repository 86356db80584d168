use std::path::PathBuf;

use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub(crate) enum Error {
    #[error("Failed to read site config: {}\n  {cause}", .path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        cause: std::io::Error,
    },

    #[error("Failed to parse site config: {}\n  {message}", .path.display())]
    SourceParse { path: PathBuf, message: String },

    #[error(
        "Site config must be a JSON object mapping site keys to site entries.\n  Path: {}\n  Reason: {message}",
        .path.display()
    )]
    SourceShape { path: PathBuf, message: String },

    #[error("Site config is invalid: {}\n\n{message}", .path.display())]
    SiteValidation { path: PathBuf, message: String },

    #[error("Failed to write generated file: {}\n  {cause}", .path.display())]
    DestinationWrite {
        path: PathBuf,
        #[source]
        cause: std::io::Error,
    },

    #[error(
        "Generated file is out of date: {}\n  Run sitegen without --check to regenerate it.",
        .path.display()
    )]
    OutOfDate { path: PathBuf },

    #[error("Settings file not found: {}", .path.display())]
    ConfigNotFound { path: PathBuf },

    #[error("Failed to parse settings: {message}")]
    ConfigParse { message: String },

    #[error("Your 'sitegen.toml' settings are invalid.\n\n{message}")]
    ConfigValidation { message: String },

    #[error("Internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for this crate.
pub(crate) type Result<T> = std::result::Result<T, Error>;
