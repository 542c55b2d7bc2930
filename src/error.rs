// src/error.rs

//! Error types for certificate conversion

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::macro_name::MacroNameError;

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting a certificate or verifying a header
#[derive(Error, Debug)]
pub enum Error {
    /// Certificate file missing or unreadable
    #[error("cannot read certificate {}: {source}", path.display())]
    SourceUnreadable { path: PathBuf, source: io::Error },

    /// Header file cannot be created or written
    #[error("cannot write header {}: {source}", path.display())]
    DestinationUnwritable { path: PathBuf, source: io::Error },

    /// Existing header cannot be read for verification
    #[error("cannot read header {}: {source}", path.display())]
    HeaderUnreadable { path: PathBuf, source: io::Error },

    /// Existing header does not match the certificate
    #[error("header {} does not match the certificate", path.display())]
    HeaderMismatch { path: PathBuf },

    /// Invalid macro name
    #[error("invalid macro name: {0}")]
    MacroName(#[from] MacroNameError),
}
