// src/lib.rs

//! certhdr
//!
//! Converts a PEM-encoded certificate file into a C header file that defines
//! a single preprocessor macro holding the certificate as a string literal,
//! one quoted fragment per certificate line. The generated header is intended
//! for embedded firmware that provisions the certificate at runtime, e.g.
//! `modem_key_mgmt_write(tag, type, CA_CERTIFICATE, strlen(CA_CERTIFICATE))`.
//!
//! # Output format
//!
//! ```text
//! #define CA_CERTIFICATE \
//! "-----BEGIN CERTIFICATE-----\n" \
//! "MIIBszCCAVmgAwIBAgIUfA==\n" \
//! "-----END CERTIFICATE-----\n" \
//! ```
//!
//! Every fragment, including the last, ends with a line-continuation
//! backslash. Certificate content is not parsed or validated; each line is
//! treated as opaque text.

pub mod convert;
mod error;
pub mod macro_name;

pub use convert::{convert, render_header, verify, ConvertOptions, ConvertSummary};
pub use error::{Error, Result};
pub use macro_name::{MacroName, MacroNameError};
