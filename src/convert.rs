// src/convert.rs

//! Certificate-to-header conversion
//!
//! The transform is a single linear pass: each certificate line becomes a
//! quoted fragment with a literal `\n` escape inside the quotes and a
//! line-continuation backslash after them, all concatenated under one
//! `#define`. CRLF line endings are normalized the same way an
//! universal-newline text read would, so DOS and Unix certificate files
//! produce identical headers.
//!
//! By default embedded `"` and `\` characters pass through untouched.
//! Well-formed PEM is base64 plus marker lines, so neither can occur; the
//! opt-in `escape` flag covers input that is not well-formed.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::macro_name::MacroName;

/// Options for a single conversion run
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Path of the PEM certificate to read
    pub source: PathBuf,
    /// Path of the header file to write (created or overwritten)
    pub output: PathBuf,
    /// Name of the macro the certificate is defined under
    pub macro_name: MacroName,
    /// Escape embedded `"` and `\` characters in certificate lines
    pub escape: bool,
}

/// Outcome of a successful conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertSummary {
    /// Number of quoted fragments written, one per certificate line
    pub fragments: usize,
}

/// Convert a certificate file into a C header file.
///
/// The source is opened before the destination, so a missing source leaves
/// no output file behind. On a write failure the destination may be left
/// incomplete; there is no cleanup pass.
pub fn convert(options: &ConvertOptions) -> Result<ConvertSummary> {
    let text = fs::read_to_string(&options.source).map_err(|e| Error::SourceUnreadable {
        path: options.source.clone(),
        source: e,
    })?;

    let header = render_header(&text, &options.macro_name, options.escape);

    fs::write(&options.output, &header).map_err(|e| Error::DestinationUnwritable {
        path: options.output.clone(),
        source: e,
    })?;

    Ok(ConvertSummary {
        fragments: text.lines().count(),
    })
}

/// Render the full header text for a certificate.
///
/// The first line is `#define <name> \`; each certificate line follows as
/// `"<line>\n" \`. Every line, including the last fragment, carries the
/// continuation backslash.
pub fn render_header(text: &str, macro_name: &MacroName, escape: bool) -> String {
    let mut header = format!("#define {} \\\n", macro_name);
    for line in text.lines() {
        header.push('"');
        header.push_str(&escape_line(line, escape));
        header.push_str("\\n\" \\\n");
    }
    header
}

/// Compare an existing header against what the certificate would produce.
///
/// The comparison is byte-for-byte, so headers written by [`convert`] (or by
/// any tool emitting the same format) verify cleanly and anything else is a
/// mismatch.
pub fn verify(source: &Path, header: &Path, macro_name: &MacroName, escape: bool) -> Result<()> {
    let text = fs::read_to_string(source).map_err(|e| Error::SourceUnreadable {
        path: source.to_path_buf(),
        source: e,
    })?;

    let expected = render_header(&text, macro_name, escape);

    let actual = fs::read_to_string(header).map_err(|e| Error::HeaderUnreadable {
        path: header.to_path_buf(),
        source: e,
    })?;

    if actual != expected {
        return Err(Error::HeaderMismatch {
            path: header.to_path_buf(),
        });
    }

    Ok(())
}

/// Escape `"` and `\` in a certificate line when `escape` is set.
///
/// Returns the line unchanged (and unallocated) when escaping is off or
/// nothing needs escaping.
pub fn escape_line(line: &str, escape: bool) -> Cow<'_, str> {
    if !escape || !line.contains(['"', '\\']) {
        return Cow::Borrowed(line);
    }

    let mut escaped = String::with_capacity(line.len() + 2);
    for c in line.chars() {
        if c == '"' || c == '\\' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    Cow::Owned(escaped)
}
