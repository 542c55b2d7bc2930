// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

use std::path::PathBuf;

use tempfile::TempDir;

/// A small but realistic PEM certificate body.
pub const SAMPLE_CERT: &str = "-----BEGIN CERTIFICATE-----\n\
MIIBszCCAVmgAwIBAgIUQ2p7kXjN0mJ4sVn1c2FhbGJhY2swCgYIKoZIzj0EAwIw\n\
GjEYMBYGA1UEAwwPY2VydGhkci10ZXN0LWNhMB4XDTI0MDEwMTAwMDAwMFoXDTM0\n\
AQbmV2ZXIgdXNlIHRoaXMgZm9yIGFueXRoaW5nIHJlYWwgcGxlYXNlIHRoYW5rcw==\n\
-----END CERTIFICATE-----\n";

/// Write a certificate into a fresh temp dir.
///
/// Returns (TempDir, cert_path) - keep the TempDir alive to prevent cleanup.
pub fn setup_cert(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = tempfile::tempdir().unwrap();
    let cert_path = temp_dir.path().join("server_certificate.crt");
    std::fs::write(&cert_path, contents).unwrap();
    (temp_dir, cert_path)
}

/// Strip the quoting from a fragment line, recovering the certificate line.
///
/// Assumes default (non-escaping) conversion: the fragment looks like
/// `"<line>\n" \` with a literal backslash-n inside the quotes.
pub fn unescape_fragment(fragment: &str) -> String {
    fragment
        .strip_suffix(" \\")
        .and_then(|s| s.strip_prefix('"'))
        .and_then(|s| s.strip_suffix("\\n\""))
        .unwrap_or_else(|| panic!("not a fragment line: {:?}", fragment))
        .to_string()
}
