// src/commands.rs

//! Command implementations for the certhdr CLI
//!
//! Each function drives the library for one subcommand: tracing for
//! diagnostics, `println!` for the user-facing result line.

use std::path::Path;

use anyhow::Result;
use tracing::info;

use certhdr::convert::{convert, verify, ConvertOptions};
use certhdr::MacroName;

/// Convert a certificate file into a C header file
pub fn cmd_convert(
    source: &Path,
    output: &Path,
    macro_name: MacroName,
    escape: bool,
) -> Result<()> {
    info!("Converting certificate: {}", source.display());

    let options = ConvertOptions {
        source: source.to_path_buf(),
        output: output.to_path_buf(),
        macro_name,
        escape,
    };
    let summary = convert(&options)?;

    info!(
        "Wrote {} fragments under macro {}",
        summary.fragments, options.macro_name
    );
    println!(
        "Certificate converted to C header file in: {}",
        output.display()
    );

    Ok(())
}

/// Verify that an existing header matches a certificate file
pub fn cmd_verify(source: &Path, header: &Path, macro_name: MacroName, escape: bool) -> Result<()> {
    info!(
        "Verifying header {} against certificate {}",
        header.display(),
        source.display()
    );

    verify(source, header, &macro_name, escape)?;

    println!(
        "Header {} matches certificate {}",
        header.display(),
        source.display()
    );

    Ok(())
}
