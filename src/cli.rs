// src/cli.rs

//! CLI definitions for certhdr
//!
//! Command-line interface definitions using clap. The actual command
//! implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use certhdr::MacroName;

#[derive(Parser)]
#[command(name = "certhdr")]
#[command(version)]
#[command(about = "Convert PEM certificates into C header files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a certificate file into a C header
    Convert {
        /// Path to the PEM certificate file
        source: PathBuf,

        /// Path of the header file to write (overwritten if present)
        output: PathBuf,

        /// Macro name to define in the header
        #[arg(short, long, default_value = "CA_CERTIFICATE")]
        macro_name: MacroName,

        /// Escape embedded double quotes and backslashes
        #[arg(long)]
        escape: bool,
    },
    /// Check that an existing header matches a certificate file
    Verify {
        /// Path to the PEM certificate file
        source: PathBuf,

        /// Path of the header file to check
        header: PathBuf,

        /// Macro name expected in the header
        #[arg(short, long, default_value = "CA_CERTIFICATE")]
        macro_name: MacroName,

        /// Escape embedded double quotes and backslashes
        #[arg(long)]
        escape: bool,
    },
}
