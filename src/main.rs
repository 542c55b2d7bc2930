// src/main.rs

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Convert {
            source,
            output,
            macro_name,
            escape,
        }) => commands::cmd_convert(&source, &output, macro_name, escape),
        Some(Commands::Verify {
            source,
            header,
            macro_name,
            escape,
        }) => commands::cmd_verify(&source, &header, macro_name, escape),
        None => {
            // No command provided, show help
            println!("certhdr v{}", env!("CARGO_PKG_VERSION"));
            println!("Run 'certhdr --help' for usage information");
            Ok(())
        }
    }
}
