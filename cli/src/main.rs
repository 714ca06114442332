//! # LoadRS Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/loadrs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the LoadRS CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to appropriate command handlers
//!
//! ## Architecture
//!
//! The application follows a modular command structure:
//! - Each top-level command (`archive`, `publish`, `retract`) is defined as a variant in the `Commands` enum
//! - Commands are mapped to handler functions in their respective modules
//! - All errors are propagated to this level for consistent handling
//!
//! ## Examples
//!
//! Basic LoadRS usage:
//!
//! ```bash
//! # Get help
//! loadrs --help
//!
//! # Package a script and publish it with increased verbosity
//! loadrs -vv publish scripts/checkout_flow.js --namespace load-tests
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Route to appropriate command handler
//! 4. Format and display any errors that occur
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

// Declare the top-level modules of the CLI crate.
mod commands; // Handles specific command logic (archive, publish, retract).
mod common; // Contains shared utilities (bundle, k6, kube, fs, naming).
mod core; // Core infrastructure (errors, config).

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "loadrs",
    about = "🦀 LoadRS ⚙️: Kubernetes Load-Test Packaging & Tooling",
    long_about = "Package k6 load-test scripts into portable archives and publish them\n\
                  as namespaced ConfigMaps for an in-cluster test runner to consume.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    #[command(alias = "a")]
    Archive(commands::archive::ArchiveArgs),
    #[command(alias = "p")]
    Publish(commands::publish::PublishArgs),
    #[command(alias = "r")]
    Retract(commands::retract::RetractArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Use anyhow::Result directly
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Archive(args) => commands::archive::handle_archive(args).await,
        Commands::Publish(args) => commands::publish::handle_publish(args).await,
        Commands::Retract(args) => commands::retract::handle_retract(args).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        // Alternate formatting prints the whole context chain, so the
        // underlying cause (e.g. "Script not found: ...") reaches the user.
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
