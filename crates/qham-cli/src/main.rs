//! QHAM Command-Line Interface
//!
//! Loads serialized qubit Hamiltonians (OpenFermion `QubitOperator` text)
//! into a symbolic operator and prints the canonical form.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{info, load, version};

/// qham - qubit-Hamiltonian ingestion and inspection
#[derive(Parser)]
#[command(name = "qham")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a serialized Hamiltonian and print its canonical form
    Load {
        /// Input file (OpenFermion QubitOperator text)
        #[arg(short, long)]
        input: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Summarize a serialized Hamiltonian
    Info {
        /// Input file (OpenFermion QubitOperator text)
        #[arg(short, long)]
        input: String,
    },

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Load {
            input,
            format,
            output,
        } => load::execute(&input, &format, output.as_deref()),

        Commands::Info { input } => info::execute(&input),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
