//! Weft CLI
//!
//! Command-line interface for the weft utility-first CSS tool. The CLI
//! owns logging and process-exit decisions; all resolution logic lives
//! in `weft-core`.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "weft")]
#[command(about = "weft: configuration and content resolution for utility-first CSS generation")]
#[command(version = weft_core::VERSION)]
#[command(
    long_about = "weft resolves a project's configuration into the inputs the CSS rule\n\
generator consumes: the merged design-token theme, palette sets, and the\n\
ordered list of content files to scan for class-name usage.\n\
\n\
Examples:\n  \
weft resolve                 # Resolve config in the current directory\n  \
weft files ./site            # List the content files a config selects\n  \
weft init                    # Write a starter weft.config.json"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(
        short,
        long,
        global = true,
        help = "Path to configuration file (default: auto-discovered)"
    )]
    config: Option<PathBuf>,

    /// Verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the configuration and print it as JSON
    Resolve {
        /// Project directory (default: current directory)
        path: Option<PathBuf>,
    },
    /// Print the resolved content file list, one path per line
    Files {
        /// Project directory (default: current directory)
        path: Option<PathBuf>,
    },
    /// Write a starter weft.config.json
    Init {
        /// Directory to initialize (default: current directory)
        path: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    weft_core::init_tracing(match cli.verbose {
        0 => "weft_core=warn",
        1 => "weft_core=debug",
        _ => "trace",
    });

    let result = match cli.command {
        Commands::Resolve { path } => commands::resolve(cli.config.as_deref(), path.as_deref()),
        Commands::Files { path } => commands::files(cli.config.as_deref(), path.as_deref()),
        Commands::Init { path } => commands::init(path.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
