//! ptq - command-line front end for the prompttoquery native library
//!
//! Commands:
//! - `ptq platform` - Show the detected platform and the artifact names it maps to
//! - `ptq locate` - Show which library file the loader would pick
//! - `ptq version` - Load the library and print its version
//! - `ptq generate` - Generate a query from a natural-language prompt

use clap::{Parser, Subcommand};
use prompttoquery::QueryError;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod inspect;
mod query;

/// Exit status for failures that did not come from the bridge
const OTHER_FAILURE: u8 = 10;

#[derive(Parser)]
#[command(name = "ptq")]
#[command(author, version, about = "Generate MongoDB queries from prompts", long_about = None)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the detected platform and the artifact names it maps to
    Platform {
        /// Library base name (default: prompttoquery)
        #[arg(long)]
        base_name: Option<String>,
    },

    /// Show which library file the loader would pick
    Locate {
        /// Directory to search; repeat to search several (default: standard search path)
        #[arg(short, long)]
        dir: Vec<PathBuf>,

        /// Library base name (default: prompttoquery)
        #[arg(long)]
        base_name: Option<String>,
    },

    /// Load the library and print its version
    Version {
        /// Load this file instead of searching for one
        #[arg(short, long)]
        lib: Option<PathBuf>,
    },

    /// Generate a query from a natural-language prompt
    Generate {
        /// LLM provider (e.g., openai)
        #[arg(short, long)]
        provider: String,

        /// Provider API key
        #[arg(short = 'k', long, env = "PTQ_API_KEY", hide_env_values = true)]
        api_key: String,

        /// Path to the database schema (JSON)
        #[arg(short, long)]
        schema: PathBuf,

        /// Model name (default: chosen by the library)
        #[arg(short, long)]
        model: Option<String>,

        /// Load this file instead of searching for one
        #[arg(short, long)]
        lib: Option<PathBuf>,

        /// The question to turn into a query
        prompt: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(exit_code(&e))
        }
    }
}

fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Platform { base_name } => {
            inspect::platform(base_name)?;
        }
        Commands::Locate { dir, base_name } => {
            inspect::locate(dir, base_name)?;
        }
        Commands::Version { lib } => {
            query::version(lib)?;
        }
        Commands::Generate {
            provider,
            api_key,
            schema,
            model,
            lib,
            prompt,
        } => {
            let args = query::GenerateArgs {
                provider,
                api_key,
                schema,
                model,
                lib,
            };
            query::generate(&args, &prompt)?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Bridge failures exit with their stable code; anything else is generic
fn exit_code(error: &anyhow::Error) -> u8 {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<QueryError>())
        .map_or(OTHER_FAILURE, QueryError::error_code)
}
