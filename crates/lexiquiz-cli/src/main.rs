//! lexiquiz CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use lexiquiz_core::model::Direction;

mod commands;

#[derive(Parser)]
#[command(name = "lexiquiz", version, about = "Console vocabulary quiz")]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive quiz
    Play(PlayArgs),

    /// Create a starter config and sample dictionary
    Init,

    /// Check a dictionary file for errors and warnings
    Validate {
        /// Translation source file (defaults to the configured one)
        #[arg(long)]
        dictionary: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show a user's most missed words
    Stats {
        /// Username whose progress to show
        #[arg(long)]
        user: String,

        /// Directory holding per-user files
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Number of words to list
        #[arg(long, default_value = "10")]
        top: usize,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Args)]
pub struct PlayArgs {
    /// Translation source file
    #[arg(long)]
    dictionary: Option<PathBuf>,

    /// Directory holding per-user files
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Username (asked interactively when omitted)
    #[arg(long)]
    user: Option<String>,

    /// Direction: 1 = source to target, 2 = target to source
    #[arg(long)]
    direction: Option<Direction>,

    /// Wrong answers allowed per word
    #[arg(long)]
    attempts: Option<u32>,

    /// Ask at most this many words
    #[arg(long)]
    limit: Option<usize>,

    /// Also quiz the words in your personal dictionary
    #[arg(long)]
    include_personal: bool,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,
}

fn init_tracing(verbose: bool) {
    let filter = if !verbose && std::env::var_os("RUST_LOG").is_some() {
        EnvFilter::from_default_env()
    } else {
        let level = if verbose { "debug" } else { "warn" };
        EnvFilter::new(format!(
            "lexiquiz={level},lexiquiz_core={level},lexiquiz_store={level}"
        ))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Play(args) => commands::play::execute(args),
        Commands::Init => commands::init::execute(),
        Commands::Validate { dictionary, config } => {
            commands::validate::execute(dictionary, config)
        }
        Commands::Stats {
            user,
            data_dir,
            top,
            format,
            config,
        } => commands::stats::execute(user, data_dir, top, format, config),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
