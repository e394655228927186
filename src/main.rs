use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use yt_playlist::commands;
use yt_playlist::config::{DEFAULT_OUTPUT_FILE, load_env};
use yt_playlist::error::Error;

#[derive(Parser)]
#[command(name = "yt-playlist")]
#[command(about = "Summarize a YouTube playlist: durations, views, likes and comments")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a playlist and write its report (the default command)
    Report {
        /// Playlist ID (prompted for when omitted)
        playlist_id: Option<String>,

        /// Report file to write
        #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
        output: PathBuf,
    },

    /// Save a YouTube Data API key
    Init {
        /// YouTube Data API key
        #[arg(short = 'k', long)]
        api_key: Option<String>,

        /// Overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn report_error(e: &Error) {
    match e {
        Error::NotFound(_) => println!("Playlist not found!"),
        _ if e.is_transport() => {
            eprintln!("An error occurred while fetching playlist details: {}", e);
            eprintln!(
                "This might be due to an invalid Playlist ID, an incorrect API key, or a network issue."
            );
            eprintln!("Please check your .env file and the provided Playlist ID.");
        }
        _ => eprintln!("Error: {}", e),
    }
}

#[tokio::main]
async fn main() {
    // Load environment variables
    load_env();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Report { playlist_id, output }) => {
            commands::report::run(playlist_id, &output).await
        }
        Some(Commands::Init { api_key, force }) => commands::init::run(api_key, force),
        None => commands::report::run(None, &PathBuf::from(DEFAULT_OUTPUT_FILE)).await,
    };

    if let Err(e) = result {
        report_error(&e);
        std::process::exit(e.exit_code());
    }
}
