mod app;
mod card;
mod format;
mod render;

use std::io::Write;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use anifocus_api::JikanClient;
use anifocus_core::config::AppConfig;
use anifocus_core::error::AnifocusError;
use anifocus_core::models::WatchStatus;
use anifocus_core::store::LibraryStore;

use app::{App, Command};

#[derive(Parser)]
#[command(
    name = "anifocus",
    about = "Track anime watch progress against the MyAnimeList catalog",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand)]
enum CliCommand {
    /// Show the top titles from the catalog
    Top,
    /// Search the catalog by title
    Search {
        query: Vec<String>,
    },
    /// Show your library, optionally a single status tab
    List {
        /// plan_to_watch, watching or completed
        #[arg(value_parser = parse_status)]
        status: Option<WatchStatus>,
    },
    /// Show details for one title
    Show {
        id: u64,
    },
    /// Add a title to your library or update its status and progress
    Track {
        id: u64,
        /// plan_to_watch, watching or completed
        #[arg(long, value_parser = parse_status)]
        status: Option<WatchStatus>,
        /// Watched episode count
        #[arg(long)]
        episodes: Option<u32>,
    },
    /// Remove a title from your library
    Remove {
        id: u64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Move a finished title back to plan-to-watch
    Rewatch {
        id: u64,
    },
}

fn parse_status(s: &str) -> Result<WatchStatus, String> {
    WatchStatus::from_tag(s)
        .ok_or_else(|| format!("expected one of plan_to_watch, watching, completed (got \"{s}\")"))
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter("anifocus=info")
        .init();

    let cli = Cli::parse();

    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Falling back to default config: {e}");
        AppConfig::default()
    });

    let service = match JikanClient::with_base_url(&config.catalog.base_url) {
        Ok(service) => service,
        Err(e) => {
            eprintln!("Invalid catalog base URL in config: {e}");
            return ExitCode::FAILURE;
        }
    };

    let store = LibraryStore::load(&AppConfig::library_path());
    let confirm_delete = config.library.confirm_delete;
    let mut app = App::new(config, store, service);

    let command = match to_command(cli.command, confirm_delete) {
        Some(command) => command,
        None => return ExitCode::SUCCESS,
    };

    match app.dispatch(command).await {
        Ok(view) => {
            render::print(&view);
            ExitCode::SUCCESS
        }
        Err(e @ AnifocusError::Catalog(_)) => {
            tracing::error!("{e}");
            eprintln!("Error loading anime.");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Map CLI arguments onto an app command, running the delete
/// confirmation prompt first. `None` means the user declined.
fn to_command(cli: CliCommand, confirm_delete: bool) -> Option<Command> {
    Some(match cli {
        CliCommand::Top => Command::ShowTop,
        CliCommand::Search { query } => Command::Search {
            query: query.join(" "),
        },
        CliCommand::List { status } => Command::ShowLibrary { status },
        CliCommand::Show { id } => Command::ShowDetail { id },
        CliCommand::Track {
            id,
            status,
            episodes,
        } => Command::Save {
            id,
            status,
            episodes,
        },
        CliCommand::Remove { id, yes } => {
            if confirm_delete && !yes && !confirm_removal() {
                return None;
            }
            Command::Delete { id }
        }
        CliCommand::Rewatch { id } => Command::WatchAgain { id },
    })
}

/// Ask before deleting; the watch-again reset intentionally does not ask.
fn confirm_removal() -> bool {
    print!("Remove this anime from your list? [y/N] ");
    let _ = std::io::stdout().flush();
    let mut line = String::new();
    if std::io::stdin().read_line(&mut line).is_err() {
        return false;
    }
    matches!(line.trim(), "y" | "Y" | "yes")
}
