//! `wellread` CLI entry-point.
//!
//! Available sub-commands:
//! - `history list <VOLUME_ID>`            — print a volume's reading history.
//! - `history add <VOLUME_ID> <PAGE>`      — record the page a volume is at.
//! - `history delete <ID>`                 — remove one history entry.

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use db::{PgReadingHistoryStore, ReadingHistoryRepository};

#[derive(Debug, Parser)]
#[command(name = "wellread", about = "Reading progress tracker", version)]
struct Cli {
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    #[arg(long, env = "WELLREAD_MAX_CONNECTIONS", default_value_t = 5)]
    max_connections: u32,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Work with a volume's reading history.
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
}

#[derive(Debug, Subcommand)]
enum HistoryAction {
    /// Print history for a volume, most recent first.
    List { volume_id: i32 },
    /// Record the page a volume has reached.
    Add { volume_id: i32, current_page: i32 },
    /// Delete one history entry by id.
    Delete { id: i32 },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let pool = db::pool::create_pool(&cli.database_url, cli.max_connections)
        .await
        .context("failed to connect to database")?;
    let store = PgReadingHistoryStore::new(pool);

    match cli.command {
        Command::History { action } => run_history(&store, action).await,
    }
}

async fn run_history(store: &dyn ReadingHistoryRepository, action: HistoryAction) -> anyhow::Result<()> {
    match action {
        HistoryAction::List { volume_id } => {
            let rows = store.list(volume_id).await?;
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        HistoryAction::Add { volume_id, current_page } => {
            store.add(volume_id, current_page).await?;
            info!("Recorded page {current_page} for volume {volume_id}");
        }
        HistoryAction::Delete { id } => {
            store.delete(id).await?;
            info!("Deleted reading history entry {id}");
        }
    }
    Ok(())
}
