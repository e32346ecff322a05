use anyhow::Result;
use clap::{Parser, Subcommand};
use leadline_core::{
    DEFAULT_DB_FILE, DEFAULT_PORT, RECENT_ACTIVITIES_LIMIT, env_parse_with_default, env_string,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "leadline")]
#[command(about = "Lead pipeline CRM backend with chat capture", long_about = None)]
struct Cli {
    /// Database file (falls back to `LEADLINE_DB_PATH`, then `leads.db`)
    #[arg(long, global = true)]
    db: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        /// Listen port (falls back to `PORT`, then 3001)
        #[arg(short, long)]
        port: Option<u16>,
        #[arg(short = 'H', long, default_value = "0.0.0.0")]
        host: String,
    },
    /// Print pipeline statistics
    Stats,
    /// List leads
    List {
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        stage: Option<String>,
        /// Case-insensitive match on name, email or company
        #[arg(short, long)]
        search: Option<String>,
        #[arg(long)]
        sort: Option<String>,
        #[arg(long)]
        order: Option<String>,
    },
    /// Show one lead with its conversation and activity timeline
    Get { id: String },
    /// Print the most recent activities across all leads
    Activities {
        #[arg(short, long, default_value_t = RECENT_ACTIVITIES_LIMIT)]
        limit: usize,
    },
}

pub(crate) fn resolve_db_path(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| env_string("LEADLINE_DB_PATH").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE))
}

pub(crate) fn ensure_db_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let db_path = resolve_db_path(cli.db);
    ensure_db_dir(&db_path)?;

    match cli.command {
        Commands::Serve { port, host } => {
            let port = port.unwrap_or_else(|| env_parse_with_default("PORT", DEFAULT_PORT));
            commands::serve::run(&db_path, port, &host).await?;
        },
        Commands::Stats => commands::inspect::run_stats(&db_path)?,
        Commands::List { status, stage, search, sort, order } => {
            let filter = commands::inspect::build_filter(
                status.as_deref(),
                stage.as_deref(),
                search,
                sort.as_deref(),
                order.as_deref(),
            )?;
            commands::inspect::run_list(&db_path, &filter)?;
        },
        Commands::Get { id } => commands::inspect::run_get(&db_path, &id)?,
        Commands::Activities { limit } => commands::inspect::run_activities(&db_path, limit)?,
    }

    Ok(())
}
