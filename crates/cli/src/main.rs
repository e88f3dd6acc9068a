use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use roster_core::PolicyRegistry;
use roster_service::ListService;
use roster_storage::Storage;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Paginated resource lists for a roleplay community platform", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        #[arg(short, long, default_value = "37780")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Print one page of a resource as JSON
    List {
        resource: String,
        #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
        offset: i64,
        #[arg(short = 's', long, allow_negative_numbers = true)]
        page_size: Option<i64>,
        #[arg(long)]
        sort: Option<String>,
        #[arg(long)]
        desc: bool,
        /// Free-text match on the resource's search column
        #[arg(short, long)]
        q: Option<String>,
        /// Equality filter, `column=value`; repeatable
        #[arg(short, long = "filter")]
        filters: Vec<String>,
    },
    /// Load rows from a JSON array file
    Import { resource: String, file: PathBuf },
    /// Print the listable resources with their limits and columns
    Resources,
}

pub(crate) fn get_db_path() -> PathBuf {
    if let Ok(path) = std::env::var("ROSTER_DB_PATH") {
        return PathBuf::from(path);
    }
    dirs::data_local_dir().unwrap_or_else(|| PathBuf::from(".")).join("roster").join("roster.db")
}

pub(crate) fn ensure_db_dir(db_path: &std::path::Path) -> Result<()> {
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("cannot create {}", parent.display()))?;
    }
    Ok(())
}

pub(crate) fn open_service() -> Result<ListService> {
    let db_path = get_db_path();
    ensure_db_dir(&db_path)?;
    let storage = Storage::new(&db_path)?;
    Ok(ListService::new(Arc::new(storage), PolicyRegistry::from_env()))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(port, host).await,
        Commands::List { resource, offset, page_size, sort, desc, q, filters } => {
            let args = commands::list::ListArgs { offset, page_size, sort, desc, q, filters };
            commands::list::run(&resource, args).await
        },
        Commands::Import { resource, file } => commands::import::run(&resource, &file).await,
        Commands::Resources => commands::resources::run(),
    }
}
