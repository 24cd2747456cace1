//! Notes Sync CLI entry point
//!
//! Opens a notes directory and runs the paginated loader over it. Logs go to
//! stderr so that note output on stdout stays clean.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use notes_sync_app::app::{self, RunMode};
use notes_sync_app::backend::LocalFileStorage;
use notes_sync_app::command::CommandExecutor;
use notes_sync_app::config::{AppConfig, ConfigService, LocalConfigService};
use notes_sync_app::message::AppMessage;
use notes_sync_app::model::App;
use notes_sync_core::services::{NoteLoadService, NoteSyncService, ServiceContext};
use notes_sync_core::types::{CreatingFromTextNote, CreatingFromTitleNote};
use notes_sync_core::Note;
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "notes-sync")]
#[command(about = "Paginated plain-text notes backed by a directory of files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Notes directory (overrides the config file)
    #[arg(short, long, global = true)]
    dir: Option<PathBuf>,

    /// Notes loaded per page
    #[arg(long, global = true)]
    page_size: Option<usize>,

    /// Pages loaded as soon as the listing arrives
    #[arg(long, global = true)]
    pages: Option<usize>,

    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load every note and print them in listing order
    #[command(alias = "ls")]
    List,

    /// Create a note
    #[command(alias = "n")]
    New {
        /// Title of the note
        title: String,

        /// Body placed under the title
        #[arg(short, long)]
        text: Option<String>,
    },

    /// Print one note by title
    #[command(alias = "v")]
    Show {
        /// Title of the note
        title: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time(),
        )
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    tracing::debug!("Using notes directory {}", config.notes_dir.display());

    let storage = Arc::new(LocalFileStorage::new(&config.notes_dir));
    let ctx = Arc::new(ServiceContext::new(storage));

    match cli.command.unwrap_or(Commands::List) {
        Commands::List => list_notes(ctx, &config).await,
        Commands::New { title, text } => new_note(ctx, title, text).await,
        Commands::Show { title } => show_note(ctx, &title).await,
    }
}

/// 配置文件 + 命令行覆盖
fn load_config(cli: &Cli) -> Result<AppConfig> {
    let service = cli
        .config
        .as_ref()
        .map_or_else(LocalConfigService::new, LocalConfigService::with_path);
    let mut config = service.load()?;

    if let Some(dir) = &cli.dir {
        config.notes_dir.clone_from(dir);
    }
    if let Some(page_size) = cli.page_size {
        config.page_size = page_size;
    }
    if let Some(pages) = cli.pages {
        config.preload_pages = pages;
    }
    Ok(config.validated())
}

async fn list_notes(ctx: Arc<ServiceContext>, config: &AppConfig) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let executor = CommandExecutor::new(ctx, tx.clone());
    let mut app = App::new(config);

    tx.send(AppMessage::Start)?;
    app::run(&mut app, &executor, &mut rx, RunMode::LoadAll).await?;

    for note in app.notes() {
        println!("# {}", note.title());
        if let Some(text) = note.text() {
            println!("{text}");
        }
        println!();
    }

    if let Some(error) = app.last_error {
        bail!("listing incomplete: {error}");
    }
    Ok(())
}

async fn new_note(ctx: Arc<ServiceContext>, title: String, text: Option<String>) -> Result<()> {
    let service = NoteSyncService::new(ctx);
    let note = match text {
        Some(text) => {
            let draft = CreatingFromTextNote::new(0, format!("{title}\n{text}"));
            service.create_from_text(draft).await?
        }
        None => service.create_from_title(CreatingFromTitleNote::new(0, title)).await?,
    };

    if let Note::OutOfSync(failed) = &note {
        bail!("could not save {}: {}", failed.path(), failed.error());
    }
    println!(
        "{} ({})",
        note.path().unwrap_or_default(),
        note.state_name()
    );
    Ok(())
}

async fn show_note(ctx: Arc<ServiceContext>, title: &str) -> Result<()> {
    let note = NoteLoadService::new(ctx).load_by_title(0, title).await?;
    println!("{}", note.text());
    Ok(())
}
