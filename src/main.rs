use clap::{Parser, Subcommand};
use jsearch::{config::Config, shell};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jsearch", about = "Search JSON entity snapshots with automatic joins")]
struct Cli {
    /// Write debug logs to <tmp>/jsearch-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    /// Config file to use instead of ~/.config/jsearch/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding the <table>.json snapshots.
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Cmd>,
}

#[derive(Subcommand)]
enum Cmd {
    /// Search one table and print the enriched rows.
    Search {
        entity: String,
        field: String,
        /// Value to match; omit to match records where the field is empty.
        #[arg(default_value = "")]
        value: String,
    },
    /// List searchable fields of one table, or of all tables.
    Fields { entity: Option<String> },
    /// Start the interactive shell (default).
    Shell,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug)?;

    let config = Config::load(cli.config.as_deref())?;
    let db = jsearch::open(&config, cli.data_dir.as_deref())?;
    eprintln!(
        "{} loaded {} of {} tables",
        db.name(),
        db.len(),
        config.tables.len()
    );

    let command = match cli.command.unwrap_or(Cmd::Shell) {
        Cmd::Shell => return shell::run(&config, db),
        Cmd::Search {
            entity,
            field,
            value,
        } => shell::Command::Search {
            entity,
            field,
            value,
        },
        Cmd::Fields { entity } => shell::Command::Fields(entity),
    };

    let session = shell::Session::new(db, config.display.clone(), shell::theme::Theme::load_default());
    session.try_execute(&command, &mut std::io::stdout().lock())?;
    Ok(())
}

fn init_tracing(debug: bool) -> anyhow::Result<()> {
    if debug {
        let path = std::env::temp_dir().join("jsearch-debug.log");
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!(path = %path.display(), "jsearch debug log started");
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .init();
    }
    Ok(())
}
