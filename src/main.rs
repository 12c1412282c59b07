use clap::Parser;
use colored::*;
use eyre::{Context, Result, eyre};
use log::info;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

mod cli;
mod config;
mod render;

use cli::Cli;
use cli::commands::Commands;
use config::Config;
use tasklist::prefs::{Preferences, open_backend};
use tasklist::store::{AddOutcome, LoadOutcome, TaskStore};
use tasklist::theme::{self, Theme};

fn setup_logging(verbose: bool) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(env!("CARGO_PKG_NAME"))
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join(format!("{}.log", env!("CARGO_PKG_NAME")));

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // RUST_LOG still wins over the default level
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

async fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    let prefs = open_backend(config.storage.backend, &config.storage.data_dir)
        .await
        .context("Failed to open preferences store")?;

    dispatch(cli, config, prefs).await
}

/// Apply the parsed command against an opened preferences store.
async fn dispatch(cli: &Cli, config: &Config, prefs: Arc<dyn Preferences>) -> Result<()> {
    match &cli.command {
        Some(Commands::Theme { toggle }) => handle_theme_command(prefs.as_ref(), *toggle).await,
        None | Some(Commands::List) => run_task_session(cli, config, prefs, |_| Ok(())).await,
        Some(Commands::Add { name, priority }) => {
            let priority = priority.unwrap_or(config.display.default_priority);
            run_task_session(cli, config, prefs, |store| {
                let name = name.join(" ");
                match store.add(&name, priority) {
                    AddOutcome::Added { index } => {
                        info!("Added task at position {}", index + 1);
                        println!("{} {}", "Added:".green(), name.trim());
                    }
                    AddOutcome::RejectedBlank => {
                        println!("{}", "Task name cannot be empty".red());
                    }
                }
                Ok(())
            })
            .await
        }
        Some(Commands::Done { number }) => {
            run_task_session(cli, config, prefs, |store| {
                store.set_completed(to_index(*number, store)?, true)?;
                Ok(())
            })
            .await
        }
        Some(Commands::Undone { number }) => {
            run_task_session(cli, config, prefs, |store| {
                store.set_completed(to_index(*number, store)?, false)?;
                Ok(())
            })
            .await
        }
        Some(Commands::Delete { number }) => {
            run_task_session(cli, config, prefs, |store| {
                let removed = store.delete(to_index(*number, store)?)?;
                println!("{} {}", "Deleted:".red(), removed.name);
                Ok(())
            })
            .await
        }
        Some(Commands::Priority { number, priority }) => {
            run_task_session(cli, config, prefs, |store| {
                store.set_priority(to_index(*number, store)?, *priority)?;
                Ok(())
            })
            .await
        }
    }
}

async fn handle_theme_command(prefs: &dyn Preferences, toggle: bool) -> Result<()> {
    let theme = if toggle {
        theme::toggle_theme(prefs).await.context("Failed to save theme")?
    } else {
        theme::load_theme(prefs).await.context("Failed to read theme")?
    };
    println!("{} {}", "Theme:".green(), theme.label());
    Ok(())
}

/// Load the list, apply one mutation, print the result and wait for the write.
async fn run_task_session<F>(cli: &Cli, config: &Config, prefs: Arc<dyn Preferences>, apply: F) -> Result<()>
where
    F: FnOnce(&mut TaskStore) -> Result<()>,
{
    let theme = theme::load_theme(prefs.as_ref()).await.unwrap_or_else(|e| {
        log::warn!("Failed to read theme, using default: {}", e);
        Theme::default()
    });

    let mut store = TaskStore::new(prefs);
    if let LoadOutcome::Recovered { reason } = store.load().await.context("Failed to load tasks")? {
        println!("{} {}", "Stored task list was unreadable and has been reset:".yellow(), reason);
    }

    if cli.ascending {
        store.toggle_sort_order();
    }

    apply(&mut store)?;

    print!("{}", render::render_tasks(store.tasks(), theme));
    if config.display.show_stats && !store.is_empty() {
        println!("{}", render::render_stats(store.stats(), theme));
    }

    store.flush().await.context("Failed to save tasks")?;
    Ok(())
}

/// Convert a 1-based task number from the CLI into a store index.
fn to_index(number: usize, store: &TaskStore) -> Result<usize> {
    if number == 0 || number > store.len() {
        return Err(eyre!("No task #{} (the list has {} tasks)", number, store.len()));
    }
    Ok(number - 1)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging before anything else can log
    setup_logging(cli.is_verbose()).context("Failed to setup logging")?;

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).await.context("Application failed")?;

    Ok(())
}
