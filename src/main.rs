//! CLI entry point for toastbus.
//!
//! Spawns a toast store, triggers the requested messages, and prints every
//! published list transition until the toasts drain. Useful for exercising a
//! display policy from the terminal before wiring the store into a frontend.
//!
//! # Usage
//!
//! Trigger two success toasts with the default policy:
//! ```bash
//! toastbus -m "Profile saved" -m "Upload finished"
//! ```
//!
//! Watch a sticky error flow as JSON lines under a custom config:
//! ```bash
//! toastbus --config demo.toml --kind error -m "Disk full" --json
//! ```

// Global allocator (Microsoft Rust Guidelines: M-MIMALLOC-APPS)
#[cfg(not(test))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use toastbus::config::{Settings, DEFAULT_CONFIG_PATH};
use toastbus::error::ToastError;
use toastbus::logging::{self, LogConfig, OutputFormat};
use toastbus::store::ToastStore;
use toastbus::toast::{ToastKind, ToastList};
use tracing::info;

#[derive(Parser)]
#[command(name = "toastbus")]
#[command(about = "Trigger toasts against a store and watch them drain", long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Message to trigger; repeat the flag for several toasts
    #[arg(short = 'm', long = "message")]
    messages: Vec<String>,

    /// Kind applied to every triggered message
    #[arg(short, long, default_value = "success")]
    kind: ToastKind,

    /// Print list transitions as JSON lines instead of plain text
    #[arg(long)]
    json: bool,

    /// Override the configured log level
    #[arg(long)]
    log_level: Option<String>,

    /// Log output format (pretty, compact, json)
    #[arg(long, default_value = "pretty")]
    log_format: OutputFormat,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load_from(&cli.config)?;
    if let Some(level) = cli.log_level.as_deref() {
        settings.application.log_level = level.to_string();
    }
    settings.validate().map_err(ToastError::Validation)?;

    let log_config = LogConfig::from_settings(&settings)
        .map_err(ToastError::Tracing)?
        .with_format(cli.log_format);
    logging::init(log_config).map_err(ToastError::Tracing)?;

    info!(
        name = %settings.application.name,
        config = %cli.config.display(),
        "starting toast demo"
    );

    if cli.messages.is_empty() {
        info!("no messages given; nothing to trigger");
        return Ok(());
    }

    let (store, toasts) = ToastStore::new(settings.store.clone());
    let store_task = tokio::spawn(store.run());

    let mut list = toasts.watch();
    for message in &cli.messages {
        toasts.trigger_toast_with(message, cli.kind);
    }

    // Print every published transition until the list drains
    loop {
        if list.changed().await.is_err() {
            break;
        }
        let current = list.borrow_and_update().clone();
        print_list(&current, cli.json)?;
        if current.is_empty() {
            break;
        }

        // Sticky kinds never drain on their own
        if current
            .iter()
            .all(|toast| settings.store.display.auto_dismiss(toast.kind).is_none())
        {
            info!("remaining toasts are sticky; clearing");
            toasts.clear();
        }
    }

    toasts.shutdown().await?;
    store_task.await?;
    Ok(())
}

fn print_list(list: &ToastList, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(list)?);
        return Ok(());
    }

    if list.is_empty() {
        println!("(no toasts)");
        return Ok(());
    }
    for toast in list {
        println!("{} (id {})", toast, toast.id);
    }
    println!("--");
    Ok(())
}
