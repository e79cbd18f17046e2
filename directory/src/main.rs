//! Vendor directory entry point
//!
//! Loads a vendor collection, then reads filter commands from stdin and
//! renders every view the controller publishes to stdout.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use shared::config::{DEFAULT_DEBOUNCE_MS, DEFAULT_LOAD_DELAY_MS};
use shared::{logging, DirectoryConfig, DirectoryView};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;
use tracing::warn;

use directory::render::render_view;
use directory::{
    BundledVendorSource, CliCommand, DirectoryController, DirectoryResult, FileVendorSource, VendorSource,
};

const COMPONENT: &str = "vendor-directory";

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "vendor-directory")]
#[command(about = "Searchable, filterable vendor directory")]
struct Args {
    /// JSON vendor dataset (uses the bundled sample dataset when omitted)
    #[arg(long)]
    data: Option<PathBuf>,

    /// Delay before search input is committed, in milliseconds
    #[arg(long, default_value_t = DEFAULT_DEBOUNCE_MS)]
    debounce_ms: u64,

    /// Simulated latency of the bundled dataset, in milliseconds
    #[arg(long, default_value_t = DEFAULT_LOAD_DELAY_MS)]
    load_delay_ms: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Print views as JSON instead of text cards
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logging::init_tracing_with_level(Some(&args.log_level));

    let config = DirectoryConfig::default().with_debounce(Duration::from_millis(args.debounce_ms));

    match args.data.clone() {
        Some(path) => run(FileVendorSource::new(path), config, args.json).await,
        None => {
            let delay = Duration::from_millis(args.load_delay_ms);
            run(BundledVendorSource::with_delay(delay), config, args.json).await
        }
    }
}

async fn run<S: VendorSource + 'static>(source: S, config: DirectoryConfig, json: bool) -> anyhow::Result<()> {
    logging::log_startup(COMPONENT, &source.describe());

    let handle = DirectoryController::spawn(source, config)?;

    // Render every published view until the controller goes away
    let mut views = handle.subscribe();
    let printer = tokio::spawn(async move {
        let first = views.borrow_and_update().clone();
        print_view(&first, json)?;
        while views.changed().await.is_ok() {
            let view = views.borrow_and_update().clone();
            print_view(&view, json)?;
        }
        DirectoryResult::Ok(())
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("reading stdin")? else {
                    logging::log_shutdown(COMPONENT, "stdin closed");
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                match line.parse::<CliCommand>() {
                    Ok(CliCommand::Quit) => {
                        logging::log_shutdown(COMPONENT, "quit requested");
                        break;
                    }
                    Ok(CliCommand::Show) => print_view(&handle.view(), json)?,
                    Ok(CliCommand::Directory(command)) => handle.send(command).await?,
                    Err(e) => {
                        warn!(error = %e, "Ignoring input line");
                        eprintln!("{e}. Commands: search <text>, industry <name>|all, verified on|off, pending on|off, clear, reload, show, quit");
                    }
                }
            }
            result = signal::ctrl_c() => {
                match result {
                    Ok(()) => logging::log_shutdown(COMPONENT, "Received Ctrl+C signal"),
                    Err(err) => logging::log_error(COMPONENT, "Signal handling", &err),
                }
                break;
            }
        }
    }

    handle.shutdown().await?;
    printer.await.context("view printer task")??;

    logging::log_success(COMPONENT, "Vendor directory stopped");
    Ok(())
}

fn print_view(view: &DirectoryView, json: bool) -> DirectoryResult<()> {
    if json {
        println!("{}", serde_json::to_string(view)?);
    } else {
        println!("{}", render_view(view));
    }
    Ok(())
}
