//! Coin Shop Screen
//!
//! Terminal rendition of the "Buy Coins" screen. User commands and host
//! messages are read from stdin, the screen is printed to stdout and logs go
//! to stderr.

mod config;
mod console;
mod shutdown;

use clap::Parser;
use coinshop_core::events::{HostMessageSender, host_message_channel};
use coinshop_core::purchase::PurchasePhase;
use coinshop_core::screen::CoinPurchaseScreen;
use coinshop_sdk::client::CoinShopClient;
use config::ConfigLoader;
use console::{ConsoleCommand, ConsoleInput, HELP, parse_line, render};
use shutdown::shutdown_signal;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

/// Coin Shop - buy coin packages from the terminal
#[derive(Parser, Debug)]
#[command(name = "coinshop-screen")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, default_value = "./coinshop.toml")]
    config: PathBuf,

    /// Override the API base URL (e.g., http://localhost:4000)
    #[arg(short, long, env = "COINSHOP_BASE_URL")]
    base_url: Option<Url>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Args::parse();

    tracing::info!("Starting coinshop-screen v{}", env!("CARGO_PKG_VERSION"));

    let api_config = ConfigLoader::new(&args.config, args.base_url)
        .load()
        .map_err(|e| {
            tracing::error!("Failed to load configuration: {}", e);
            e
        })?;
    tracing::info!(base_url = %api_config.base_url, "Configuration loaded");

    let client = Arc::new(CoinShopClient::new(api_config)?);
    let mut screen = CoinPurchaseScreen::new(client);

    let (host_tx, host_rx) = host_message_channel();
    let (command_tx, mut command_rx) = mpsc::channel(16);
    let input = spawn_input_reader(host_tx, command_tx);
    let overlay = spawn_processing_overlay(screen.watch_phase());

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    println!("Loading...");
    let activated = tokio::select! {
        result = screen.activate(host_rx) => {
            result?;
            true
        }
        _ = &mut shutdown => false,
    };
    if !activated {
        input.abort();
        overlay.abort();
        screen.teardown().await;
        return Ok(());
    }
    println!("{}", render(&screen));
    println!("type `help` for commands");

    loop {
        let command = tokio::select! {
            biased;

            _ = &mut shutdown => break,
            command = command_rx.recv() => command,
        };
        let Some(command) = command else {
            break;
        };

        match command {
            ConsoleCommand::Quit => break,
            ConsoleCommand::Help => println!("{HELP}"),
            ConsoleCommand::Render => println!("{}", render(&screen)),
            ConsoleCommand::Action(action) => {
                let interrupted = tokio::select! {
                    result = screen.dispatch(action) => {
                        if let Err(e) = result {
                            println!("{e}");
                        }
                        false
                    }
                    _ = &mut shutdown => true,
                };
                if interrupted {
                    break;
                }
                println!("{}", render(&screen));
            }
        }
    }

    input.abort();
    overlay.abort();
    screen.teardown().await;
    tracing::info!("Screen closed");
    Ok(())
}

/// Read stdin line by line.
///
/// Host messages go straight to the bridge so identity updates never wait
/// behind a pending purchase. Everything else goes to the main loop. End of
/// input is reported as `Quit`.
fn spawn_input_reader(
    host_tx: HostMessageSender,
    command_tx: mpsc::Sender<ConsoleCommand>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to read stdin");
                    break;
                }
            };
            match parse_line(&line) {
                Ok(None) => {}
                Ok(Some(ConsoleInput::Host(message))) => {
                    if host_tx.send(message).await.is_err() {
                        tracing::warn!("Host channel closed, message dropped");
                    }
                }
                Ok(Some(ConsoleInput::Command(command))) => {
                    if command_tx.send(command).await.is_err() {
                        return;
                    }
                }
                Err(e) => println!("{e}"),
            }
        }
        let _ = command_tx.send(ConsoleCommand::Quit).await;
    })
}

/// Print the blocking overlay whenever a purchase goes in flight.
fn spawn_processing_overlay(mut phase: watch::Receiver<PurchasePhase>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while phase.changed().await.is_ok() {
            if *phase.borrow_and_update() == PurchasePhase::Submitting {
                println!("Processing...");
            }
        }
    })
}

/// Initialize the tracing subscriber with environment-based filtering.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,reqwest=warn,hyper=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
