//! nport CLI binary.
//!
//! Runs the filing relay or performs a one-shot lookup from the terminal.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use nport_data::{FilingLookupService, FilingSummary, SecApiConfig};
use nport_server::{
    api::app_router,
    build_state,
    config::{Config, log_json_from_env},
    init_tracing,
};
use std::net::SocketAddr;
use std::process;

#[derive(Parser)]
#[command(name = "nport")]
#[command(about = "Most recent SEC N-PORT holdings for a fund", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP relay
    Serve {
        /// Listen address (overrides NPORT_LISTEN_ADDR)
        #[arg(long)]
        listen: Option<SocketAddr>,
    },

    /// Look up the most recent filing for a CIK and print it
    Lookup {
        /// Central Index Key of the filer (e.g. 0000884394)
        cik: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Text,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { listen } => serve(listen).await,
        Commands::Lookup { cik, format } => lookup(&cik, format).await,
    }
}

async fn serve(listen: Option<SocketAddr>) -> anyhow::Result<()> {
    let mut config = Config::from_env().context("invalid configuration")?;
    if let Some(addr) = listen {
        config.listen_addr = addr;
    }

    init_tracing(config.log_json);
    let state = build_state(&config)?;
    let router = app_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    tracing::info!("Listening on {}", config.listen_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}

async fn lookup(cik: &str, format: Format) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing(log_json_from_env());
    let service = FilingLookupService::from_config(SecApiConfig::from_env()?)?;
    let summary = service.get_recent_filing(cik).await?;

    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        Format::Text => print_summary(&summary),
    }
    Ok(())
}

fn print_summary(summary: &FilingSummary) {
    println!("{}", summary.registrant_name);
    println!(
        "{} holdings, total value ${:.2}\n",
        summary.holdings.len(),
        summary.total_value()
    );
    println!("{:<40} {:<12} {:>18} {:>20}", "Name", "CUSIP", "Balance", "Value (USD)");
    println!("{}", "-".repeat(93));
    for holding in &summary.holdings {
        println!(
            "{:<40} {:<12} {:>18} {:>20.2}",
            truncate(&holding.name, 40),
            holding.cusip,
            holding.balance,
            holding.value
        );
    }
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(width - 1).collect();
        out.push('…');
        out
    }
}
