// ============================================================================
// simple-cross
// Replays an actions file through the exchange and prints every report
// ============================================================================

use anyhow::{Context, Result};
use clap::Parser;
use simple_cross::prelude::*;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(name = "simple-cross", version, about = "Limit order matching engine")]
struct Cli {
    /// File with one action per line (O, X or P)
    #[arg(value_name = "ACTIONS", default_value = "actions.txt")]
    actions: PathBuf,

    /// Maximum number of live orders across all symbols
    #[arg(long)]
    max_orders: Option<usize>,

    /// Maximum number of symbols
    #[arg(long)]
    max_symbols: Option<usize>,

    /// Execute at the resting order's price instead of the incoming one
    #[arg(long)]
    resting_price: bool,
}

impl Cli {
    fn router(&self) -> Result<SymbolRouter> {
        let mut builder = RouterBuilder::new().with_event_handler(Arc::new(LoggingEventHandler));

        if let Some(max) = self.max_orders {
            builder = builder.with_max_live_orders(max);
        }
        if let Some(max) = self.max_symbols {
            builder = builder.with_max_symbols(max);
        }
        if self.resting_price {
            builder = builder.with_price_rule(ExecutionPriceRule::Resting);
        }

        builder.build().context("invalid router configuration")
    }
}

#[cfg(feature = "logging")]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "simple_cross=warn".into()),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    init_tracing();

    let mut exchange = Exchange::with_router(cli.router()?);

    let file = File::open(&cli.actions)
        .with_context(|| format!("failed to open {}", cli.actions.display()))?;
    let reader = BufReader::new(file);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for line in reader.lines() {
        let line = line.with_context(|| format!("failed to read {}", cli.actions.display()))?;
        if line.trim().is_empty() {
            continue;
        }

        for report in exchange.action(&line) {
            writeln!(out, "{}", report)?;
        }
    }

    out.flush()?;
    Ok(())
}
