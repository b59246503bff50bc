//! lexicard: ingest a vocabulary table and print the cards as JSON.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use lexicard_core::{ingest_path, DEFAULT_DELIMITER};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "lexicard",
    about = "Convert tabular vocabulary data into normalized card records"
)]
struct Cli {
    /// Input file: delimited text, or a spreadsheet (.xlsx/.xls/.ods).
    file: PathBuf,

    /// Field delimiter for text input.
    #[arg(short, long, default_value_t = DEFAULT_DELIMITER)]
    delimiter: char,

    /// Id assigned to a card from the first row; later cards follow
    /// their row ordinal.
    #[arg(long, default_value_t = 0)]
    id_offset: i64,

    /// Print one pretty JSON array instead of a card per line.
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let run = ingest_path(&cli.file, cli.delimiter, cli.id_offset)
        .with_context(|| format!("ingesting {}", cli.file.display()))?;

    if run.is_empty_input() {
        tracing::warn!("input contained no rows");
    } else if run.no_cards_found() {
        tracing::warn!(rows = run.rows_seen, "no valid cards found");
    } else {
        tracing::info!(
            cards = run.cards.len(),
            rows = run.rows_seen,
            "ingestion complete"
        );
    }

    if cli.pretty {
        println!("{}", serde_json::to_string_pretty(&run.cards)?);
    } else {
        for card in &run.cards {
            println!("{}", serde_json::to_string(card)?);
        }
    }

    Ok(())
}
