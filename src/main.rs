use clap::{Parser, Subcommand};
use datapulse_chart::{Extractor, Message, Result, Strategy, render};

use anyhow::Context;
use std::io::Read;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "datapulse-chart")]
#[command(about = "Extract and normalize charts embedded in assistant answers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the extracted chart descriptor as JSON (`null` if none).
    Extract {
        /// Answer text file; `-` or omitted reads stdin.
        #[arg(long)]
        input: Option<String>,

        /// Only run these strategies, in the given order.
        #[arg(long = "strategy", value_enum)]
        strategies: Vec<Strategy>,

        #[arg(long)]
        pretty: bool,
    },

    /// Print the chart's canonical `{x, y}` records as a JSON array.
    Normalize {
        #[arg(long)]
        input: Option<String>,
    },

    /// Write a self-contained HTML preview of the answer and its chart.
    Report {
        #[arg(long)]
        input: Option<String>,

        #[arg(short = 'o', long)]
        out: String,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Extract {
            input,
            strategies,
            pretty,
        } => {
            let text = read_input(input.as_deref())?;
            let extractor = if strategies.is_empty() {
                Extractor::default()
            } else {
                Extractor::with_strategies(strategies)
            };

            let extraction = extractor.extract_with_origin(&text);
            if let Some(e) = &extraction {
                info!(strategy = e.strategy.name(), "chart found");
            }
            let spec = extraction.map(|e| e.spec);
            let json = if pretty {
                serde_json::to_string_pretty(&spec)?
            } else {
                serde_json::to_string(&spec)?
            };
            println!("{}", json);
        }
        Commands::Normalize { input } => {
            let text = read_input(input.as_deref())?;
            let records = Message::from_answer(text).records();
            println!("{}", serde_json::to_string(&records)?);
        }
        Commands::Report { input, out } => {
            let text = read_input(input.as_deref())?;
            let message = Message::from_answer(text);
            let html = render::render_html_preview(&message)?;
            std::fs::write(&out, html).with_context(|| format!("write report {}", out))?;
            println!("Wrote {}", out);
        }
    }

    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        None | Some("-") => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("read answer from stdin")?;
            Ok(text)
        }
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("read answer file {}", path))
        }
    }
}
