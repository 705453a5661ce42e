//! Reading CLI - draw a tarot reading from the terminal.
//!
//! Uses the same catalog, draw engine and prompt builder as the backend,
//! without starting a server. `--interpret` calls the configured
//! interpretation service.

mod output;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use output::{ReadingReport, Renderer};
use tarot_backend::config::{InterpreterSettings, ReadingConfig};
use tarot_backend::domain::{DeckVariant, PersonaStyle};
use tarot_backend::interpretation::{ChatCompletionsClient, USER_MESSAGE};
use tarot_backend::services::readings::{build_request, draw_complete_reading, interpret_reading};
use tarot_backend::services::ReadingContext;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "reading-cli")]
#[command(about = "Draw a tarot reading and optionally interpret it")]
struct Args {
    /// Spread id (see --list)
    #[arg(short, long, default_value = "three")]
    spread: String,

    /// Persona the interpretation is written in
    #[arg(short, long, default_value = "classic", value_parser = parse_persona)]
    persona: PersonaStyle,

    /// Deck variant; defaults to the configured deck
    #[arg(short, long, value_parser = parse_deck)]
    deck: Option<DeckVariant>,

    /// Seed for a reproducible shuffle and reversals
    #[arg(long)]
    seed: Option<u64>,

    /// Question to focus the reading on
    #[arg(short, long, default_value = "")]
    question: String,

    /// Reading configuration file (overrides TAROT_READING_CONFIG)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Call the interpretation service
    #[arg(long)]
    interpret: bool,

    /// Print the generated prompt
    #[arg(long)]
    show_prompt: bool,

    /// List spreads, personas and decks, then exit
    #[arg(long)]
    list: bool,

    /// Output format
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_persona(raw: &str) -> Result<PersonaStyle, String> {
    raw.parse::<PersonaStyle>().map_err(|e| e.to_string())
}

fn parse_deck(raw: &str) -> Result<DeckVariant, String> {
    raw.parse::<DeckVariant>().map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Quiet by default; logs go to stderr so JSON output stays clean
    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => ReadingConfig::load(path)?,
        None => ReadingConfig::from_env()?,
    };
    let ctx = ReadingContext::from_config(&config)?;
    let renderer = match args.format {
        OutputFormat::Text => Renderer::Text,
        OutputFormat::Json => Renderer::Json,
    };

    if args.list {
        println!("{}", renderer.catalog(&ctx)?);
        return Ok(());
    }

    let deck = args.deck.unwrap_or_else(|| ctx.default_deck());
    let reading = draw_complete_reading(
        &ctx,
        &args.spread,
        deck,
        &args.question,
        args.persona,
        args.seed,
    )?;
    info!(spread = %reading.spread_id(), cards = reading.cards().len(), "reading drawn");

    let prompt = args.show_prompt.then(|| build_request(&ctx, &reading));

    let interpretation = if args.interpret {
        let settings = InterpreterSettings::from_env()?;
        let client = ChatCompletionsClient::new(&settings);
        match interpret_reading(&ctx, &client, &reading).await {
            Ok(text) => Some(Ok(text)),
            Err(err) => {
                warn!(error = %err, "interpretation failed");
                Some(Err(USER_MESSAGE.to_string()))
            }
        }
    } else {
        None
    };

    let report = ReadingReport::new(
        &ctx,
        &reading,
        deck,
        prompt,
        interpretation,
    );
    println!("{}", renderer.reading(&report)?);

    Ok(())
}
