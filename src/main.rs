//! Sundae CLI

use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use jiff::civil::Date;
use sundae::prelude::*;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "sundae", about = "Sundae pricing CLI", long_about = None)]
struct Cli {
    /// Catalog snapshot (YAML)
    #[arg(
        long,
        global = true,
        env = "SUNDAE_CATALOG",
        default_value = "fixtures/catalog.yml"
    )]
    catalog: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Price a sale line
    Quote(QuoteArgs),

    /// List configured promotions
    Promotions(PromotionsArgs),
}

#[derive(Debug, Args)]
struct QuoteArgs {
    /// Presentation id
    #[arg(long)]
    presentation: u64,

    /// Units to sell
    #[arg(long, default_value_t = 1)]
    quantity: u32,

    /// Sales channel (`local` or `pedidos_ya`)
    #[arg(long, default_value = "local")]
    channel: Channel,

    /// Reference date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    date: Option<Date>,
}

#[derive(Debug, Args)]
struct PromotionsArgs {
    /// Only list promotions for this presentation id
    #[arg(long)]
    presentation: Option<u64>,
}

fn main() -> Result<()> {
    let _env = dotenvy::dotenv();

    init_tracing();

    let cli = Cli::parse();

    let catalog = Catalog::load(&cli.catalog)
        .with_context(|| format!("failed to load catalog {}", cli.catalog.display()))?;

    let stdout = io::stdout();
    let handle = stdout.lock();

    match cli.command {
        Commands::Quote(args) => quote(&catalog, &args, handle),
        Commands::Promotions(args) => promotions(&catalog, &args, handle),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sundae=info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_target(true)
                .with_writer(io::stderr),
        )
        .with(filter)
        .init();
}

fn quote(catalog: &Catalog, args: &QuoteArgs, out: impl io::Write) -> Result<()> {
    let id = PresentationId(args.presentation);
    let presentation = catalog
        .presentation(id)
        .with_context(|| format!("unknown presentation {id}"))?;

    let fixed;
    let clock: &dyn Clock = match args.date {
        Some(date) => {
            fixed = FixedClock::new(date);
            &fixed
        }
        None => &SystemClock,
    };

    let engine = PricingEngine::new(clock, catalog.currency());
    let result = engine.compute_price(
        Some(presentation),
        catalog.promotions(),
        args.quantity,
        args.channel,
    );

    write_quote(out, presentation, args.channel, &result)?;

    Ok(())
}

fn promotions(catalog: &Catalog, args: &PromotionsArgs, out: impl io::Write) -> Result<()> {
    let filter = args.presentation.map(PresentationId);
    let selected = catalog
        .promotions()
        .iter()
        .filter(|promotion| filter.is_none_or(|id| promotion.presentation == id));

    write_promotions(out, catalog.presentations(), selected)?;

    Ok(())
}
