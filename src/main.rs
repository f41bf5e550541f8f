use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use configuration::{Config, load_config, load_config_from};
use core_types::{Currency, PricingInput, ShipmentCosts};
use pricing::{PricingEngine, PricingResult};
use quote_delivery::{
    DeliveryError, DocumentExporter, EmailQuoteMailer, PdfExporter, QuoteMailer,
};
use rust_decimal::Decimal;
use std::path::PathBuf;
use trade_terms::TradeTermRegistry;

mod render;

/// The main entry point for the Incoterm price calculator.
fn main() -> Result<()> {
    // A missing .env file is fine; it only supplies INCOTERM__* overrides.
    let _ = dotenvy::dotenv();

    // Parse command-line arguments
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config_from(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => load_config().context("Failed to load config.toml")?,
    };
    let _log_guard = configuration::init_tracing(&config.logging)?;

    // The registry is built once and lent to everything that prices.
    let registry = TradeTermRegistry::standard();

    // Execute the appropriate command
    match cli.command {
        Commands::Terms { output } => handle_terms(&registry, output),
        Commands::Calculate { quote, output } => {
            let (result, currency) = price(&registry, &config, quote)?;
            print_quote(&result, currency, output)
        }
        Commands::Export { quote } => {
            let (result, currency) = price(&registry, &config, quote)?;
            print_quote(&result, currency, OutputFormat::Table)?;
            report_delivery(PdfExporter.export(&result, currency).map(|doc| {
                format!("Saved {}", doc.file_name)
            }))
        }
        Commands::Email { to, quote } => {
            let (result, currency) = price(&registry, &config, quote)?;
            print_quote(&result, currency, OutputFormat::Table)?;
            report_delivery(
                EmailQuoteMailer
                    .send(&result, currency, &to)
                    .map(|()| format!("Quote sent to {}", to)),
            )
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Estimate export pricing and seller/buyer liability under Incoterms 2020.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file to use instead of ./config.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the supported trade terms.
    Terms {
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,
    },
    /// Calculate a quote and print its price breakdown.
    Calculate {
        #[command(flatten)]
        quote: QuoteArgs,

        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,
    },
    /// Calculate a quote and download it as a PDF.
    Export {
        #[command(flatten)]
        quote: QuoteArgs,
    },
    /// Calculate a quote and email it.
    Email {
        /// Recipient email address.
        #[arg(long)]
        to: String,

        #[command(flatten)]
        quote: QuoteArgs,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

/// Shipment and cost data for one quote.
#[derive(Args)]
struct QuoteArgs {
    /// Trade-term code, e.g. FOB or CIF (case-sensitive).
    #[arg(long = "term")]
    trade_term: String,

    /// What is being shipped, e.g. "Cotton T-shirts".
    #[arg(long, default_value = "")]
    product: String,

    #[arg(long, default_value_t = 1)]
    quantity: u64,

    #[arg(long, default_value_t = Decimal::ZERO)]
    unit_price: Decimal,

    /// Display currency; defaults to the configured one.
    #[arg(long, value_enum)]
    currency: Option<Currency>,

    #[arg(long, default_value = "")]
    origin_country: String,

    #[arg(long, default_value = "")]
    origin_port: String,

    #[arg(long, default_value = "")]
    destination_country: String,

    #[arg(long, default_value = "")]
    destination_port: String,

    /// Local transportation at origin.
    #[arg(long, default_value_t = Decimal::ZERO)]
    local_transport: Decimal,

    #[arg(long, default_value_t = Decimal::ZERO)]
    inland_freight: Decimal,

    #[arg(long, default_value_t = Decimal::ZERO)]
    ocean_air_freight: Decimal,

    #[arg(long, default_value_t = Decimal::ZERO)]
    insurance: Decimal,

    #[arg(long, default_value_t = Decimal::ZERO)]
    customs_clearance: Decimal,

    /// Export duties and taxes.
    #[arg(long, default_value_t = Decimal::ZERO)]
    export_duties: Decimal,

    /// Markup on the seller's costs in percent; defaults to the configured one.
    #[arg(long = "markup")]
    markup_percentage: Option<Decimal>,
}

impl QuoteArgs {
    fn into_input(self, config: &Config) -> PricingInput {
        PricingInput {
            product_description: self.product,
            quantity: self.quantity,
            unit_price: self.unit_price,
            currency: self.currency.unwrap_or(config.defaults.currency),
            origin_country: self.origin_country,
            origin_port: self.origin_port,
            destination_country: self.destination_country,
            destination_port: self.destination_port,
            trade_term: self.trade_term,
            costs: ShipmentCosts {
                local_transport: self.local_transport,
                inland_freight: self.inland_freight,
                ocean_air_freight: self.ocean_air_freight,
                insurance: self.insurance,
                customs_clearance: self.customs_clearance,
                export_duties: self.export_duties,
            },
            markup_percentage: self
                .markup_percentage
                .unwrap_or(config.defaults.markup_percentage),
        }
    }
}

// ==============================================================================
// Command Logic
// ==============================================================================

fn handle_terms(registry: &TradeTermRegistry, output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Table => println!("{}", render::terms_table(registry.list_all())),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&registry.summaries())?),
    }
    Ok(())
}

/// Validates the user's input, then prices it.
fn price(
    registry: &TradeTermRegistry,
    config: &Config,
    args: QuoteArgs,
) -> Result<(PricingResult, Currency)> {
    let input = args.into_input(config);
    input.validate().context("Please check your inputs")?;

    let result = PricingEngine::new(registry)
        .calculate(&input)
        .inspect_err(|e| {
            tracing::warn!(error = %e, trade_term = %input.trade_term, "Calculation failed.")
        })
        .with_context(|| {
            let codes: Vec<&str> = registry.codes().collect();
            format!("Could not calculate the price (supported terms: {})", codes.join(", "))
        })?;

    tracing::info!(trade_term = %result.trade_term, "Price calculated.");
    Ok((result, input.currency))
}

fn print_quote(result: &PricingResult, currency: Currency, output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Table => println!("{}", render::render_quote(result, currency)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
    }
    Ok(())
}

/// Prints the outcome of a delivery action. "Not yet available" is reported, not failed.
fn report_delivery(outcome: Result<String, DeliveryError>) -> Result<()> {
    match outcome {
        Ok(message) => {
            println!("{}", message);
            Ok(())
        }
        Err(DeliveryError::NotYetAvailable(feature)) => {
            println!();
            println!("{} is not yet available. The quote above was not sent or saved.", feature);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
