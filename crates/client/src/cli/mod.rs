//! CLI command definitions.

pub mod inquiries;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the Unitas LogistiX API.
#[derive(Debug, Parser)]
#[command(name = "logistix-client")]
#[command(about = "CLI client for the Unitas LogistiX API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "LOGISTIX_URL", default_value = "http://localhost:5000")]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Server health check.
    Health,
    /// Look up a shipment by tracking number.
    Track {
        /// Tracking number, e.g. ULX123456789.
        number: String,
    },
    /// Send a message through the contact form.
    Contact(inquiries::ContactArgs),
    /// Request a detailed quote.
    Quote(inquiries::QuoteArgs),
    /// Ask for a call back about a quote.
    GetQuote(inquiries::GetQuoteArgs),
    /// Subscribe an address to the newsletter.
    Subscribe {
        /// Email address.
        email: String,
    },
}
