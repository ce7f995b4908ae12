use clap::{Parser, Subcommand};

use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
use crate::ports::outbound::CatalogFormatter;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'text' or 'json'",
                s
            )),
        }
    }
}

impl OutputFormat {
    /// Creates a formatter instance for the specified output format
    pub fn create_formatter(&self) -> Box<dyn CatalogFormatter> {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }
}

/// Browse a vehicle-subscription catalog from the terminal
#[derive(Parser, Debug)]
#[command(name = "blinker")]
#[command(version)]
#[command(about = "Browse a vehicle-subscription catalog from the terminal", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search the catalog by make, state and year
    Search {
        /// Make to search for (ex: toyota, honda, bmw)
        #[arg(short, long)]
        query: String,

        /// Two-letter US state code
        #[arg(short, long, default_value = "HI")]
        state: String,

        /// Model year (2015-2020; anything else falls back to 2018)
        #[arg(short, long)]
        year: Option<u16>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Output file path (if not specified, outputs to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show the detail page for one vehicle id
    Vehicle {
        /// Id from a search result card, or a 17-character VIN
        id: String,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Output file path (if not specified, outputs to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
