use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes let scripts distinguish lookup misses from
/// hard failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the command produced output
    Success = 0,
    /// A search or detail lookup matched nothing in the catalog
    NotFound = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (missing config, network error, bad upstream payload, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::NotFound => write!(f, "Not Found (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Failure taxonomy for catalog lookups.
///
/// Deliberately small: the upstream API either answers, answers with
/// something unusable, or has nothing matching. Everything else travels
/// as plain anyhow context.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Missing required environment variable: {name}\n\n💡 Hint: export {name} before running blinker (see README for the full list)")]
    MissingConfig { name: String },

    #[error("Invalid configuration value for {name}\nReason: {reason}")]
    InvalidConfig { name: String, reason: String },

    #[error("Non-JSON response from upstream\nURL: {url}\nStatus: {status}\nBody: {snippet}\n\n💡 Hint: Check that the base URL points at the vehicle-data API and the RapidAPI headers are valid")]
    NonJsonResponse {
        url: String,
        status: u16,
        snippet: String,
    },

    #[error("Upstream API returned status {status}\nURL: {url}\nBody: {snippet}")]
    UpstreamStatus {
        url: String,
        status: u16,
        snippet: String,
    },

    #[error("No make in the catalog matches \"{query}\"\n\n💡 Hint: Try a manufacturer name such as \"toyota\" or \"bmw\"")]
    NoMatchingMake { query: String },

    #[error("Malformed vehicle id: \"{id}\"\nReason: {reason}\n\n💡 Hint: Use the id printed on a search result card, or a 17-character VIN")]
    MalformedVehicleId { id: String, reason: String },

    #[error("Vehicle not found: \"{id}\"")]
    VehicleNotFound { id: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}

impl CatalogError {
    /// True for the "catalog has no answer" cases, which exit with
    /// their own code instead of the generic application error.
    pub fn is_lookup_miss(&self) -> bool {
        matches!(
            self,
            CatalogError::NoMatchingMake { .. } | CatalogError::VehicleNotFound { .. }
        )
    }
}
