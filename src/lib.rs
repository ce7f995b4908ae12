//! blinker - terminal browser for a vehicle-subscription catalog
//!
//! This library wraps a third-party vehicle-data API behind a small
//! hexagonal core: a cached, throttled outbound adapter normalizes the
//! API's loosely-shaped JSON into two fixed view models (search result
//! cards and vehicle detail records), and use cases drive the two
//! lookups the CLI exposes.
//!
//! # Architecture
//!
//! - **Domain Layer** (`catalog`): view models, the opaque vehicle id,
//!   and the mapping/fallback rules
//! - **Application Layer** (`application`): the search and detail use cases
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): network, console, formatter and file
//!   implementations of the ports
//! - **Shared** (`shared`): error taxonomy and the common `Result` alias
//!
//! # Example
//!
//! ```no_run
//! use blinker::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! // Configuration comes from the environment; absence is fatal.
//! let config = Config::from_env()?;
//!
//! // The caching decorator is transparent to the use case.
//! let source = CachingVehicleSource::new(CarApiVehicleSource::new(&config)?);
//! let use_case = SearchVehiclesUseCase::new(source, StderrProgressReporter::new());
//!
//! let request = SearchRequest::new("toyota", "HI", Some(2018));
//! let response = use_case.execute(request).await?;
//! println!("{} result(s)", response.cards.len());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
    pub use crate::adapters::outbound::network::{CachingVehicleSource, CarApiVehicleSource};
    pub use crate::application::dto::{DetailResponse, SearchRequest, SearchResponse};
    pub use crate::application::use_cases::{GetVehicleDetailUseCase, SearchVehiclesUseCase};
    pub use crate::catalog::domain::{SearchResultCard, VehicleDetail, VehicleId};
    pub use crate::config::Config;
    pub use crate::ports::outbound::{
        CatalogFormatter, MakeRecord, ModelRecord, OutputPresenter, ProgressReporter, TrimRecord,
        VehicleSource,
    };
    pub use crate::shared::error::CatalogError;
    pub use crate::shared::Result;
}
