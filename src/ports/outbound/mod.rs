/// Outbound ports (driven ports) - infrastructure interfaces
///
/// These ports define the interfaces the application core uses to
/// reach external systems (the vehicle-data API, console, file system).
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod vehicle_source;

pub use formatter::CatalogFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use vehicle_source::{MakeRecord, ModelRecord, TrimRecord, VehicleSource};
