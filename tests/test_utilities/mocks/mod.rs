mod mock_progress_reporter;
mod mock_vehicle_source;

pub use mock_progress_reporter::MockProgressReporter;
pub use mock_vehicle_source::MockVehicleSource;
