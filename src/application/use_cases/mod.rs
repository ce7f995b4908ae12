mod search_vehicles;
mod vehicle_detail;

pub use search_vehicles::SearchVehiclesUseCase;
pub use vehicle_detail::GetVehicleDetailUseCase;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while upstream calls are in flight.
fn fetch_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("   {spinner:.green} {msg}")
            .expect("Failed to set progress bar template"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}
