/// Network adapters for the upstream vehicle-data API
mod caching_source;
mod carapi_client;

pub use caching_source::CachingVehicleSource;
pub use carapi_client::CarApiVehicleSource;
