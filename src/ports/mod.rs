/// Ports layer - interface definitions between the application core
/// and the infrastructure adapters.
pub mod outbound;
