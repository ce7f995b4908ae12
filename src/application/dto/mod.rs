/// Data Transfer Objects for the application layer
///
/// DTOs carry data between the CLI, the use cases and the formatters,
/// keeping the domain types out of the command surface.
mod detail_response;
mod search_request;
mod search_response;

pub use detail_response::DetailResponse;
pub use search_request::SearchRequest;
pub use search_response::SearchResponse;
