/// Application layer - use cases and their request/response DTOs.
pub mod dto;
pub mod use_cases;
