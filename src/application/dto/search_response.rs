use serde::Serialize;

use crate::catalog::domain::SearchResultCard;

/// SearchResponse - what the search use case hands to a formatter.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    /// Pre-built results header.
    pub title: String,
    /// At most six cards, already resolved to displayable values.
    pub cards: Vec<SearchResultCard>,
}
