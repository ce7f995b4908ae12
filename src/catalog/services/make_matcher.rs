use crate::ports::outbound::MakeRecord;

/// Resolves a search query to one make: an exact case-insensitive name
/// match wins, otherwise the first substring match.
///
/// Callers pass the already-normalized (trimmed, lowercased) query; a
/// blank query never reaches this point.
pub struct MakeMatcher;

impl MakeMatcher {
    pub fn find<'a>(makes: &'a [MakeRecord], normalized_query: &str) -> Option<&'a MakeRecord> {
        makes
            .iter()
            .find(|m| m.name().to_lowercase() == normalized_query)
            .or_else(|| {
                makes
                    .iter()
                    .find(|m| m.name().to_lowercase().contains(normalized_query))
            })
    }
}
