use std::ops::RangeInclusive;

/// Model years the subscription catalog offers.
const SUBSCRIPTION_YEARS: RangeInclusive<u16> = 2015..=2020;
/// Year used when the requested one falls outside the offered range.
const FALLBACK_YEAR: u16 = 2018;

/// SearchRequest - input for the search use case.
///
/// Carries the raw query; normalization and year clamping happen
/// through the accessors so every consumer sees the same rules.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub query: String,
    pub state: String,
    pub year: Option<u16>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, state: impl Into<String>, year: Option<u16>) -> Self {
        Self {
            query: query.into(),
            state: state.into(),
            year,
        }
    }

    /// Query as matched against make names: trimmed and lowercased.
    pub fn normalized_query(&self) -> String {
        self.query.trim().to_lowercase()
    }

    /// Requested year clamped into the offered range.
    pub fn clamped_year(&self) -> Option<String> {
        self.year.map(|year| {
            if SUBSCRIPTION_YEARS.contains(&year) {
                year.to_string()
            } else {
                FALLBACK_YEAR.to_string()
            }
        })
    }

    /// Header line printed above the results grid.
    pub fn title(&self) -> String {
        let query = self.query.trim();
        if query.is_empty() {
            format!("Results in {}", self.state)
        } else {
            format!("Results for \"{}\" in {}", query, self.state)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_query_trims_and_lowercases() {
        let request = SearchRequest::new("  ToYoTa  ", "HI", None);
        assert_eq!(request.normalized_query(), "toyota");
    }

    #[test]
    fn test_year_inside_range_is_kept() {
        let request = SearchRequest::new("toyota", "HI", Some(2016));
        assert_eq!(request.clamped_year().as_deref(), Some("2016"));
    }

    #[test]
    fn test_year_outside_range_falls_back() {
        for year in [1999, 2014, 2021, 9999] {
            let request = SearchRequest::new("toyota", "HI", Some(year));
            assert_eq!(request.clamped_year().as_deref(), Some("2018"));
        }
    }

    #[test]
    fn test_no_year_stays_absent() {
        let request = SearchRequest::new("toyota", "HI", None);
        assert!(request.clamped_year().is_none());
    }

    #[test]
    fn test_title_with_query() {
        let request = SearchRequest::new(" toyota ", "HI", None);
        assert_eq!(request.title(), "Results for \"toyota\" in HI");
    }

    #[test]
    fn test_title_without_query() {
        let request = SearchRequest::new("   ", "HI", None);
        assert_eq!(request.title(), "Results in HI");
    }
}
