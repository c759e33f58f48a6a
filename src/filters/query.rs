//! Search API parameters derived from the filter state

use serde::{Deserialize, Serialize};

use super::predicate::is_range_active;
use super::types::{DATE_FORMAT, FilterState};
use crate::config::FilterSettings;

/// Flat query parameters for the paginated search endpoint. Only active
/// dimensions are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genres: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platforms: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stores: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dates: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metacritic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordering: Option<String>,
}

impl ApiParams {
    /// Present keys and values, in a stable order
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("search", &self.search),
            ("genres", &self.genres),
            ("platforms", &self.platforms),
            ("stores", &self.stores),
            ("tags", &self.tags),
            ("dates", &self.dates),
            ("metacritic", &self.metacritic),
            ("ordering", &self.ordering),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_deref().map(|v| (key, v)))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs().is_empty()
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn joined(values: &[String]) -> Option<String> {
    (!values.is_empty()).then(|| values.join(","))
}

fn format_bound(value: f64) -> String {
    // Whole scores print without a fractional part
    if value.fract() == 0.0 && value.is_finite() {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

pub fn api_params(state: &FilterState, settings: &FilterSettings) -> ApiParams {
    let range = state.metacritic_range;
    let dates = &state.date_range;

    ApiParams {
        search: non_empty(&state.name),
        genres: joined(&state.genres),
        platforms: joined(&state.platforms),
        stores: joined(&state.stores),
        tags: joined(&state.tags),
        dates: dates.is_active().then(|| {
            let (start, end) = dates.bounds();
            let start = start.map_or_else(|| settings.date_floor.clone(), |d| d.format(DATE_FORMAT).to_string());
            let end = end.map_or_else(|| settings.date_ceiling.clone(), |d| d.format(DATE_FORMAT).to_string());
            format!("{},{}", start, end)
        }),
        metacritic: is_range_active(range, settings.metacritic_domain)
            .then(|| format!("{},{}", format_bound(range.min), format_bound(range.max))),
        ordering: non_empty(&state.ordering),
    }
}

/// One page request against the search collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub params: ApiParams,
    pub page: u32,
    pub page_size: u32,
}

impl SearchQuery {
    pub fn new(params: ApiParams, page: u32, page_size: u32) -> Self {
        Self {
            params,
            page: page.max(1),
            page_size,
        }
    }

    /// URL-encoded query string, without the leading `?`
    pub fn to_query_string(&self) -> String {
        let page = self.page.to_string();
        let page_size = self.page_size.to_string();
        let mut pairs = self.params.pairs();
        pairs.push(("page", page.as_str()));
        pairs.push(("page_size", page_size.as_str()));

        pairs
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::types::{DateRange, ScoreRange};

    #[test]
    fn test_default_state_has_no_params() {
        let params = api_params(&FilterState::default(), &FilterSettings::default());
        assert!(params.is_empty());
        assert_eq!(serde_json::to_value(&params).unwrap(), serde_json::json!({}));
    }

    #[test]
    fn test_active_dimensions_mapped() {
        let state = FilterState {
            name: " zelda ".to_string(),
            genres: vec!["4".to_string(), "51".to_string()],
            tags: vec!["31".to_string()],
            metacritic_range: ScoreRange::new(70.0, 100.0),
            ordering: "-rating".to_string(),
            ..FilterState::default()
        };
        let params = api_params(&state, &FilterSettings::default());

        assert_eq!(params.search.as_deref(), Some("zelda"));
        assert_eq!(params.genres.as_deref(), Some("4,51"));
        assert_eq!(params.platforms, None);
        assert_eq!(params.stores, None);
        assert_eq!(params.tags.as_deref(), Some("31"));
        assert_eq!(params.dates, None);
        assert_eq!(params.metacritic.as_deref(), Some("70,100"));
        assert_eq!(params.ordering.as_deref(), Some("-rating"));
    }

    #[test]
    fn test_open_date_bounds_use_sentinels() {
        let settings = FilterSettings::default();
        let mut state = FilterState {
            date_range: DateRange { start: "2020-01-01".to_string(), end: String::new() },
            ..FilterState::default()
        };
        assert_eq!(api_params(&state, &settings).dates.as_deref(), Some("2020-01-01,2100-12-31"));

        state.date_range = DateRange { start: String::new(), end: "1999-12-31".to_string() };
        assert_eq!(api_params(&state, &settings).dates.as_deref(), Some("1900-01-01,1999-12-31"));
    }

    #[test]
    fn test_unparsable_date_bounds_not_sent() {
        let settings = FilterSettings::default();
        let mut state = FilterState {
            date_range: DateRange { start: "2020-0".to_string(), end: String::new() },
            ..FilterState::default()
        };
        assert_eq!(api_params(&state, &settings).dates, None);
        assert!(api_params(&state, &settings).is_empty());

        state.date_range.end = "2021-06-30".to_string();
        assert_eq!(api_params(&state, &settings).dates.as_deref(), Some("1900-01-01,2021-06-30"));
    }

    #[test]
    fn test_query_string_encoding() {
        let state = FilterState {
            name: "mario & luigi".to_string(),
            platforms: vec!["7".to_string(), "8".to_string()],
            ..FilterState::default()
        };
        let query = SearchQuery::new(api_params(&state, &FilterSettings::default()), 2, 20);
        assert_eq!(
            query.to_query_string(),
            "search=mario%20%26%20luigi&platforms=7%2C8&page=2&page_size=20"
        );
    }

    #[test]
    fn test_page_starts_at_one() {
        let query = SearchQuery::new(ApiParams::default(), 0, 40);
        assert_eq!(query.to_query_string(), "page=1&page_size=40");
    }
}
