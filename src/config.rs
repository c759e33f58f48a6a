//! Filter settings and the default panel layout

use serde::{Deserialize, Serialize};

use crate::filters::{FilterConfig, FilterType, ScoreRange};
use crate::models::{Catalog, FilterOption};

pub const DEFAULT_STORAGE_KEY: &str = "game-filters";

/// Host-tunable settings. Every field falls back to its default when the
/// host omits it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterSettings {
    /// localStorage key the filter state is persisted under
    pub storage_key: String,
    /// Absolute domain of the metacritic slider
    pub metacritic_domain: ScoreRange,
    pub metacritic_step: f64,
    /// Substituted for an unset start date in the `dates` query parameter
    pub date_floor: String,
    /// Substituted for an unset end date in the `dates` query parameter
    pub date_ceiling: String,
    pub page_size: u32,
    pub search_debounce_ms: u32,
    pub default_ordering: String,
    /// Category tags (e.g. `"platforms"`) rendered as single-select dropdowns
    pub single_select: Vec<String>,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            metacritic_domain: ScoreRange::FULL,
            metacritic_step: 1.0,
            date_floor: "1900-01-01".to_string(),
            date_ceiling: "2100-12-31".to_string(),
            page_size: 20,
            search_debounce_ms: 300,
            default_ordering: String::new(),
            single_select: Vec::new(),
        }
    }
}

/// Sort orders understood by the search collaborator, as (value, label)
pub fn ordering_options() -> Vec<FilterOption> {
    [
        ("", "Relevance"),
        ("name", "Name (A-Z)"),
        ("-name", "Name (Z-A)"),
        ("-released", "Newest first"),
        ("released", "Oldest first"),
        ("-added", "Recently added"),
        ("-rating", "Top rated"),
        ("-metacritic", "Metascore"),
    ]
    .into_iter()
    .map(|(value, label)| FilterOption::new(value, label))
    .collect()
}

/// Panel sections for the built-in dimensions. Category sections with no
/// options are disabled.
pub fn default_filter_configs(catalog: &Catalog, settings: &FilterSettings) -> Vec<FilterConfig> {
    let category = |filter_type: FilterType, title: &str, options: &[FilterOption]| {
        let single = settings.single_select.iter().any(|tag| tag == filter_type.as_str());
        let config = FilterConfig::new(filter_type, title)
            .placeholder(format!("Any {}", title.to_lowercase()))
            .options(options.to_vec())
            .enabled(!options.is_empty());
        if single { config.single() } else { config }
    };

    vec![
        FilterConfig::new(FilterType::Name, "Search").placeholder("Search games..."),
        category(FilterType::Genres, "Genres", &catalog.genres),
        category(FilterType::Platforms, "Platforms", &catalog.platforms),
        category(FilterType::Stores, "Stores", &catalog.stores),
        category(FilterType::Tags, "Tags", &catalog.tags),
        FilterConfig::new(FilterType::DateRange, "Release Date"),
        FilterConfig::new(FilterType::MetacriticRange, "Metacritic")
            .bounds(settings.metacritic_domain, settings.metacritic_step),
    ]
}
