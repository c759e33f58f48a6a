//! Filter state manager
//!
//! Owns the canonical [`FilterState`]. Every mutation goes through
//! [`FilterManager::update_filter`] or a reset, and is written to storage
//! before returning.

use super::persist::{self, FilterStorage};
use super::predicate::{self, is_range_active};
use super::query::{self, ApiParams, SearchQuery};
use super::types::{DATE_FORMAT, FilterState, FilterType, FilterValue, ScoreRange};
use crate::config::FilterSettings;
use crate::logging;
use crate::models::{FilterOption, Game};

pub struct FilterManager<S: FilterStorage> {
    state: FilterState,
    settings: FilterSettings,
    storage: S,
}

impl<S: FilterStorage> FilterManager<S> {
    /// Seed the state from storage, or the defaults when nothing usable is stored
    pub fn load(storage: S, settings: FilterSettings) -> Self {
        let state = persist::load_state(&storage, &settings.storage_key, &defaults_for(&settings));
        Self { state, settings, storage }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn settings(&self) -> &FilterSettings {
        &self.settings
    }

    fn domain(&self) -> ScoreRange {
        self.settings.metacritic_domain
    }

    fn default_state(&self) -> FilterState {
        defaults_for(&self.settings)
    }

    /// Replace exactly one dimension. A value of the wrong kind for the
    /// dimension is ignored.
    pub fn update_filter(&mut self, filter_type: &FilterType, value: FilterValue) {
        let state = &mut self.state;
        let applied = match (filter_type, value) {
            (FilterType::Name, FilterValue::Text(name)) => {
                state.name = name;
                true
            }
            (FilterType::Genres, FilterValue::Selection(values)) => {
                state.genres = values;
                true
            }
            (FilterType::Platforms, FilterValue::Selection(values)) => {
                state.platforms = values;
                true
            }
            (FilterType::Stores, FilterValue::Selection(values)) => {
                state.stores = values;
                true
            }
            (FilterType::Tags, FilterValue::Selection(values)) => {
                state.tags = values;
                true
            }
            (FilterType::DateRange, FilterValue::Dates(range)) => {
                state.date_range = range;
                true
            }
            (FilterType::MetacriticRange, FilterValue::Range(range)) => {
                state.metacritic_range = range;
                true
            }
            (FilterType::Custom(tag), value) => {
                state.extras.insert(tag.clone(), value);
                true
            }
            (filter_type, value) => {
                logging::warn(&format!(
                    "FilterState: ignoring {} value for '{}'",
                    value.kind(),
                    filter_type
                ));
                false
            }
        };
        if applied {
            self.persist();
        }
    }

    pub fn set_ordering(&mut self, ordering: impl Into<String>) {
        self.state.ordering = ordering.into();
        self.persist();
    }

    /// Restore the defaults and persist them
    pub fn reset_filters(&mut self) {
        self.state = self.default_state();
        self.persist();
    }

    pub fn clear_filters(&mut self) {
        self.reset_filters();
    }

    /// Return one dimension to its unset value
    pub fn clear_filter(&mut self, filter_type: &FilterType) {
        let defaults = self.default_state();
        match filter_type {
            FilterType::Custom(tag) => {
                self.state.extras.remove(tag);
                self.persist();
            }
            other => {
                if let Some(value) = defaults.value_of(other) {
                    self.update_filter(other, value);
                }
            }
        }
    }

    fn persist(&self) {
        if let Err(e) = persist::save_state(&self.storage, &self.settings.storage_key, &self.state) {
            logging::warn(&format!("FilterState: failed to persist filters: {}", e));
        }
    }

    pub fn active_filters(&self) -> Vec<FilterType> {
        active_dimensions(&self.state, self.domain())
    }

    pub fn has_active_filters(&self) -> bool {
        !self.active_filters().is_empty()
    }

    pub fn active_filters_count(&self) -> usize {
        self.active_filters().len()
    }

    pub fn filtered_games(&self, games: &[Game]) -> Vec<Game> {
        predicate::filter_games(games, &self.state, self.domain())
    }

    pub fn api_params(&self) -> ApiParams {
        query::api_params(&self.state, &self.settings)
    }

    pub fn search_query(&self, page: u32) -> SearchQuery {
        SearchQuery::new(self.api_params(), page, self.settings.page_size)
    }
}

/// Unset state under `settings`: the full metacritic domain and the default
/// ordering
pub fn defaults_for(settings: &FilterSettings) -> FilterState {
    FilterState {
        ordering: settings.default_ordering.clone(),
        ..persist::default_state(settings.metacritic_domain)
    }
}

/// Built-in dimensions whose value differs from unset. The date range and
/// metacritic range each count once.
pub fn active_dimensions(state: &FilterState, domain: ScoreRange) -> Vec<FilterType> {
    FilterType::builtin()
        .iter()
        .filter(|filter_type| match filter_type {
            FilterType::Name => !state.name.trim().is_empty(),
            FilterType::DateRange => state.date_range.is_active(),
            FilterType::MetacriticRange => is_range_active(state.metacritic_range, domain),
            other => state.selection(other).is_some_and(|values| !values.is_empty()),
        })
        .cloned()
        .collect()
}

/// Short human label for an active dimension, resolving option values to
/// their labels where possible
pub fn summarize(state: &FilterState, filter_type: &FilterType, options: &[FilterOption]) -> String {
    let label_of = |value: &String| {
        options
            .iter()
            .find(|o| o.value == *value)
            .map(|o| o.label.clone())
            .unwrap_or_else(|| value.clone())
    };

    match filter_type {
        FilterType::Name => format!("\"{}\"", state.name.trim()),
        FilterType::DateRange => match state.date_range.bounds() {
            (Some(start), None) => format!("From {}", start.format(DATE_FORMAT)),
            (None, Some(end)) => format!("Until {}", end.format(DATE_FORMAT)),
            (Some(start), Some(end)) => format!("{} to {}", start.format(DATE_FORMAT), end.format(DATE_FORMAT)),
            (None, None) => String::new(),
        },
        FilterType::MetacriticRange => {
            format!("Metacritic {}-{}", state.metacritic_range.min, state.metacritic_range.max)
        }
        FilterType::Custom(tag) => tag.clone(),
        category => state
            .selection(category)
            .unwrap_or_default()
            .iter()
            .map(label_of)
            .collect::<Vec<_>>()
            .join(", "),
    }
}
