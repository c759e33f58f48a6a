//! Reactive wrapper around [`FilterManager`]
//!
//! Components get a `Copy` handle; derived values are memos so the game list,
//! the active-filter badge and the API parameters recompute only when the
//! filter state or the candidate games change.

use leptos::prelude::*;

use super::persist::BrowserStorage;
use super::query::{ApiParams, SearchQuery};
use super::state::FilterManager;
use super::types::{FilterState, FilterType, FilterValue};
use crate::config::FilterSettings;
use crate::models::Game;

#[derive(Clone, Copy)]
pub struct FilterStore {
    manager: RwSignal<FilterManager<BrowserStorage>>,
    pub state: Memo<FilterState>,
    pub filtered_games: Memo<Vec<Game>>,
    pub active_filters: Memo<Vec<FilterType>>,
    pub api_params: Memo<ApiParams>,
}

impl FilterStore {
    pub fn new(games: Signal<Vec<Game>>, settings: FilterSettings) -> Self {
        let manager = RwSignal::new(FilterManager::load(BrowserStorage, settings));

        let state = Memo::new(move |_| manager.with(|m| m.state().clone()));
        let filtered_games = Memo::new(move |_| {
            games.with(|games| manager.with(|m| m.filtered_games(games)))
        });
        let active_filters = Memo::new(move |_| manager.with(|m| m.active_filters()));
        let api_params = Memo::new(move |_| manager.with(|m| m.api_params()));

        Self {
            manager,
            state,
            filtered_games,
            active_filters,
            api_params,
        }
    }

    pub fn settings(&self) -> FilterSettings {
        self.manager.with_untracked(|m| m.settings().clone())
    }

    /// Current value of one dimension (tracked)
    pub fn value_of(&self, filter_type: &FilterType) -> Option<FilterValue> {
        self.state.with(|state| state.value_of(filter_type))
    }

    pub fn update_filter(&self, filter_type: FilterType, value: FilterValue) {
        self.manager.update(|m| m.update_filter(&filter_type, value));
    }

    pub fn set_ordering(&self, ordering: String) {
        self.manager.update(|m| m.set_ordering(ordering));
    }

    pub fn clear_filter(&self, filter_type: FilterType) {
        self.manager.update(|m| m.clear_filter(&filter_type));
    }

    pub fn reset_filters(&self) {
        self.manager.update(|m| m.reset_filters());
    }

    pub fn clear_filters(&self) {
        self.manager.update(|m| m.clear_filters());
    }

    pub fn has_active_filters(&self) -> bool {
        self.active_filters.with(|active| !active.is_empty())
    }

    pub fn active_filters_count(&self) -> usize {
        self.active_filters.with(|active| active.len())
    }

    /// Query for `page` of the remote search, from the current state (tracked)
    pub fn search_query(&self, page: u32) -> SearchQuery {
        let page_size = self.manager.with_untracked(|m| m.settings().page_size);
        SearchQuery::new(self.api_params.get(), page, page_size)
    }
}
