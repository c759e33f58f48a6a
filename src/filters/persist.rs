//! Filter state persistence
//!
//! The full [`FilterState`] is stored as JSON under one key. Reading merges
//! the stored fields over the defaults and falls back to the defaults when
//! the record is unreadable.

use std::cell::RefCell;
use std::collections::HashMap;

use serde_json::Value;
use thiserror::Error;

use super::types::{FilterState, ScoreRange};
use crate::logging;

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("storage is not available")]
    StorageUnavailable,
    #[error("storage error: {0}")]
    Storage(String),
    #[error("failed to serialize filter state: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to parse stored filter state: {0}")]
    Deserialize(#[source] serde_json::Error),
}

/// Key-value string storage the filter state is written to
pub trait FilterStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, FilterError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), FilterError>;
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, FilterError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(FilterError::StorageUnavailable)
    }
}

impl FilterStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, FilterError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| FilterError::Storage(format!("{:?}", e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), FilterError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| FilterError::Storage(format!("{:?}", e)))
    }
}

/// In-process storage for tests and non-browser hosts
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FilterStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, FilterError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), FilterError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub fn save_state(storage: &impl FilterStorage, key: &str, state: &FilterState) -> Result<(), FilterError> {
    let raw = serde_json::to_string(state).map_err(FilterError::Serialize)?;
    storage.set_item(key, &raw)
}

/// Read the stored state, if any. Fields missing from the record take their
/// value from `defaults`.
pub fn read_state(
    storage: &impl FilterStorage,
    key: &str,
    defaults: &FilterState,
) -> Result<Option<FilterState>, FilterError> {
    let Some(raw) = storage.get_item(key)? else {
        return Ok(None);
    };
    let stored: Value = serde_json::from_str(&raw).map_err(FilterError::Deserialize)?;
    let Value::Object(stored) = stored else {
        return Err(FilterError::Deserialize(serde::de::Error::custom("stored filter state is not an object")));
    };

    let mut merged = serde_json::to_value(defaults).map_err(FilterError::Serialize)?;
    if let Value::Object(fields) = &mut merged {
        fields.extend(stored);
    }
    serde_json::from_value(merged).map(Some).map_err(FilterError::Deserialize)
}

/// Initial state for a session: the stored record sanitized against the
/// default metacritic window, or `defaults` when nothing usable is stored
pub fn load_state(storage: &impl FilterStorage, key: &str, defaults: &FilterState) -> FilterState {
    match read_state(storage, key, defaults) {
        Ok(Some(state)) => sanitize(state, defaults.metacritic_range),
        Ok(None) => defaults.clone(),
        Err(e) => {
            logging::warn(&format!("FilterState: ignoring stored filters: {}", e));
            defaults.clone()
        }
    }
}

pub fn default_state(domain: ScoreRange) -> FilterState {
    FilterState {
        metacritic_range: domain,
        ..FilterState::default()
    }
}

/// Bring a stored record back inside the documented invariants
pub fn sanitize(mut state: FilterState, domain: ScoreRange) -> FilterState {
    for values in [&mut state.genres, &mut state.platforms, &mut state.stores, &mut state.tags] {
        dedup_preserving_order(values);
    }
    state.metacritic_range = state.metacritic_range.sanitized(domain);
    state
}

fn dedup_preserving_order(values: &mut Vec<String>) {
    let mut seen = std::collections::HashSet::new();
    values.retain(|v| seen.insert(v.clone()));
}
