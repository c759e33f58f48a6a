//! Resolves a filter type to its registered adapter and renders it

use leptos::prelude::*;

use super::adapters::{FilterProps, FilterRegistry};
use crate::filters::{FilterConfig, FilterValue};
use crate::logging;

/// Renders the adapter registered for `config.filter_type`, or nothing when
/// the type has no adapter.
#[component]
pub fn DynamicFilter(
    registry: StoredValue<FilterRegistry>,
    config: FilterConfig,
    value: Signal<FilterValue>,
    on_change: Callback<FilterValue>,
) -> impl IntoView {
    let component = registry.with_value(|r| r.get(&config.filter_type).map(|renderer| renderer.component));

    match component {
        Some(component) => Some(component(FilterProps::from_config(&config, value, on_change))),
        None => {
            logging::warn(&format!(
                "DynamicFilter: no renderer registered for '{}'",
                config.filter_type
            ));
            None
        }
    }
}
