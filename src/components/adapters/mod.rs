//! Filter adapters
//!
//! Each adapter turns the generic [`FilterProps`] contract into one concrete
//! control. Adapters are plain functions so they can be stored in the
//! registry and swapped at runtime without touching the dispatcher.

mod date_range;
mod range_slider;
mod select;
mod text;

use leptos::prelude::*;

use crate::filters::{FilterConfig, FilterType, FilterValue, Keyed, Registry};
use crate::models::FilterOption;

pub use date_range::date_range_filter;
pub use range_slider::range_slider_filter;
pub use select::{select_filter, toggle_selection};
pub use text::text_filter;

/// Generic props every adapter receives
#[derive(Clone)]
pub struct FilterProps {
    pub value: Signal<FilterValue>,
    pub on_change: Callback<FilterValue>,
    pub placeholder: Option<String>,
    pub options: Vec<FilterOption>,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    pub step: Option<f64>,
    pub unit: Option<String>,
    pub multiple: bool,
}

impl FilterProps {
    pub fn from_config(config: &FilterConfig, value: Signal<FilterValue>, on_change: Callback<FilterValue>) -> Self {
        Self {
            value,
            on_change,
            placeholder: config.placeholder.clone(),
            options: config.options.clone(),
            min_value: config.min_value,
            max_value: config.max_value,
            step: config.step,
            unit: config.unit.clone(),
            multiple: config.multiple,
        }
    }
}

pub type AdapterFn = fn(FilterProps) -> AnyView;

#[derive(Clone)]
pub struct FilterRenderer {
    pub filter_type: FilterType,
    pub component: AdapterFn,
}

impl FilterRenderer {
    pub fn new(filter_type: FilterType, component: AdapterFn) -> Self {
        Self { filter_type, component }
    }
}

impl Keyed for FilterRenderer {
    type Key = FilterType;

    fn key(&self) -> &FilterType {
        &self.filter_type
    }
}

pub type FilterRegistry = Registry<FilterRenderer>;

/// Registry with an adapter for every built-in dimension
pub fn default_registry() -> FilterRegistry {
    let mut registry = FilterRegistry::new();
    registry.register(FilterRenderer::new(FilterType::Name, text_filter));
    for category in [FilterType::Genres, FilterType::Platforms, FilterType::Stores, FilterType::Tags] {
        registry.register(FilterRenderer::new(category, select_filter));
    }
    registry.register(FilterRenderer::new(FilterType::DateRange, date_range_filter));
    registry.register(FilterRenderer::new(FilterType::MetacriticRange, range_slider_filter));
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom_adapter(_props: FilterProps) -> AnyView {
        ().into_any()
    }

    #[test]
    fn test_builtin_types_registered() {
        let registry = default_registry();
        for filter_type in FilterType::builtin() {
            assert!(registry.contains(filter_type), "missing adapter for {}", filter_type);
        }
        assert_eq!(registry.len(), FilterType::builtin().len());
    }

    #[test]
    fn test_unknown_type_not_found() {
        let registry = default_registry();
        assert!(registry.get(&FilterType::Custom("custom".to_string())).is_none());
        assert!(FilterType::from_tag("").is_none());
    }

    #[test]
    fn test_custom_renderer_after_bootstrap() {
        let mut registry = default_registry();
        let custom = FilterType::Custom("custom".to_string());
        registry.register(FilterRenderer::new(custom.clone(), custom_adapter));

        let renderer = registry.get(&custom).unwrap();
        assert_eq!(renderer.filter_type, custom);
        assert_eq!(registry.len(), FilterType::builtin().len() + 1);
    }

    #[test]
    fn test_reregistration_overwrites() {
        let mut registry = default_registry();
        registry.register(FilterRenderer::new(FilterType::Name, custom_adapter));
        assert!(registry.get(&FilterType::Name).is_some());
        assert_eq!(registry.len(), FilterType::builtin().len());
    }
}
