//! Sidebar panel hosting one section per configured filter

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use super::DynamicFilter;
use super::adapters::FilterRegistry;
use crate::config::ordering_options;
use crate::filters::{FilterConfig, FilterStore, FilterType, FilterValue, summarize};

#[component]
pub fn FilterPanel(
    store: FilterStore,
    registry: StoredValue<FilterRegistry>,
    configs: Vec<FilterConfig>,
) -> impl IntoView {
    let debounce_ms = store.settings().search_debounce_ms;

    // The search box shows what was typed immediately; the store only sees
    // it once typing pauses.
    let draft_name = RwSignal::new(store.state.with_untracked(|s| s.name.clone()));
    let pending_search = StoredValue::new_local(None::<Timeout>);
    // Set while a typed name is waiting on the debounce timeout
    let search_pending = StoredValue::new(false);
    let cancel_search = move || {
        search_pending.set_value(false);
        pending_search.set_value(None);
    };

    let stored_name = Memo::new(move |_| store.state.with(|s| s.name.clone()));
    Effect::new(move |_| {
        let name = stored_name.get();
        let next = draft_name.with_untracked(|draft| resync_draft(draft, &name, search_pending.get_value()));
        if let Some(next) = next {
            draft_name.set(next);
        }
    });

    on_cleanup(move || pending_search.set_value(None));

    let on_reset = move |_| {
        cancel_search();
        store.reset_filters();
    };

    let option_labels = configs.clone();
    let chips = move || {
        let state = store.state.get();
        store
            .active_filters
            .get()
            .into_iter()
            .map(|filter_type| {
                let options = option_labels
                    .iter()
                    .find(|c| c.filter_type == filter_type)
                    .map(|c| c.options.as_slice())
                    .unwrap_or_default();
                let label = summarize(&state, &filter_type, options);
                view! {
                    <button
                        class="filter-chip"
                        title="Remove filter"
                        on:click=move |_| {
                            if filter_type == FilterType::Name {
                                cancel_search();
                            }
                            store.clear_filter(filter_type.clone());
                        }
                    >
                        {label}
                        <span class="filter-chip-remove">"×"</span>
                    </button>
                }
            })
            .collect::<Vec<_>>()
    };

    let sections = configs
        .into_iter()
        .filter(|config| config.enabled)
        .map(|config| {
            let filter_type = config.filter_type.clone();
            let (value, on_change) = if filter_type == FilterType::Name {
                let value = Signal::derive(move || FilterValue::Text(draft_name.get()));
                let on_change = Callback::new(move |value: FilterValue| {
                    let name = value.as_text().to_string();
                    draft_name.set(name.clone());
                    search_pending.set_value(true);
                    let timeout = Timeout::new(debounce_ms, move || {
                        search_pending.set_value(false);
                        store.update_filter(FilterType::Name, FilterValue::Text(name));
                    });
                    pending_search.set_value(Some(timeout));
                });
                (value, on_change)
            } else {
                let read_type = filter_type.clone();
                let value = Signal::derive(move || {
                    store.value_of(&read_type).unwrap_or_else(|| FilterValue::Text(String::new()))
                });
                let write_type = filter_type.clone();
                let on_change = Callback::new(move |value: FilterValue| {
                    store.update_filter(write_type.clone(), value);
                });
                (value, on_change)
            };
            let title = config.title.clone();

            view! {
                <section class="filter-section" data-filter=filter_type.to_string()>
                    <h3 class="filter-section-title">{title}</h3>
                    <DynamicFilter registry=registry config=config value=value on_change=on_change />
                </section>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <aside class="filter-panel sidebar">
            <div class="sidebar-header filter-panel-header">
                <h2>"Filters"</h2>
                <Show when=move || store.has_active_filters()>
                    <span class="filter-count">{move || store.active_filters_count()}</span>
                </Show>
                <button
                    class="filter-reset"
                    prop:disabled=move || !store.has_active_filters()
                    on:click=on_reset
                >
                    "Reset"
                </button>
            </div>
            <div class="filter-chips">{chips}</div>
            <section class="filter-section filter-ordering">
                <h3 class="filter-section-title">"Order by"</h3>
                <select
                    class="filter-ordering-select"
                    prop:value=move || store.state.with(|s| s.ordering.clone())
                    on:change=move |ev| store.set_ordering(event_target_value(&ev))
                >
                    {ordering_options()
                        .into_iter()
                        .map(|option| view! { <option value=option.value>{option.label}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </section>
            {sections}
        </aside>
    }
}

/// New search-box text after the stored name changed, if it should change.
///
/// Text still waiting on the debounce wins over the store, so a stored name
/// arriving mid-typing never wipes what was typed since.
fn resync_draft(draft: &str, stored: &str, search_pending: bool) -> Option<String> {
    (!search_pending && draft != stored).then(|| stored.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_search_keeps_draft() {
        assert_eq!(resync_draft("zel", "", true), None);
        assert_eq!(resync_draft("zelda", "zel", true), None);
    }

    #[test]
    fn test_external_change_resyncs_draft() {
        assert_eq!(resync_draft("zelda", "", false), Some(String::new()));
        assert_eq!(resync_draft("", "hades", false), Some("hades".to_string()));
        assert_eq!(resync_draft("hades", "hades", false), None);
    }
}
