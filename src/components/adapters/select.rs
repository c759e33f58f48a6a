//! Option dropdown for category filters, in multi- or single-select mode

use gloo_events::EventListener;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use super::FilterProps;
use crate::filters::FilterValue;
use crate::models::FilterOption;

/// Selection after clicking `value`.
///
/// Multi-select toggles membership and keeps the order of the remaining
/// items. Single-select replaces the selection, or clears it when `value` is
/// already the selected item.
pub fn toggle_selection(current: &[String], value: &str, multiple: bool) -> Vec<String> {
    let selected = current.iter().any(|v| v == value);
    match (multiple, selected) {
        (true, true) => current.iter().filter(|v| *v != value).cloned().collect(),
        (true, false) => {
            let mut next = current.to_vec();
            next.push(value.to_string());
            next
        }
        (false, true) => Vec::new(),
        (false, false) => vec![value.to_string()],
    }
}

fn trigger_label(selected: &[String], options: &[FilterOption], placeholder: &str) -> String {
    match selected {
        [] => placeholder.to_string(),
        [single] => options
            .iter()
            .find(|o| o.value == *single)
            .map(|o| o.label.clone())
            .unwrap_or_else(|| single.clone()),
        many => format!("{} selected", many.len()),
    }
}

pub fn select_filter(props: FilterProps) -> AnyView {
    let FilterProps { value, on_change, placeholder, options, multiple, .. } = props;
    let placeholder = placeholder.unwrap_or_else(|| "Any".to_string());

    let open = RwSignal::new(false);
    let root_ref = NodeRef::<html::Div>::new();
    // Only exists while the dropdown is open
    let outside_listener = StoredValue::new_local(None::<EventListener>);

    Effect::new(move |_| {
        if !open.get() {
            outside_listener.set_value(None);
            return;
        }
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let listener = EventListener::new(&document, "pointerdown", move |event| {
            let target = event.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
            let inside = match (root_ref.get_untracked(), target) {
                (Some(root), Some(target)) => root.contains(Some(&target)),
                _ => false,
            };
            if !inside {
                open.set(false);
            }
        });
        outside_listener.set_value(Some(listener));
    });

    on_cleanup(move || outside_listener.set_value(None));

    let label_options = options.clone();
    let label = move || {
        value.with(|v| trigger_label(v.as_selection(), &label_options, &placeholder))
    };

    let option_items = options
        .into_iter()
        .map(|option| {
            let FilterOption { value: option_value, label: option_label } = option;
            let selected_value = option_value.clone();
            view! {
                <button
                    type="button"
                    class="filter-option"
                    class:selected=move || value.with(|v| v.as_selection().contains(&selected_value))
                    on:click=move |_| {
                        let next = value.with_untracked(|v| {
                            toggle_selection(v.as_selection(), &option_value, multiple)
                        });
                        on_change.run(FilterValue::Selection(next));
                        if !multiple {
                            open.set(false);
                        }
                    }
                >
                    <span class="filter-option-check"></span>
                    <span class="filter-option-label">{option_label}</span>
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="filter-select" class:open=move || open.get() node_ref=root_ref>
            <button
                type="button"
                class="filter-select-trigger"
                class:has-value=move || value.with(|v| !v.as_selection().is_empty())
                on:click=move |_| open.update(|o| *o = !*o)
            >
                <span class="filter-select-label">{label}</span>
                <span class="filter-select-arrow">"▾"</span>
            </button>
            <div class="filter-select-menu" class:hidden=move || !open.get()>
                {option_items}
            </div>
        </div>
    }
    .into_any()
}
