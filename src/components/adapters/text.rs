use leptos::prelude::*;

use super::FilterProps;
use crate::filters::FilterValue;

/// Free-text box. Emits the raw string on every input event.
pub fn text_filter(props: FilterProps) -> AnyView {
    let FilterProps { value, on_change, placeholder, .. } = props;

    view! {
        <div class="filter-text search-box">
            <input
                type="text"
                class="filter-input"
                placeholder=placeholder.unwrap_or_default()
                prop:value=move || value.with(|v| v.as_text().to_string())
                on:input=move |ev| {
                    on_change.run(FilterValue::Text(event_target_value(&ev)));
                }
            />
            <Show when=move || value.with(|v| !v.as_text().is_empty())>
                <button
                    class="search-clear"
                    on:click=move |_| on_change.run(FilterValue::Text(String::new()))
                    title="Clear search"
                >
                    "×"
                </button>
            </Show>
        </div>
    }
    .into_any()
}
