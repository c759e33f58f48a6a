use leptos::prelude::*;

use super::FilterProps;
use crate::filters::{DateRange, FilterValue};

#[derive(Clone, Copy)]
enum Side {
    Start,
    End,
}

/// Replace one side of the range, keeping the other as-is
fn with_side(mut range: DateRange, side: Side, date: String) -> DateRange {
    match side {
        Side::Start => range.start = date,
        Side::End => range.end = date,
    }
    range
}

/// Two independent date inputs. Either side may be left empty.
pub fn date_range_filter(props: FilterProps) -> AnyView {
    let FilterProps { value, on_change, .. } = props;

    let emit = move |side: Side, date: String| {
        let range = value.with_untracked(|v| v.as_dates());
        on_change.run(FilterValue::Dates(with_side(range, side, date)));
    };

    view! {
        <div class="filter-date-range">
            <label class="filter-date">
                <span class="filter-date-label">"From"</span>
                <input
                    type="date"
                    class="filter-input"
                    prop:value=move || value.with(|v| v.as_dates().start)
                    on:change=move |ev| emit(Side::Start, event_target_value(&ev))
                />
            </label>
            <label class="filter-date">
                <span class="filter-date-label">"To"</span>
                <input
                    type="date"
                    class="filter-input"
                    prop:value=move || value.with(|v| v.as_dates().end)
                    on:change=move |ev| emit(Side::End, event_target_value(&ev))
                />
            </label>
        </div>
    }
    .into_any()
}
