//! Dual-handle range slider bound to the drag engine
//!
//! `value` carries the selected `{min, max}`; `min_value`/`max_value` are the
//! fixed absolute domain. Thumbs are positioned as percentages of the domain.

use gloo_events::{EventListener, EventListenerOptions};
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use super::FilterProps;
use crate::filters::{DragEngine, DragHandle, FilterValue, ScoreRange, SliderDomain};

fn format_value(value: f64, unit: &str) -> String {
    format!("{}{}", value, unit)
}

fn touch_client_x(event: &web_sys::Event) -> Option<f64> {
    let touch = event.dyn_ref::<web_sys::TouchEvent>()?.touches().get(0)?;
    Some(touch.client_x() as f64)
}

pub fn range_slider_filter(props: FilterProps) -> AnyView {
    let FilterProps { value, on_change, min_value, max_value, step, unit, .. } = props;
    let domain = SliderDomain::new(
        min_value.unwrap_or(ScoreRange::FULL.min),
        max_value.unwrap_or(ScoreRange::FULL.max),
        step.unwrap_or(1.0),
    );
    let unit = unit.unwrap_or_default();
    let fixed = domain.is_degenerate();

    let engine = RwSignal::new(DragEngine::new(domain));
    let track_ref = NodeRef::<html::Div>::new();
    // Document-level move/release listeners, held only while a handle is dragged
    let drag_listeners = StoredValue::new_local(Vec::<EventListener>::new());

    let move_to = move |client_x: f64| {
        let Some(track) = track_ref.get_untracked() else {
            return;
        };
        let rect = track.get_bounding_client_rect();
        let current = value.with_untracked(|v| v.as_range());
        let next = engine.with_untracked(|e| e.drag_to(client_x, rect.left(), rect.width(), current));
        if let Some(next) = next.filter(|next| *next != current) {
            on_change.run(FilterValue::Range(next));
        }
    };

    Effect::new(move |_| {
        if !engine.with(|e| e.is_dragging()) {
            drag_listeners.set_value(Vec::new());
            return;
        }
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let release = move |_: &web_sys::Event| engine.update(|e| e.end());
        let listeners = vec![
            EventListener::new(&document, "pointermove", move |event| {
                if let Some(event) = event.dyn_ref::<web_sys::MouseEvent>() {
                    move_to(event.client_x() as f64);
                }
            }),
            EventListener::new_with_options(
                &document,
                "touchmove",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    if let Some(x) = touch_client_x(event) {
                        event.prevent_default();
                        move_to(x);
                    }
                },
            ),
            EventListener::new(&document, "pointerup", release),
            EventListener::new(&document, "touchend", release),
            EventListener::new(&document, "touchcancel", release),
        ];
        drag_listeners.set_value(listeners);
    });

    on_cleanup(move || drag_listeners.set_value(Vec::new()));

    let start_drag = move |handle: DragHandle| {
        if !fixed {
            engine.update(|e| e.start(handle));
        }
    };

    let min_percent = move || domain.percent_of(value.with(|v| v.as_range().min));
    let max_percent = move || domain.percent_of(value.with(|v| v.as_range().max));
    let min_unit = unit.clone();
    let max_unit = unit;

    view! {
        <div class="filter-range" class:disabled=fixed>
            <div class="filter-range-values">
                <span class="filter-range-min">
                    {move || format_value(value.with(|v| v.as_range().min), &min_unit)}
                </span>
                <span class="filter-range-separator">"–"</span>
                <span class="filter-range-max">
                    {move || format_value(value.with(|v| v.as_range().max), &max_unit)}
                </span>
            </div>
            <div class="filter-range-track" node_ref=track_ref>
                <div
                    class="filter-range-fill"
                    style:left=move || format!("{}%", min_percent())
                    style:width=move || format!("{}%", (max_percent() - min_percent()).max(0.0))
                ></div>
                <div
                    class="filter-range-thumb thumb-min"
                    class:active=move || engine.with(|e| e.dragging() == Some(DragHandle::Min))
                    style:left=move || format!("{}%", min_percent())
                    on:pointerdown=move |ev| {
                        ev.prevent_default();
                        start_drag(DragHandle::Min);
                    }
                    on:touchstart=move |_| start_drag(DragHandle::Min)
                ></div>
                <div
                    class="filter-range-thumb thumb-max"
                    class:active=move || engine.with(|e| e.dragging() == Some(DragHandle::Max))
                    style:left=move || format!("{}%", max_percent())
                    on:pointerdown=move |ev| {
                        ev.prevent_default();
                        start_drag(DragHandle::Max);
                    }
                    on:touchstart=move |_| start_drag(DragHandle::Max)
                ></div>
            </div>
        </div>
    }
    .into_any()
}
