use gharfresh_funnel::Intent;
use leptos::prelude::*;

use crate::store::use_store;

/// `-  n  +` stepper. The store clamps; `floor` only greys out the minus.
#[component]
pub fn Counter(
    label: &'static str,
    value: Memo<Option<u32>>,
    floor: u32,
    decrement: Intent,
    increment: Intent,
) -> impl IntoView {
    let store = use_store();
    let at_floor = move || value.get().unwrap_or(floor) <= floor;

    view! {
        <div class="counter-row">
            <span class="counter-label">{label}</span>
            <div class="counter">
                <button
                    class="counter-btn"
                    aria-label=format!("Fewer {}", label.to_lowercase())
                    class:muted=at_floor
                    on:click=store.on(decrement)
                >
                    "−"
                </button>
                <span class="counter-value">{move || value.get().unwrap_or(floor)}</span>
                <button
                    class="counter-btn"
                    aria-label=format!("More {}", label.to_lowercase())
                    on:click=store.on(increment)
                >
                    "+"
                </button>
            </div>
        </div>
    }
}
