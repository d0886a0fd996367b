//! Progress rail and labelled step dots above the funnel.

use gharfresh_funnel::StepStatus;
use leptos::prelude::*;

use crate::store::use_store;

pub(crate) fn dot_class(status: StepStatus) -> &'static str {
    match status {
        StepStatus::Past => "progress-dot past",
        StepStatus::Current => "progress-dot current",
        StepStatus::Upcoming => "progress-dot",
    }
}

pub(crate) fn label_class(status: StepStatus) -> &'static str {
    if status.is_reached() {
        "progress-label reached"
    } else {
        "progress-label"
    }
}

pub(crate) fn rail_width(percent: f64) -> String {
    format!("{}%", percent.clamp(0.0, 100.0))
}

#[component]
pub fn ProgressTracker() -> impl IntoView {
    let store = use_store();
    let percent = store.select(|f| f.progress_percent);
    let indicators = store.select(|f| f.indicators.clone());

    view! {
        <div class="progress">
            <div class="progress-rail"></div>
            <div
                class="progress-rail-active"
                style:width=move || rail_width(percent.get().unwrap_or_default())
            ></div>
            <div class="progress-steps">
                {move || {
                    indicators
                        .get()
                        .unwrap_or_default()
                        .into_iter()
                        .map(|indicator| {
                            let reached = indicator.status.is_reached();
                            view! {
                                <div class="progress-step" data-step=indicator.index.to_string()>
                                    <div class=dot_class(indicator.status)>
                                        {reached.then(|| view! { <div class="progress-dot-fill"></div> })}
                                    </div>
                                    <span class=label_class(indicator.status)>{indicator.label}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}
