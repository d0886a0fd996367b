//! One screen per interactive step, plus the shared Back/Continue row.

use gharfresh_funnel::catalog::{PREFERENCE_OPTIONS, PreferenceOption, preference_label};
use gharfresh_funnel::{Intent, StepKind};
use leptos::prelude::*;

use super::Counter;
use crate::sections::Logo;
use crate::store::use_store;

/// Back (hidden on the first step) and Continue.
#[component]
fn StepActions() -> impl IntoView {
    let store = use_store();
    let can_retreat = store.select(|f| f.can_retreat);

    view! {
        <div class="step-actions">
            <Show when=move || can_retreat.get().unwrap_or(false)>
                <button class="btn btn-ghost" on:click=store.on(Intent::Retreat)>
                    "‹ Back"
                </button>
            </Show>
            <button class="btn btn-dark btn-block" on:click=store.on(Intent::Advance)>
                "Continue"
            </button>
        </div>
    }
}

#[component]
pub fn ZipStep() -> impl IntoView {
    let store = use_store();
    let zip = store.select(|f| f.fields.zip_code.clone());

    view! {
        <div class="step step-zip">
            <div class="step-check">"✓"</div>
            <h4 class="step-kicker">"Good news!"</h4>
            <h2 class="step-title accent">"We deliver to your area!"</h2>
            <label class="zip-field">
                <span class="zip-label">"Enter zip code"</span>
                <input
                    type="text"
                    inputmode="numeric"
                    class="zip-input"
                    prop:value=move || zip.get().unwrap_or_default()
                    on:input=move |ev| store.dispatch(Intent::SetZip(event_target_value(&ev)))
                />
            </label>
            <StepActions />
        </div>
    }
}

#[component]
pub fn HouseholdStep() -> impl IntoView {
    let store = use_store();
    let adults = store.select(|f| f.fields.adults_count);
    let kids = store.select(|f| f.fields.kids_count);

    view! {
        <div class="step step-household">
            <h2 class="step-title">"How many people are you cooking for?"</h2>
            <p class="lead">
                "Just tell us who's hungry and we'll handle the portions perfectly."
            </p>
            <div class="counters">
                <Counter
                    label="Number of adults"
                    value=adults
                    floor=1
                    decrement=Intent::DecrementAdults
                    increment=Intent::IncrementAdults
                />
                <Counter
                    label="Number of kids"
                    value=kids
                    floor=0
                    decrement=Intent::DecrementKids
                    increment=Intent::IncrementKids
                />
            </div>
            <StepActions />
        </div>
    }
}

#[component]
fn PreferenceChip(option: PreferenceOption) -> impl IntoView {
    let store = use_store();
    let tag = option.preference_tag();
    let selected = {
        let tag = tag.clone();
        store.select(move |f| f.fields.selected_preferences.contains(&tag))
    };

    view! {
        <button
            class="chip"
            class:selected=move || selected.get().unwrap_or(false)
            data-tag=option.tag
            on:click=store.on(Intent::TogglePreference(tag))
        >
            <span class="chip-label">{option.label}</span>
            <span class="chip-blurb">{option.blurb}</span>
        </button>
    }
}

#[component]
pub fn TastesStep() -> impl IntoView {
    view! {
        <div class="step step-tastes">
            <h2 class="step-title">"What do you like to eat?"</h2>
            <p class="lead">"Pick as many as you like. You can change these every week."</p>
            <div class="chip-grid">
                {PREFERENCE_OPTIONS
                    .iter()
                    .map(|option| view! { <PreferenceChip option=*option /> })
                    .collect::<Vec<_>>()}
            </div>
            <StepActions />
        </div>
    }
}

pub(crate) fn household_summary(adults: u32, kids: u32) -> String {
    let adults_word = if adults == 1 { "adult" } else { "adults" };
    match kids {
        0 => format!("{adults} {adults_word}"),
        1 => format!("{adults} {adults_word}, 1 kid"),
        n => format!("{adults} {adults_word}, {n} kids"),
    }
}

/// Shown only when the build selects the three-step variant (see `store::LAST_STEP_INDEX_ENV`).
#[component]
pub fn ReviewStep() -> impl IntoView {
    let store = use_store();
    let fields = store.select(|f| f.fields.clone());

    view! {
        <div class="step step-review">
            <h2 class="step-title">"Your box, at a glance"</h2>
            {move || {
                fields.get().map(|fields| {
                    let prefs = fields
                        .selected_preferences
                        .iter()
                        .map(|tag| preference_label(tag).unwrap_or(tag.as_str()).to_string())
                        .collect::<Vec<_>>();
                    let prefs = if prefs.is_empty() {
                        "No preferences yet".to_string()
                    } else {
                        prefs.join(", ")
                    };
                    let zip = if fields.zip_code.is_empty() {
                        "Not provided".to_string()
                    } else {
                        fields.zip_code.clone()
                    };
                    view! {
                        <dl class="summary">
                            <dt>"Delivering to"</dt>
                            <dd>{zip}</dd>
                            <dt>"Cooking for"</dt>
                            <dd>{household_summary(fields.adults_count, fields.kids_count)}</dd>
                            <dt>"Tastes"</dt>
                            <dd>{prefs}</dd>
                        </dl>
                    }
                })
            }}
            <StepActions />
        </div>
    }
}

pub(crate) fn visual_image(kind: StepKind) -> Option<&'static str> {
    match kind {
        StepKind::ZipCode => None,
        StepKind::Household => Some(
            "https://images.unsplash.com/photo-1556910103-1c02745a8720?auto=format&fit=crop&q=80&w=1200",
        ),
        StepKind::Tastes => Some(
            "https://images.unsplash.com/photo-1585937421612-70a008356fbe?auto=format&fit=crop&q=80&w=1200",
        ),
        StepKind::Review => Some(
            "https://images.unsplash.com/photo-1601050690597-df0568f70950?auto=format&fit=crop&q=80&w=1200",
        ),
    }
}

/// Right-hand panel: the big logo on the first step, photography afterwards.
#[component]
pub fn StepVisual(kind: StepKind) -> impl IntoView {
    match visual_image(kind) {
        None => view! {
            <div class="visual visual-brand">
                <div class="visual-logo">
                    <Logo />
                </div>
            </div>
        }
        .into_any(),
        Some(src) => view! {
            <div class="visual visual-photo">
                <img src=src alt="Cooking at home" />
                <div class="visual-box">
                    <Logo />
                </div>
            </div>
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn household_summary_wording() {
        assert_eq!(household_summary(1, 0), "1 adult");
        assert_eq!(household_summary(2, 0), "2 adults");
        assert_eq!(household_summary(2, 1), "2 adults, 1 kid");
        assert_eq!(household_summary(4, 3), "4 adults, 3 kids");
    }

    #[test]
    fn first_step_shows_brand_panel() {
        assert_eq!(visual_image(StepKind::ZipCode), None);
        assert!(visual_image(StepKind::Household).is_some());
        assert!(visual_image(StepKind::Review).is_some());
    }
}
