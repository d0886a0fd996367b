//! Funnel scenarios driven through the public store API.

use gharfresh_funnel::{
    Effect, FunnelConfig, FunnelController, Intent, PreferenceTag, Route, StepOutcome, Storefront,
};
use pretty_assertions::assert_eq;

fn entered(last_step_index: usize) -> Storefront {
    let mut store = Storefront::new(FunnelConfig::with_last_step_index(last_step_index));
    store.dispatch(Intent::EnterFunnel);
    store
}

#[test]
fn fields_persist_across_step_navigation() {
    let mut store = entered(2);
    let funnel = store.funnel();
    assert_eq!(funnel.current_step(), 0);
    assert_eq!(funnel.fields().adults_count, 2);
    assert_eq!(funnel.fields().kids_count, 0);

    store.dispatch(Intent::Advance);
    assert_eq!(store.funnel().current_step(), 1);

    store.dispatch(Intent::IncrementAdults);
    store.dispatch(Intent::IncrementAdults);
    assert_eq!(store.funnel().fields().adults_count, 4);

    store.dispatch(Intent::Retreat);
    assert_eq!(store.funnel().current_step(), 0);
    assert_eq!(store.funnel().fields().adults_count, 4);
}

#[test]
fn zip_accepts_empty_input() {
    let mut store = entered(2);
    store.dispatch(Intent::SetZip("110001".into()));
    store.dispatch(Intent::SetZip(String::new()));
    assert_eq!(store.funnel().fields().zip_code, "");
}

#[test]
fn every_variant_completes_after_last_step() {
    for last in 1..=3 {
        let mut controller = FunnelController::new(FunnelConfig::with_last_step_index(last));
        for _ in 0..last {
            assert!(controller.advance().moved());
        }
        assert_eq!(controller.current_step(), last);
        assert_eq!(controller.progress_fraction(), 1.0);
        assert_eq!(controller.advance(), StepOutcome::WizardCompleted);
        assert_eq!(controller.current_step(), last);
    }
}

#[test]
fn full_session_then_reentry_starts_fresh() {
    let mut store = entered(3);
    let effects = store.dispatch_all([
        Intent::SetZip("560001".into()),
        Intent::Advance,
        Intent::SetAdults(3),
        Intent::IncrementKids,
        Intent::Advance,
        Intent::TogglePreference(PreferenceTag::new("VEG")),
        Intent::TogglePreference(PreferenceTag::new("QUICK")),
        Intent::Advance,
    ]);
    assert_eq!(effects, vec![Effect::ScrollToTop; 3]);

    let view = store.view().funnel.expect("funnel view");
    assert_eq!(view.current_step, 3);
    assert!(view.is_last_step);
    assert_eq!(view.fields.zip_code, "560001");
    assert_eq!(view.fields.household_size(), 4);
    assert_eq!(view.fields.selected_preferences.len(), 2);

    let effects = store.dispatch(Intent::Advance);
    assert_eq!(effects, vec![Effect::ScrollToTop, Effect::Completed]);
    assert_eq!(store.route(), Route::Home);

    store.dispatch(Intent::EnterFunnel);
    let view = store.view().funnel.expect("funnel view");
    assert_eq!(view.current_step, 0);
    assert_eq!(view.fields.zip_code, "110001");
    assert!(view.fields.selected_preferences.is_empty());
}

#[test]
fn leaving_mid_funnel_discards_state() {
    let mut store = entered(2);
    store.dispatch_all([Intent::Advance, Intent::SetKids(2), Intent::GoHome]);
    assert_eq!(store.route(), Route::Home);
    assert_eq!(store.view().funnel, None);

    store.dispatch(Intent::EnterFunnel);
    assert_eq!(store.funnel().current_step(), 0);
    assert_eq!(store.funnel().fields().kids_count, 0);
}

#[test]
fn parsed_intents_drive_the_same_flow() {
    let mut store = Storefront::default();
    let intents: Vec<Intent> = ["enter", "next", "adults+", "kids+", "kids-", "kids-", "back"]
        .iter()
        .map(|s| s.parse().expect("valid intent"))
        .collect();
    store.dispatch_all(intents);
    assert_eq!(store.funnel().current_step(), 0);
    assert_eq!(store.funnel().fields().adults_count, 3);
    assert_eq!(store.funnel().fields().kids_count, 0);
}
