//! Reactive handle around the storefront store.
//!
//! The store lives in one `RwSignal` owned by `App` and reaches components
//! through context. Every UI event goes through [`StoreHandle::dispatch`].

use gharfresh_funnel::{
    Effect, FunnelConfig, FunnelView, Intent, Route, Storefront, StorefrontView,
};
use leptos::prelude::*;

use crate::console;

#[derive(Clone, Copy)]
pub struct StoreHandle {
    store: RwSignal<Storefront>,
    view: Memo<StorefrontView>,
    route: Memo<Route>,
}

impl StoreHandle {
    fn new(store: Storefront) -> Self {
        let store = RwSignal::new(store);
        let view = Memo::new(move |_| store.with(|s| s.view()));
        let route = Memo::new(move |_| view.with(|v| v.route));
        Self { store, view, route }
    }

    pub fn dispatch(&self, intent: Intent) {
        let label = intent.to_string();
        let mut effects = Vec::new();
        self.store.update(|store| effects = store.dispatch(intent));
        console::log_dispatch(&label, &effects);
        for effect in effects {
            apply_effect(effect);
        }
    }

    /// Returns a click handler that dispatches `intent`.
    pub fn on(&self, intent: Intent) -> impl Fn(leptos::ev::MouseEvent) + Clone + 'static + use<> {
        let handle = *self;
        move |_| handle.dispatch(intent.clone())
    }

    pub fn route(&self) -> Route {
        self.route.get()
    }

    /// Memoised slice of the funnel view; `None` outside the funnel route.
    ///
    /// Components subscribe to the slice they render so that, for example,
    /// typing a zip code does not rebuild the step screen.
    pub fn select<T>(&self, f: impl Fn(&FunnelView) -> T + Send + Sync + 'static) -> Memo<Option<T>>
    where
        T: PartialEq + Send + Sync + 'static,
    {
        let view = self.view;
        Memo::new(move |_| view.with(|v| v.funnel.as_ref().map(&f)))
    }
}

fn apply_effect(effect: Effect) {
    match effect {
        Effect::ScrollToTop => scroll_to_top(),
        Effect::Completed => console::log_completed(),
    }
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Instant);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Funnel variant baked in at build time, e.g.
/// `GHARFRESH_LAST_STEP_INDEX=3 trunk serve` to include the Review screen.
/// Unset or unparsable values keep the default two-step variant.
pub const LAST_STEP_INDEX_ENV: Option<&str> = option_env!("GHARFRESH_LAST_STEP_INDEX");

pub fn config_from_build_env(raw: Option<&str>) -> FunnelConfig {
    match raw.and_then(|value| value.trim().parse::<usize>().ok()) {
        Some(last_step_index) => FunnelConfig::with_last_step_index(last_step_index),
        None => FunnelConfig::default(),
    }
}

pub fn provide_store(store: Storefront) -> StoreHandle {
    let handle = StoreHandle::new(store);
    provide_context(handle);
    handle
}

pub fn use_store() -> StoreHandle {
    expect_context::<StoreHandle>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gharfresh_funnel::StepKind;

    #[test]
    fn build_env_selects_variant() {
        assert_eq!(config_from_build_env(None), FunnelConfig::default());
        assert_eq!(config_from_build_env(Some("3")).last_step_index, 3);
        assert_eq!(config_from_build_env(Some(" 1 ")).last_step_index, 1);
        assert_eq!(config_from_build_env(Some("9")).last_step_index, 3);
        assert_eq!(config_from_build_env(Some("many")), FunnelConfig::default());
    }

    #[test]
    fn review_screen_is_reachable_with_three_steps() {
        let mut store = Storefront::new(config_from_build_env(Some("3")));
        store.dispatch_all([Intent::EnterFunnel, Intent::Advance, Intent::Advance, Intent::Advance]);
        let view = store.view().funnel.expect("funnel view");
        assert_eq!(view.step_kind, StepKind::Review);
    }
}
