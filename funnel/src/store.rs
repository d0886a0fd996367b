//! Storefront store: the home/funnel route switch and the funnel it owns.
//!
//! Unidirectional: UI events become [`Intent`]s, `dispatch` applies them and
//! returns the [`Effect`]s the renderer has to perform.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::FunnelConfig;
use crate::controller::{FunnelController, StepOutcome};
use crate::intent::Intent;

/// Top-level view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    #[default]
    Home,
    Funnel,
}

impl Route {
    pub fn as_label(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Funnel => "funnel",
        }
    }
}

/// Side effects requested by a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Route or step changed; reset the scroll position.
    ScrollToTop,
    /// The wizard was completed and the store returned home.
    Completed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Storefront {
    route: Route,
    funnel: FunnelController,
}

impl Storefront {
    pub fn new(config: FunnelConfig) -> Self {
        Self {
            route: Route::Home,
            funnel: FunnelController::new(config),
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn funnel(&self) -> &FunnelController {
        &self.funnel
    }

    pub fn in_funnel(&self) -> bool {
        self.route == Route::Funnel
    }

    /// Enters the funnel with a fresh wizard. A no-op while already inside.
    pub fn enter_funnel(&mut self) -> Vec<Effect> {
        if self.in_funnel() {
            return Vec::new();
        }
        self.funnel.reset();
        self.route = Route::Funnel;
        info!(route = self.route.as_label(), "route change");
        vec![Effect::ScrollToTop]
    }

    /// Leaves the funnel (discarding wizard state) or stays home.
    pub fn go_home(&mut self) -> Vec<Effect> {
        if !self.in_funnel() {
            return Vec::new();
        }
        self.funnel.reset();
        self.route = Route::Home;
        info!(route = self.route.as_label(), "route change");
        vec![Effect::ScrollToTop]
    }

    /// Applies one intent. Wizard intents are ignored outside the funnel.
    pub fn dispatch(&mut self, intent: Intent) -> Vec<Effect> {
        debug!(%intent, route = self.route.as_label(), "dispatch");
        match intent {
            Intent::EnterFunnel => return self.enter_funnel(),
            Intent::GoHome => return self.go_home(),
            _ if !self.in_funnel() => {
                debug!(%intent, "ignored outside funnel");
                return Vec::new();
            }
            _ => {}
        }

        let funnel = &mut self.funnel;
        let outcome = match intent {
            Intent::Advance => funnel.advance(),
            Intent::Retreat => funnel.retreat(),
            Intent::JumpTo(step) => funnel.jump_to(step),
            Intent::SetAdults(n) => {
                funnel.set_adults(n);
                return Vec::new();
            }
            Intent::IncrementAdults => {
                funnel.increment_adults();
                return Vec::new();
            }
            Intent::DecrementAdults => {
                funnel.decrement_adults();
                return Vec::new();
            }
            Intent::SetKids(n) => {
                funnel.set_kids(n);
                return Vec::new();
            }
            Intent::IncrementKids => {
                funnel.increment_kids();
                return Vec::new();
            }
            Intent::DecrementKids => {
                funnel.decrement_kids();
                return Vec::new();
            }
            Intent::SetZip(zip) => {
                funnel.set_zip(zip);
                return Vec::new();
            }
            Intent::TogglePreference(tag) => {
                funnel.toggle_preference(tag);
                return Vec::new();
            }
            Intent::EnterFunnel | Intent::GoHome => return Vec::new(),
        };

        match outcome {
            StepOutcome::Moved { .. } => vec![Effect::ScrollToTop],
            StepOutcome::Unchanged { .. } => Vec::new(),
            StepOutcome::WizardCompleted => {
                info!(
                    adults = funnel.fields().adults_count,
                    kids = funnel.fields().kids_count,
                    preferences = funnel.fields().selected_preferences.len(),
                    "funnel completed"
                );
                let mut effects = self.go_home();
                effects.push(Effect::Completed);
                effects
            }
        }
    }

    /// Applies intents in order and collects every effect.
    pub fn dispatch_all<I>(&mut self, intents: I) -> Vec<Effect>
    where
        I: IntoIterator<Item = Intent>,
    {
        intents
            .into_iter()
            .flat_map(|intent| self.dispatch(intent))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_home() {
        let store = Storefront::default();
        assert_eq!(store.route(), Route::Home);
        assert!(!store.in_funnel());
    }

    #[test]
    fn entering_funnel_resets_state() {
        let mut store = Storefront::default();
        assert_eq!(store.dispatch(Intent::EnterFunnel), vec![Effect::ScrollToTop]);
        store.dispatch(Intent::Advance);
        store.dispatch(Intent::SetAdults(5));
        store.dispatch(Intent::GoHome);
        assert_eq!(store.route(), Route::Home);

        store.dispatch(Intent::EnterFunnel);
        assert_eq!(store.funnel().current_step(), 0);
        assert_eq!(store.funnel().fields().adults_count, 2);
    }

    #[test]
    fn entering_twice_keeps_progress() {
        let mut store = Storefront::default();
        store.dispatch(Intent::EnterFunnel);
        store.dispatch(Intent::Advance);
        assert!(store.dispatch(Intent::EnterFunnel).is_empty());
        assert_eq!(store.funnel().current_step(), 1);
    }

    #[test]
    fn wizard_intents_ignored_at_home() {
        let mut store = Storefront::default();
        assert!(store.dispatch(Intent::Advance).is_empty());
        assert!(store.dispatch(Intent::IncrementAdults).is_empty());
        assert_eq!(store.funnel().current_step(), 0);
        assert_eq!(store.funnel().fields().adults_count, 2);
        assert!(store.dispatch(Intent::GoHome).is_empty());
    }

    #[test]
    fn completion_returns_home() {
        let mut store = Storefront::new(FunnelConfig::with_last_step_index(1));
        store.dispatch(Intent::EnterFunnel);
        assert_eq!(store.dispatch(Intent::Advance), vec![Effect::ScrollToTop]);
        store.dispatch(Intent::IncrementKids);
        assert_eq!(
            store.dispatch(Intent::Advance),
            vec![Effect::ScrollToTop, Effect::Completed]
        );
        assert_eq!(store.route(), Route::Home);
        assert_eq!(store.funnel().current_step(), 0);
        assert_eq!(store.funnel().fields().kids_count, 0);
    }

    #[test]
    fn bounded_moves_emit_nothing() {
        let mut store = Storefront::default();
        store.dispatch(Intent::EnterFunnel);
        assert!(store.dispatch(Intent::Retreat).is_empty());
        assert!(store.dispatch(Intent::JumpTo(0)).is_empty());
    }

    #[test]
    fn dispatch_all_collects_effects() {
        let mut store = Storefront::default();
        let effects = store.dispatch_all([
            Intent::EnterFunnel,
            Intent::Advance,
            Intent::Advance,
            Intent::Retreat,
        ]);
        assert_eq!(effects.len(), 4);
        assert_eq!(store.funnel().current_step(), 1);
    }
}
