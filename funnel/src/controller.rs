//! The funnel wizard state machine.
//!
//! States are the step indices `0..=last_step_index`. `advance` from the last
//! step does not enter a new state: it reports [`StepOutcome::WizardCompleted`]
//! and leaves the caller to switch routes and reset.

use tracing::debug;

use crate::config::{FunnelConfig, MAX_LAST_STEP_INDEX, MIN_LAST_STEP_INDEX};
use crate::preference::PreferenceTag;
use crate::state::{StepKind, WizardFields, WizardState};

/// Result of a navigation operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The step index changed.
    Moved { from: usize, to: usize },
    /// Navigation hit a bound and nothing changed.
    Unchanged { step: usize },
    /// `advance` was called on the terminal step.
    WizardCompleted,
}

impl StepOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, StepOutcome::WizardCompleted)
    }

    pub fn moved(&self) -> bool {
        matches!(self, StepOutcome::Moved { .. })
    }
}

/// Owns wizard progression and per-step field capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunnelController {
    config: FunnelConfig,
    state: WizardState,
}

impl Default for FunnelController {
    fn default() -> Self {
        Self::new(FunnelConfig::default())
    }
}

impl FunnelController {
    pub fn new(mut config: FunnelConfig) -> Self {
        config.last_step_index = config
            .last_step_index
            .clamp(MIN_LAST_STEP_INDEX, MAX_LAST_STEP_INDEX);
        let state = WizardState::new(&config.defaults);
        Self { config, state }
    }

    pub fn config(&self) -> &FunnelConfig {
        &self.config
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn fields(&self) -> &WizardFields {
        &self.state.fields
    }

    pub fn current_step(&self) -> usize {
        self.state.current_step
    }

    pub fn last_step_index(&self) -> usize {
        self.config.last_step_index
    }

    pub fn step_kind(&self) -> StepKind {
        StepKind::for_index(self.state.current_step)
    }

    pub fn is_last_step(&self) -> bool {
        self.state.current_step == self.last_step_index()
    }

    /// Back to step 0 with default field values.
    pub fn reset(&mut self) {
        self.state = WizardState::new(&self.config.defaults);
        debug!("funnel reset");
    }

    // ─────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────

    pub fn advance(&mut self) -> StepOutcome {
        let from = self.state.current_step;
        if from < self.last_step_index() {
            self.state.current_step += 1;
            debug!(from, to = from + 1, "funnel advance");
            StepOutcome::Moved { from, to: from + 1 }
        } else {
            debug!(step = from, "funnel completed");
            StepOutcome::WizardCompleted
        }
    }

    pub fn retreat(&mut self) -> StepOutcome {
        let from = self.state.current_step;
        if from > 0 {
            self.state.current_step -= 1;
            debug!(from, to = from - 1, "funnel retreat");
            StepOutcome::Moved { from, to: from - 1 }
        } else {
            StepOutcome::Unchanged { step: from }
        }
    }

    /// Direct navigation, clamped to `[0, last_step_index]`.
    pub fn jump_to(&mut self, step: usize) -> StepOutcome {
        let from = self.state.current_step;
        let to = step.min(self.last_step_index());
        if to == from {
            return StepOutcome::Unchanged { step: from };
        }
        self.state.current_step = to;
        debug!(from, to, "funnel jump");
        StepOutcome::Moved { from, to }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Field capture
    // ─────────────────────────────────────────────────────────────────────

    pub fn set_adults(&mut self, n: u32) {
        self.state.fields.adults_count = n.max(1);
    }

    pub fn set_kids(&mut self, n: u32) {
        self.state.fields.kids_count = n;
    }

    pub fn increment_adults(&mut self) {
        self.set_adults(self.state.fields.adults_count.saturating_add(1));
    }

    pub fn decrement_adults(&mut self) {
        self.set_adults(self.state.fields.adults_count.saturating_sub(1));
    }

    pub fn increment_kids(&mut self) {
        self.set_kids(self.state.fields.kids_count.saturating_add(1));
    }

    pub fn decrement_kids(&mut self) {
        self.set_kids(self.state.fields.kids_count.saturating_sub(1));
    }

    /// Stores the raw value; the zip code is never validated.
    pub fn set_zip(&mut self, value: impl Into<String>) {
        self.state.fields.zip_code = value.into();
    }

    /// Adds the tag if absent, removes it if present. Returns whether the tag
    /// is selected afterwards. Empty tags are ignored.
    pub fn toggle_preference(&mut self, tag: impl Into<PreferenceTag>) -> bool {
        let tag = tag.into();
        if tag.is_empty() {
            return false;
        }
        let prefs = &mut self.state.fields.selected_preferences;
        if prefs.remove(&tag) {
            false
        } else {
            prefs.insert(tag);
            true
        }
    }

    pub fn is_selected(&self, tag: &PreferenceTag) -> bool {
        self.state.fields.selected_preferences.contains(tag)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Derived values
    // ─────────────────────────────────────────────────────────────────────

    /// `current_step / last_step_index`, always within `[0, 1]`.
    pub fn progress_fraction(&self) -> f64 {
        self.state.current_step as f64 / self.last_step_index() as f64
    }

    /// Ordered progress labels, independent of the interactive step count.
    pub fn step_labels(&self) -> &[String] {
        self.config.display_labels()
    }
}
