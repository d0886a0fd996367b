//! Wizard state: the current step and the fields captured along the way.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::config::FieldDefaults;
use crate::preference::PreferenceTag;

/// Which screen an interactive step index renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// Step 0: delivery zip code
    ZipCode,
    /// Step 1: adults and kids counters
    Household,
    /// Step 2: taste preferences
    Tastes,
    /// Step 3: summary of everything captured
    Review,
}

impl StepKind {
    pub fn for_index(index: usize) -> Self {
        match index {
            0 => StepKind::ZipCode,
            1 => StepKind::Household,
            2 => StepKind::Tastes,
            _ => StepKind::Review,
        }
    }

    pub fn as_label(&self) -> &'static str {
        match self {
            StepKind::ZipCode => "zip_code",
            StepKind::Household => "household",
            StepKind::Tastes => "tastes",
            StepKind::Review => "review",
        }
    }
}

/// Values captured across the funnel steps.
///
/// `adults_count` is never below 1; the setters on
/// [`crate::FunnelController`] clamp instead of rejecting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardFields {
    pub zip_code: String,
    pub adults_count: u32,
    pub kids_count: u32,
    pub selected_preferences: BTreeSet<PreferenceTag>,
}

impl WizardFields {
    pub fn from_defaults(defaults: &FieldDefaults) -> Self {
        Self {
            zip_code: defaults.zip_code.clone(),
            adults_count: defaults.adults.max(1),
            kids_count: defaults.kids,
            selected_preferences: BTreeSet::new(),
        }
    }

    pub fn household_size(&self) -> u32 {
        self.adults_count.saturating_add(self.kids_count)
    }
}

impl Default for WizardFields {
    fn default() -> Self {
        Self::from_defaults(&FieldDefaults::default())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardState {
    pub current_step: usize,
    pub fields: WizardFields,
}

impl WizardState {
    pub fn new(defaults: &FieldDefaults) -> Self {
        Self {
            current_step: 0,
            fields: WizardFields::from_defaults(defaults),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_kinds_by_index() {
        assert_eq!(StepKind::for_index(0), StepKind::ZipCode);
        assert_eq!(StepKind::for_index(1), StepKind::Household);
        assert_eq!(StepKind::for_index(2), StepKind::Tastes);
        assert_eq!(StepKind::for_index(3), StepKind::Review);
        assert_eq!(StepKind::Tastes.as_label(), "tastes");
    }

    #[test]
    fn default_fields() {
        let fields = WizardFields::default();
        assert_eq!(fields.zip_code, "110001");
        assert_eq!(fields.adults_count, 2);
        assert_eq!(fields.kids_count, 0);
        assert!(fields.selected_preferences.is_empty());
        assert_eq!(fields.household_size(), 2);
    }

    #[test]
    fn zero_adult_default_is_lifted() {
        let defaults = FieldDefaults {
            adults: 0,
            ..FieldDefaults::default()
        };
        assert_eq!(WizardState::new(&defaults).fields.adults_count, 1);
    }
}
