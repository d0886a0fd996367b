//! View models handed to the renderer after every change.
//!
//! Everything here is derived; nothing feeds back into the store.

use serde::{Deserialize, Serialize};

use crate::controller::FunnelController;
use crate::state::{StepKind, WizardFields};
use crate::store::{Route, Storefront};

/// Status of one progress indicator dot relative to the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Past,
    Current,
    Upcoming,
}

impl StepStatus {
    pub fn for_index(index: usize, current_step: usize) -> Self {
        use std::cmp::Ordering;
        match index.cmp(&current_step) {
            Ordering::Less => StepStatus::Past,
            Ordering::Equal => StepStatus::Current,
            Ordering::Greater => StepStatus::Upcoming,
        }
    }

    /// Past and current dots are both drawn as reached.
    pub fn is_reached(&self) -> bool {
        !matches!(self, StepStatus::Upcoming)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepIndicator {
    pub index: usize,
    pub label: String,
    pub status: StepStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunnelView {
    pub current_step: usize,
    pub last_step_index: usize,
    pub step_kind: StepKind,
    pub fields: WizardFields,
    pub progress_fraction: f64,
    /// Progress rail width in percent, rounded to two decimals.
    pub progress_percent: f64,
    pub indicators: Vec<StepIndicator>,
    pub can_retreat: bool,
    pub is_last_step: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorefrontView {
    pub route: Route,
    /// Present only while the funnel route is active.
    pub funnel: Option<FunnelView>,
}

fn round_percent(fraction: f64) -> f64 {
    (fraction * 10_000.0).round() / 100.0
}

impl FunnelController {
    pub fn view(&self) -> FunnelView {
        let current_step = self.current_step();
        let progress_fraction = self.progress_fraction();
        FunnelView {
            current_step,
            last_step_index: self.last_step_index(),
            step_kind: self.step_kind(),
            fields: self.fields().clone(),
            progress_fraction,
            progress_percent: round_percent(progress_fraction),
            indicators: self
                .step_labels()
                .iter()
                .enumerate()
                .map(|(index, label)| StepIndicator {
                    index,
                    label: label.clone(),
                    status: StepStatus::for_index(index, current_step),
                })
                .collect(),
            can_retreat: current_step > 0,
            is_last_step: self.is_last_step(),
        }
    }
}

impl Storefront {
    pub fn view(&self) -> StorefrontView {
        StorefrontView {
            route: self.route(),
            funnel: self.in_funnel().then(|| self.funnel().view()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FunnelConfig, LabelMode};
    use crate::intent::Intent;
    use pretty_assertions::assert_eq;

    #[test]
    fn status_by_index() {
        assert_eq!(StepStatus::for_index(0, 1), StepStatus::Past);
        assert_eq!(StepStatus::for_index(1, 1), StepStatus::Current);
        assert_eq!(StepStatus::for_index(2, 1), StepStatus::Upcoming);
        assert!(StepStatus::Past.is_reached());
        assert!(!StepStatus::Upcoming.is_reached());
    }

    #[test]
    fn indicators_follow_current_step() {
        let mut c = FunnelController::new(FunnelConfig::with_last_step_index(2));
        c.advance();
        let view = c.view();
        let statuses: Vec<_> = view.indicators.iter().map(|i| i.status).collect();
        assert_eq!(
            statuses,
            vec![
                StepStatus::Past,
                StepStatus::Current,
                StepStatus::Upcoming,
                StepStatus::Upcoming
            ]
        );
        assert_eq!(view.indicators[1].label, "Tastes & Routine");
        assert_eq!(view.progress_percent, 50.0);
        assert!(view.can_retreat);
        assert!(!view.is_last_step);
    }

    #[test]
    fn percent_is_rounded() {
        let mut c = FunnelController::new(FunnelConfig::with_last_step_index(3));
        c.advance();
        let view = c.view();
        assert_eq!(view.progress_percent, 33.33);
        assert_eq!(view.step_kind, StepKind::Household);
    }

    #[test]
    fn reconciled_labels_match_step_count() {
        let config = FunnelConfig {
            last_step_index: 1,
            label_mode: LabelMode::Reconciled,
            ..FunnelConfig::default()
        };
        let view = FunnelController::new(config).view();
        assert_eq!(view.indicators.len(), 2);
    }

    #[test]
    fn storefront_view_hides_funnel_at_home() {
        let mut store = Storefront::default();
        assert_eq!(store.view().funnel, None);
        store.dispatch(Intent::EnterFunnel);
        let view = store.view();
        assert_eq!(view.route, Route::Funnel);
        assert_eq!(view.funnel.map(|f| f.current_step), Some(0));
    }

    #[test]
    fn view_serializes_for_renderer() {
        let view = FunnelController::default().view();
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["step_kind"], "zip_code");
        assert_eq!(json["fields"]["zip_code"], "110001");
        assert_eq!(json["indicators"][0]["status"], "current");
        assert_eq!(json["progress_fraction"], 0.0);
    }
}
