//! # gharfresh-funnel
//!
//! Page-state core of the GharFresh storefront: the multi-step onboarding
//! funnel and the home/funnel route switch around it.
//!
//! The crate has no rendering dependency. The `landing` app (Leptos) and the
//! `gharfresh-funnel` replay binary both drive the same [`Storefront`] store.
//!
//! ## Quick Start
//!
//! ```rust
//! use gharfresh_funnel::{Effect, Intent, Route, Storefront};
//!
//! let mut store = Storefront::default();
//! store.dispatch(Intent::EnterFunnel);
//! store.dispatch(Intent::Advance);
//! store.dispatch(Intent::IncrementAdults);
//! assert_eq!(store.funnel().fields().adults_count, 3);
//!
//! // Continue past the last step finishes the wizard and goes home.
//! store.dispatch(Intent::Advance);
//! let effects = store.dispatch(Intent::Advance);
//! assert!(effects.contains(&Effect::Completed));
//! assert_eq!(store.route(), Route::Home);
//! ```
//!
//! ## Architecture
//!
//! - [`controller`] - [`FunnelController`], the wizard state machine
//! - [`state`] - [`WizardState`] and captured fields
//! - [`store`] - [`Storefront`] route switch, [`Effect`]s
//! - [`intent`] - [`Intent`]s and their text form
//! - [`view`] - derived view models for the renderer
//! - [`config`] - TOML-backed [`FunnelConfig`]
//! - [`catalog`] - static mock content
//!
//! ---
//!
//! Developed by The GharFresh Team (c)2026

pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod intent;
pub mod preference;
pub mod state;
pub mod store;
pub mod view;

pub use config::{FunnelConfig, LabelMode};
pub use controller::{FunnelController, StepOutcome};
pub use error::{ConfigError, IntentParseError};
pub use intent::Intent;
pub use preference::PreferenceTag;
pub use state::{StepKind, WizardFields, WizardState};
pub use store::{Effect, Route, Storefront};
pub use view::{FunnelView, StepIndicator, StepStatus, StorefrontView};
