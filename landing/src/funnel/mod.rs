//! Funnel route: minimal header, progress tracker and the current step.

mod counter;
mod progress;
mod steps;

use gharfresh_funnel::catalog::SUPPORT_PHONE;
use gharfresh_funnel::{Intent, StepKind};
use leptos::prelude::*;

use crate::sections::{Logo, LogoSize};
use crate::store::use_store;
use counter::Counter;
use progress::ProgressTracker;
use steps::{HouseholdStep, ReviewStep, StepVisual, TastesStep, ZipStep};

/// Header kept deliberately bare: logo home, support line, nothing else.
#[component]
fn FunnelHeader() -> impl IntoView {
    let store = use_store();
    view! {
        <header class="funnel-header">
            <div class="funnel-header-inner">
                <button class="nav-brand" on:click=store.on(Intent::GoHome)>
                    <Logo size=LogoSize::Small />
                </button>
                <div class="funnel-help">{format!("Need help? Call {SUPPORT_PHONE}")}</div>
            </div>
        </header>
    }
}

#[component]
pub fn FunnelPage() -> impl IntoView {
    let store = use_store();
    let step_kind = store.select(|f| f.step_kind);

    view! {
        <FunnelHeader />
        <div class="funnel">
            <div class="funnel-top">
                <div class="funnel-top-inner">
                    <ProgressTracker />
                </div>
                <div class="funnel-banner">
                    "Discount successfully applied! Plus: Earn a FREE Premium Chef's Knife on box #3"
                </div>
            </div>
            {move || {
                let Some(kind) = step_kind.get() else {
                    return ().into_any();
                };
                let form = match kind {
                    StepKind::ZipCode => view! { <ZipStep /> }.into_any(),
                    StepKind::Household => view! { <HouseholdStep /> }.into_any(),
                    StepKind::Tastes => view! { <TastesStep /> }.into_any(),
                    StepKind::Review => view! { <ReviewStep /> }.into_any(),
                };
                view! {
                    <div class="funnel-body step-enter" data-step-kind=kind.as_label()>
                        <div class="funnel-form">{form}</div>
                        <div class="funnel-visual">
                            <StepVisual kind=kind />
                        </div>
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
