use gharfresh_funnel::Intent;
use gharfresh_funnel::catalog::REASONS;
use leptos::prelude::*;

use crate::store::use_store;

/// Four-column "Why GharFresh?" strip.
#[component]
pub fn WhyGharFresh() -> impl IntoView {
    let store = use_store();
    view! {
        <section id="why" class="why">
            <div class="container centered">
                <h2 class="section-title">"Why GharFresh?"</h2>
                <div class="why-grid">
                    {REASONS.iter().enumerate().map(|(idx, reason)| {
                        view! {
                            <div class="why-item">
                                <div class="why-badge">{format!("0{}", idx + 1)}</div>
                                <h4 class="why-title">{reason.title}</h4>
                                <p class="body">{reason.description}</p>
                            </div>
                        }
                    }).collect::<Vec<_>>()}
                </div>
                <button class="btn btn-outline" on:click=store.on(Intent::EnterFunnel)>
                    "Get Started"
                </button>
            </div>
        </section>
    }
}
