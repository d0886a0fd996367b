use gharfresh_funnel::Intent;
use gharfresh_funnel::catalog::INSIDE_THE_BOX;
use leptos::prelude::*;

use crate::store::use_store;

#[component]
pub fn InsideTheBox() -> impl IntoView {
    let store = use_store();
    view! {
        <section class="inside-box">
            <div class="container inside-box-grid">
                <div class="inside-box-copy">
                    <h2 class="section-title">"What's inside the box?!"</h2>
                    <ul class="check-list">
                        {INSIDE_THE_BOX.iter().map(|text| {
                            view! {
                                <li class="check-item">
                                    <span class="check-dot">"✓"</span>
                                    <span>{*text}</span>
                                </li>
                            }
                        }).collect::<Vec<_>>()}
                    </ul>
                    <button class="btn btn-primary" on:click=store.on(Intent::EnterFunnel)>
                        "View Our Plans"
                    </button>
                </div>
                <div class="inside-box-visual">
                    <img
                        class="inside-box-photo"
                        src="https://images.unsplash.com/photo-1498837167922-41cfa6f31ce3?auto=format&fit=crop&q=80&w=1200"
                        alt="Box contents spread"
                    />
                </div>
            </div>
        </section>
    }
}
