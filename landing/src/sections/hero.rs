use gharfresh_funnel::Intent;
use leptos::prelude::*;

use crate::store::use_store;

#[component]
pub fn Hero() -> impl IntoView {
    let store = use_store();
    view! {
        <section class="hero">
            <img
                class="hero-backdrop"
                src="https://images.unsplash.com/photo-1543339308-43e59d6b73a6?auto=format&fit=crop&q=80&w=2400"
                alt="Fresh vegetables and cooking elements"
            />
            <div class="hero-fade"></div>
            <div class="container hero-inner">
                <div class="hero-card">
                    <div class="hero-card-accent"></div>
                    <h1 class="hero-title">"Take the stress out of mealtime"</h1>
                    <p class="lead">
                        "India's most loved meal kit. Delicious, pre-portioned fresh ingredients "
                        "and easy authentic recipes delivered straight to your door."
                    </p>
                    <button class="btn btn-primary btn-block" on:click=store.on(Intent::EnterFunnel)>
                        "View Our Plans"
                    </button>
                </div>
            </div>
        </section>
    }
}
