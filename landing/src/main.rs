// GharFresh Storefront — Leptos 0.8 Edition
// Developed by The GharFresh Team (c)2026

mod console;
mod funnel;
mod pages;
mod sections;
mod store;

use gharfresh_funnel::{Route, Storefront};
use leptos::prelude::*;
use pages::{FunnelPage, HomePage};
use sections::Nav;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    let config = store::config_from_build_env(store::LAST_STEP_INDEX_ENV);
    let store = store::provide_store(Storefront::new(config));

    Effect::new(move || {
        console::print_banner();
    });

    view! {
        <div class="app">
            {move || match store.route() {
                Route::Home => view! {
                    <Nav />
                    <HomePage />
                }
                .into_any(),
                Route::Funnel => view! { <FunnelPage /> }.into_any(),
            }}
        </div>
    }
}
