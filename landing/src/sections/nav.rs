use gharfresh_funnel::Intent;
use leptos::prelude::*;

use super::Logo;
use crate::store::use_store;

#[component]
pub fn Nav() -> impl IntoView {
    let store = use_store();
    let (scrolled, set_scrolled) = signal(false);

    // Compact shadowed bar once the page scrolls past the fold line
    let handle = window_event_listener(leptos::ev::scroll, move |_| {
        let y = window().scroll_y().unwrap_or(0.0);
        set_scrolled.set(y > 20.0);
    });
    on_cleanup(move || handle.remove());

    view! {
        <nav class=move || if scrolled.get() { "nav nav-scrolled" } else { "nav" }>
            <div class="nav-inner">
                <div class="nav-left">
                    <button class="nav-brand" on:click=store.on(Intent::GoHome)>
                        <Logo />
                    </button>
                    <div class="nav-links">
                        <button class="nav-link" on:click=store.on(Intent::EnterFunnel)>
                            "Our Plans"
                        </button>
                        <a href="#why" class="nav-link">"About Us"</a>
                        <a href="#menus" class="nav-link">"Our Menus"</a>
                        <a href="#" class="nav-link">"Gift Cards"</a>
                    </div>
                </div>
                <div class="nav-right">
                    <a href="#" class="nav-link nav-login">"Log in"</a>
                    <button class="btn btn-outline btn-compact" on:click=store.on(Intent::EnterFunnel)>
                        "Get Started"
                    </button>
                </div>
            </div>
        </nav>
    }
}
