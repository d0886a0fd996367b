use gharfresh_funnel::catalog::{MENUS, MenuCard};
use leptos::prelude::*;

#[component]
pub fn MenuGrid() -> impl IntoView {
    view! {
        <section id="menus" class="menus">
            <div class="container centered">
                <h2 class="section-title">"Over 50+ fresh recipes every week"</h2>
                <p class="lead narrow">
                    "Easy meals designed by professional chefs and nutritionists. Customise your box "
                    "with vegetarian, high-protein, and calorie-smart Indian options."
                </p>
                <div class="menu-grid">
                    {MENUS.iter().map(|menu| view! { <MenuCardView menu=*menu /> }).collect::<Vec<_>>()}
                </div>
                <a href="#menus" class="btn btn-outline">"View Menus"</a>
            </div>
        </section>
    }
}

#[component]
fn MenuCardView(menu: MenuCard) -> impl IntoView {
    view! {
        <article class="menu-card" data-menu-id=menu.id>
            <div class="menu-photo">
                <img src=menu.image alt=menu.title />
                <span class="menu-tag">{menu.tag}</span>
            </div>
            <h4 class="menu-title">{menu.title}</h4>
            <p class="menu-subtitle">{menu.subtitle}</p>
            <div class="menu-meta">
                <span>{format!("{} min", menu.minutes)}</span>
                <span class="menu-meta-sep"></span>
                <span>{menu.difficulty.as_label()}</span>
            </div>
        </article>
    }
}
