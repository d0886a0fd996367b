// Home page - hero, selling points, menus and reviews
use crate::sections::{Footer, Hero, InsideTheBox, MenuGrid, Reviews, WhyGharFresh};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main>
            <Hero />
            <WhyGharFresh />
            <InsideTheBox />
            <MenuGrid />
            <Reviews />
        </main>
        <Footer />
    }
}
