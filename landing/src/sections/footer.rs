use gharfresh_funnel::catalog::FOOTER_COLUMNS;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-columns">
                    {FOOTER_COLUMNS.iter().map(|column| {
                        view! {
                            <div class="footer-column">
                                <h5 class="footer-heading">{column.title}</h5>
                                <ul class="footer-list">
                                    {column.links.iter().map(|link| view! {
                                        <li><a href="#" class="footer-link">{*link}</a></li>
                                    }).collect::<Vec<_>>()}
                                </ul>
                            </div>
                        }
                    }).collect::<Vec<_>>()}
                    <div class="footer-column footer-apps">
                        <h5 class="footer-heading">"Download our app"</h5>
                        <button class="store-badge">
                            <span class="store-badge-small">"Download on the"</span>
                            <span class="store-badge-big">"App Store"</span>
                        </button>
                        <button class="store-badge">
                            <span class="store-badge-small">"GET IT ON"</span>
                            <span class="store-badge-big">"Google Play"</span>
                        </button>
                    </div>
                </div>
                <div class="footer-bottom">
                    <div class="footer-social">
                        <a href="#" class="social-link">"Facebook"</a>
                        <a href="#" class="social-link">"Twitter"</a>
                        <a href="#" class="social-link">"Instagram"</a>
                    </div>
                    <div class="footer-legal">
                        <span>"© 2026 GharFresh Inc."</span>
                        <a href="#" class="footer-link">"Terms and Conditions"</a>
                        <a href="#" class="footer-link">"Privacy Policy"</a>
                        <a href="#" class="footer-link">"Accessibility"</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
