use gharfresh_funnel::catalog::REVIEWS;
use leptos::prelude::*;

/// Dark social-proof cards.
#[component]
pub fn Reviews() -> impl IntoView {
    view! {
        <section class="reviews">
            <div class="container centered">
                <h2 class="section-title">"Tried, loved, and reordered."</h2>
                <p class="lead">
                    "The proof is on the plate. See why home cooks like you keep coming back."
                </p>
                <div class="review-grid">
                    {REVIEWS.iter().map(|review| {
                        view! {
                            <div class="review-card">
                                <div class="review-photo">
                                    <img src=review.image alt="Customer food" />
                                </div>
                                <div class="review-body">
                                    <div class="review-stars">"★★★★★"</div>
                                    <p class="review-text">{format!("\"{}\"", review.text)}</p>
                                    <div class="review-footer">
                                        <div class="review-name">{review.name}</div>
                                        <div class="review-date">
                                            {review.date}" via "<span class="review-source">"Trustpilot"</span>
                                        </div>
                                    </div>
                                </div>
                            </div>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
