use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogoSize {
    #[default]
    Large,
    Small,
}

impl LogoSize {
    fn class(&self) -> &'static str {
        match self {
            LogoSize::Large => "logo logo-large",
            LogoSize::Small => "logo logo-small",
        }
    }
}

/// Leaf mark plus the stacked "Ghar / Fresh" wordmark.
#[component]
pub fn Logo(#[prop(optional)] size: LogoSize) -> impl IntoView {
    view! {
        <div class=size.class()>
            <div class="logo-mark">
                <svg viewBox="0 0 100 100" fill="none">
                    <path
                        d="M50 0C68.618 0 84.773 10.42 93.301 25H60V50H100C100 77.614 77.614 100 50 100C22.386 100 0 77.614 0 50C0 22.386 22.386 0 50 0Z"
                        fill="#BFF438"
                    />
                    <path
                        d="M50 0C77.614 0 100 22.386 100 50H60V25H93.301C84.773 10.42 68.618 0 50 0Z"
                        fill="#067A46"
                    />
                </svg>
            </div>
            <div class="logo-words">
                <span class="logo-word">"Ghar"</span>
                <span class="logo-word logo-word-accent">"Fresh"</span>
            </div>
        </div>
    }
}
