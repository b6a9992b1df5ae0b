//! Static promotional sections of the home page

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HeroBanner() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero__content">
                <p class="hero__eyebrow">"New season"</p>
                <h1 class="hero__title">"Everyday pieces, made to last"</h1>
                <p class="hero__text">
                    "Browse the latest arrivals and find something you will reach for every day."
                </p>
                <A href="/products">
                    <span class="button button--primary">"Shop now"</span>
                </A>
            </div>
        </section>
    }
}

#[component]
pub fn SaleBanner(
    #[prop(into)] headline: String,
    #[prop(into)] text: String,
    #[prop(optional, into)] code: Option<String>,
) -> impl IntoView {
    view! {
        <section class="sale-banner">
            <h2 class="sale-banner__headline">{headline}</h2>
            <p class="sale-banner__text">{text}</p>
            {code.map(|c| view! {
                <p class="sale-banner__code">"Use code " <strong>{c}</strong> " at checkout"</p>
            })}
        </section>
    }
}

#[component]
pub fn ServiceHighlights() -> impl IntoView {
    let items = [
        ("Free shipping", "On orders over $50"),
        ("Easy returns", "30 days to change your mind"),
        ("Secure payment", "Your data stays private"),
    ];

    view! {
        <section class="highlights">
            {items
                .into_iter()
                .map(|(title, text)| view! {
                    <div class="highlights__item">
                        <h4>{title}</h4>
                        <p>{text}</p>
                    </div>
                })
                .collect_view()}
        </section>
    }
}
