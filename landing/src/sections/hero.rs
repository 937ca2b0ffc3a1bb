use crate::content::HeroCopy;
use leptos::prelude::*;

#[component]
pub fn Hero(copy: &'static HeroCopy, on_apply: Callback<()>) -> impl IntoView {
    view! {
        <section class="hero">
            <h1 class="hero-title accent">
                {copy.headline_lead}
                " "
                <span class="cta-text">{copy.headline_accent}</span>
            </h1>
            <p class="hero-tagline">{copy.tagline}</p>
            <button class="btn-apply" on:click=move |_| on_apply.run(())>
                {copy.cta_label}
            </button>
        </section>
    }
}
