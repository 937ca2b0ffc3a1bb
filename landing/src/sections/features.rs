use crate::content::Feature;
use leptos::prelude::*;

#[component]
pub fn Features(features: &'static [Feature]) -> impl IntoView {
    view! {
        <section id="features" class="features-grid">
            {features
                .iter()
                .map(|feature| {
                    view! { <FeatureCard title=feature.title description=feature.description /> }
                })
                .collect::<Vec<_>>()}
        </section>
    }
}

/// One offering. Pure pass-through of the provided text.
#[component]
pub fn FeatureCard(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <article class="feature-card">
            <h3 class="feature-title">{title}</h3>
            <p class="feature-description">{description}</p>
        </article>
    }
}
