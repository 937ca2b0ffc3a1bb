use crate::content::AboutCopy;
use leptos::prelude::*;

#[component]
pub fn About(copy: &'static AboutCopy) -> impl IntoView {
    view! {
        <section id="about" class="section-narrow">
            <h2 class="section-title about-title">{copy.heading}</h2>
            <p class="about-body">{copy.body}</p>
        </section>
    }
}
