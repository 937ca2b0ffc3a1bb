use crate::content::Testimonials as TestimonialsContent;
use leptos::prelude::*;

#[component]
pub fn Testimonials(testimonials: &'static TestimonialsContent) -> impl IntoView {
    view! {
        <section id="testimonials" class="section-narrow">
            <h3 class="section-title">{testimonials.heading}</h3>
            <div class="testimonials-grid">
                {testimonials
                    .items
                    .iter()
                    .map(|t| view! { <TestimonialCard name=t.name title=t.title quote=t.quote /> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

/// Client quote card. Pure pass-through of the provided text.
#[component]
pub fn TestimonialCard(
    name: &'static str,
    title: &'static str,
    quote: &'static str,
) -> impl IntoView {
    let quoted = format!("\"{quote}\"");
    view! {
        <figure class="testimonial-card">
            <blockquote class="testimonial-quote">{quoted}</blockquote>
            <figcaption>
                <h4 class="testimonial-name">{name}</h4>
                <p class="testimonial-title">{title}</p>
            </figcaption>
        </figure>
    }
}
