use crate::content::ApplicationEmbed;
use leptos::html;
use leptos::prelude::*;
use leptos::tachys::html::attribute::custom::CustomAttribute;

/// The hosted application form. Only mounted once the form is visible.
///
/// `section_ref` is what the deferred reveal scroll resolves when it fires.
#[component]
pub fn ApplicationForm(
    embed: &'static ApplicationEmbed,
    section_ref: NodeRef<html::Section>,
) -> impl IntoView {
    // `<iframe>` has no typed `loading` attribute
    let frame = view! {
        <iframe
            class="application-frame"
            title=embed.frame_title
            src=embed.src
            width="100%"
            height=embed.height
        ></iframe>
    }
    .attr("loading", "lazy");

    view! {
        <section id="apply" class="application-form" node_ref=section_ref>
            <h2 class="section-title">{embed.heading}</h2>
            {frame}
        </section>
    }
}
