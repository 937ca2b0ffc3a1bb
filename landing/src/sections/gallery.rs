use crate::content::Gallery as GalleryContent;
use leptos::prelude::*;

#[component]
pub fn Gallery(gallery: &'static GalleryContent) -> impl IntoView {
    let follow = &gallery.follow;
    view! {
        <section id="gallery" class="section-wide">
            <h3 class="section-title">{gallery.heading}</h3>
            <div class="gallery-grid">
                {gallery
                    .images
                    .iter()
                    .map(|image| {
                        view! {
                            <div class="gallery-tile">
                                <img src=image.src alt=image.alt loading="lazy" />
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <p class="gallery-follow">
                {follow.label}
                " "
                <a href=follow.url target="_blank" rel="noopener noreferrer">
                    {follow.handle}
                </a>
            </p>
        </section>
    }
}
