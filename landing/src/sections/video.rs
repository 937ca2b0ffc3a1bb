use crate::content::{VideoEmbed, VideoSection};
use leptos::prelude::*;

#[component]
pub fn Video(video: &'static VideoSection) -> impl IntoView {
    let media = match video.media {
        VideoEmbed::Hosted { title, src } => view! {
            <iframe class="video-frame" title=title src=src allowfullscreen=true></iframe>
        }
        .into_any(),
        VideoEmbed::File { src, poster } => view! {
            <video class="video-frame" src=src poster=poster controls=true playsinline=true></video>
        }
        .into_any(),
    };

    view! {
        <section id="video" class="section-narrow">
            <h3 class="section-title">{video.heading}</h3>
            {media}
        </section>
    }
}
