// Iron Living landing page - Leptos 0.8 browser entry
// Built by trunk with `--features csr`

use ironliving_landing::{LandingPage, Variant};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let document = web_sys::window().and_then(|window| window.document());
    let variant = document
        .as_ref()
        .and_then(|doc| doc.body())
        .and_then(|body| body.get_attribute("data-variant"))
        .map(|name| {
            name.parse::<Variant>().unwrap_or_else(|err| {
                tracing::warn!(%err, "falling back to default variant");
                Variant::default()
            })
        })
        .unwrap_or_default();
    let content = variant.content();

    let app = document
        .and_then(|doc| doc.get_element_by_id("app"))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());

    match app {
        Some(app) => {
            // Swap the prerendered snapshot for the live page.
            app.set_inner_html("");
            leptos::mount::mount_to(app, move || view! { <LandingPage content=content /> })
                .forget();
        }
        None => leptos::mount::mount_to_body(move || view! { <LandingPage content=content /> }),
    }
}
