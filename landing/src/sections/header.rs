use crate::content::Brand;
use leptos::prelude::*;

#[component]
pub fn SiteHeader(brand: &'static Brand, on_apply: Callback<()>) -> impl IntoView {
    let logo = &brand.logo;
    view! {
        <header class="site-header">
            <img src=logo.src alt=logo.alt width=logo.width height=logo.height />
            <button class="header-apply" on:click=move |_| on_apply.run(())>
                {brand.apply_label}
            </button>
        </header>
    }
}
