//! Root document component - the complete HTML page

use crate::content::SiteContent;
use crate::page::LandingPage;
use crate::state::FormState;
use crate::styles::LANDING_CSS;
use leptos::prelude::*;

/// The complete HTML document for one variant.
///
/// The page sits inside `#app`; the browser build replaces that snapshot
/// with the live, interactive page.
#[component]
pub fn LandingDocument(
    content: &'static SiteContent,
    #[prop(optional)] initial_form: FormState,
    /// Path to `landing/Cargo.toml`, relative to the written file. When set, a trunk
    /// link is emitted so `trunk build` compiles the browser bundle into the document.
    #[prop(default = None)]
    trunk_manifest: Option<String>,
) -> impl IntoView {
    let meta = &content.meta;
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content=meta.viewport />
                <title>{meta.title}</title>
                <meta name="description" content=meta.description />
                <meta name="author" content=meta.author />
                <link rel="icon" href=meta.favicon />
                <style>{LANDING_CSS}</style>
                {trunk_manifest
                    .map(|manifest| {
                        view! {
                            <link
                                data-trunk=""
                                rel="rust"
                                href=manifest
                                data-bin="ironliving-landing"
                                data-cargo-features="csr"
                            />
                        }
                    })}
            </head>
            <body data-variant=content.variant.as_str()>
                <div id="app">
                    <LandingPage content=content initial_form=initial_form />
                </div>
            </body>
        </html>
    }
}
