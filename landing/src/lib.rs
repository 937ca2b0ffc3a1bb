//! # ironliving-landing
//!
//! The Iron Living landing page as Leptos components.
//!
//! The page is static content (hero, features, gallery, testimonials, video,
//! footer) plus one interaction: either Apply control reveals the coaching
//! application form, and shortly after it mounts the page smooth-scrolls to
//! it. The same component tree is used two ways:
//!
//! - **Browser** - the `ironliving-landing` binary (feature `csr`) mounts
//!   [`LandingPage`] and runs the Apply flow.
//! - **Static** - [`render_document`] renders a complete HTML document through
//!   Leptos SSR. `ironliving-prerender` writes one per [`Variant`].
//!
//! ## Quick Start
//!
//! ```rust
//! use ironliving_landing::{render_document, RenderOptions, Variant};
//!
//! let html = render_document(Variant::Classic.content(), &RenderOptions::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Iron Living | Train Hard. Live Free."));
//! ```
//!
//! ## Modules
//!
//! - [`content`] - copy, asset paths and palette for each variant
//! - [`state`] - the form-visibility flag
//! - [`reveal`] - deferred scroll-into-view of the form
//! - [`sections`] - presentational section components and cards
//! - [`styles`] - shared stylesheet

#![warn(rustdoc::missing_crate_level_docs)]

pub mod content;
pub mod document;
pub mod error;
pub mod page;
pub mod reveal;
pub mod sections;
pub mod state;
pub mod styles;

pub use content::{SiteContent, Variant};
pub use document::LandingDocument;
pub use error::LandingError;
pub use page::LandingPage;
pub use state::FormState;

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// Knobs for [`render_document`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Form visibility baked into the snapshot.
    pub initial_form: FormState,
    /// Emit a trunk `rel="rust"` link pointing at this manifest.
    pub trunk_manifest: Option<String>,
}

/// Render a complete HTML document for `content`.
///
/// # Example
///
/// ```rust
/// use ironliving_landing::{render_document, FormState, RenderOptions, Variant};
///
/// let options = RenderOptions {
///     initial_form: FormState::Visible,
///     ..Default::default()
/// };
/// let html = render_document(Variant::Studio.content(), &options);
/// assert!(html.contains(r#"id="apply""#));
/// ```
pub fn render_document(content: &'static SiteContent, options: &RenderOptions) -> String {
    let initial_form = options.initial_form;
    let trunk_manifest = options.trunk_manifest.clone();

    let owner = Owner::new();
    let html = owner.with(move || {
        let doc = view! {
            <LandingDocument
                content=content
                initial_form=initial_form
                trunk_manifest=trunk_manifest
            />
        };
        doc.to_html()
    });

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_doctype_and_variant_marker() {
        let html = render_document(Variant::Classic.content(), &RenderOptions::default());

        assert!(html.starts_with("<!DOCTYPE html>\n<html"));
        assert!(html.contains(r#"data-variant="classic""#));
        assert!(html.contains(r#"id="app""#));
    }

    #[test]
    fn trunk_link_only_when_requested() {
        let plain = render_document(Variant::Classic.content(), &RenderOptions::default());
        assert!(!plain.contains("data-trunk"));

        let options = RenderOptions {
            trunk_manifest: Some("../../landing/Cargo.toml".into()),
            ..Default::default()
        };
        let shell = render_document(Variant::Classic.content(), &options);
        assert!(shell.contains("data-trunk"));
        assert!(shell.contains(r#"href="../../landing/Cargo.toml""#));
        assert!(shell.contains(r#"data-cargo-features="csr""#));
    }

    #[test]
    fn theme_is_applied_to_page_root() {
        let html = render_document(Variant::Studio.content(), &RenderOptions::default());
        assert!(html.contains("--accent: #F59E0B;"));
    }
}
