//! Stylesheet shared by the prerendered document and the trunk build.
//!
//! The CSS lives in `style/landing.css` so trunk can bundle it for the
//! browser build; the prerenderer inlines the same file. Per-variant colors
//! are applied as custom properties on the page root, see
//! [`crate::content::Theme::css_vars`].

/// Base stylesheet, inlined into prerendered documents.
pub const LANDING_CSS: &str = include_str!("../style/landing.css");
