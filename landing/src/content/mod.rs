//! Page content - compile-time copy, asset paths and theme per variant.
//!
//! Nothing here changes at runtime. Cards and tiles have no identity beyond
//! their position in the slices below, and the components render them in
//! that order.

mod classic;
mod studio;

use crate::error::LandingError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

pub use classic::CLASSIC;
pub use studio::STUDIO;

/// Which content set the page renders.
///
/// Names match case-insensitively, the same way from the CLI and from config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Hosted video embed, original copy and palette.
    #[default]
    Classic,
    /// Local demo video, alternate copy and palette.
    Studio,
}

impl Variant {
    /// Every variant, in render order.
    pub const ALL: [Variant; 2] = [Variant::Classic, Variant::Studio];

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Classic => "classic",
            Variant::Studio => "studio",
        }
    }

    pub fn content(self) -> &'static SiteContent {
        match self {
            Variant::Classic => &CLASSIC,
            Variant::Studio => &STUDIO,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = LandingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| LandingError::UnknownVariant {
                name: s.to_string(),
            })
    }
}

impl<'de> Deserialize<'de> for Variant {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// Everything one variant of the page shows.
#[derive(Debug)]
pub struct SiteContent {
    pub variant: Variant,
    pub meta: PageMeta,
    pub theme: Theme,
    pub brand: Brand,
    pub hero: HeroCopy,
    pub about: AboutCopy,
    pub features: &'static [Feature],
    pub gallery: Gallery,
    pub testimonials: Testimonials,
    pub video: VideoSection,
    pub application: ApplicationEmbed,
    pub footer: FooterCopy,
}

/// `<head>` metadata.
#[derive(Debug)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
    pub viewport: &'static str,
    pub author: &'static str,
    pub favicon: &'static str,
}

/// Palette, exposed to the stylesheet as CSS custom properties.
#[derive(Debug)]
pub struct Theme {
    pub bg_from: &'static str,
    pub bg_via: &'static str,
    pub bg_to: &'static str,
    pub accent: &'static str,
    pub cta: &'static str,
    pub cta_hover: &'static str,
    pub link: &'static str,
}

impl Theme {
    /// Inline `style` value overriding the stylesheet defaults.
    pub fn css_vars(&self) -> String {
        format!(
            "--bg-from: {}; --bg-via: {}; --bg-to: {}; --accent: {}; --cta: {}; --cta-hover: {}; --link: {};",
            self.bg_from, self.bg_via, self.bg_to, self.accent, self.cta, self.cta_hover, self.link
        )
    }
}

#[derive(Debug)]
pub struct Image {
    pub src: &'static str,
    pub alt: &'static str,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug)]
pub struct Brand {
    pub logo: Image,
    /// Label of the header Apply control.
    pub apply_label: &'static str,
}

#[derive(Debug)]
pub struct HeroCopy {
    pub headline_lead: &'static str,
    /// Second half of the headline, rendered in the call-to-action color.
    pub headline_accent: &'static str,
    pub tagline: &'static str,
    pub cta_label: &'static str,
}

#[derive(Debug)]
pub struct AboutCopy {
    pub heading: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug)]
pub struct SocialLink {
    pub label: &'static str,
    pub handle: &'static str,
    pub url: &'static str,
}

#[derive(Debug)]
pub struct Gallery {
    pub heading: &'static str,
    pub images: &'static [Image],
    pub follow: SocialLink,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub title: &'static str,
    pub quote: &'static str,
}

#[derive(Debug)]
pub struct Testimonials {
    pub heading: &'static str,
    pub items: &'static [Testimonial],
}

/// Where the demo video comes from.
#[derive(Debug)]
pub enum VideoEmbed {
    /// Third-party player in an iframe.
    Hosted {
        title: &'static str,
        src: &'static str,
    },
    /// File served next to the page.
    File {
        src: &'static str,
        poster: Option<&'static str>,
    },
}

#[derive(Debug)]
pub struct VideoSection {
    pub heading: &'static str,
    pub media: VideoEmbed,
}

/// The hosted coaching application form.
#[derive(Debug)]
pub struct ApplicationEmbed {
    pub heading: &'static str,
    pub frame_title: &'static str,
    pub src: &'static str,
    pub height: &'static str,
}

#[derive(Debug)]
pub struct FooterCopy {
    pub owner: &'static str,
    pub credit_label: &'static str,
    pub credit_href: &'static str,
}
