// Landing page sections
// Each section takes its slice of `SiteContent` and renders it as-is.

mod about;
mod application;
mod features;
mod footer;
mod gallery;
mod header;
mod hero;
mod testimonials;
mod video;

pub use about::About;
pub use application::ApplicationForm;
pub use features::{FeatureCard, Features};
pub use footer::{Footer, copyright_year};
pub use gallery::Gallery;
pub use header::SiteHeader;
pub use hero::Hero;
pub use testimonials::{TestimonialCard, Testimonials};
pub use video::Video;
