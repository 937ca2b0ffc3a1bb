use thiserror::Error;

/// Errors surfaced by the landing crate.
///
/// The page itself has no failure path; this only covers choosing what to
/// render.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LandingError {
    #[error("unknown variant `{name}` (expected one of: classic, studio)")]
    UnknownVariant { name: String },
}
