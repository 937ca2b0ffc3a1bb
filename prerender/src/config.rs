//! Configuration file support for the prerenderer.
//!
//! Loads optional `ironliving.toml`. Every key is optional and CLI flags win.

use ironliving_landing::Variant;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "ironliving.toml";

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PrerenderConfig {
    /// Output root; each variant lands in `<out_dir>/<variant>/index.html`
    pub out_dir: PathBuf,
    /// Variants to render. Empty means all of them.
    pub variants: Vec<Variant>,
    /// Manifest path for the trunk link, relative to the written file
    pub trunk_manifest: Option<String>,
}

impl Default for PrerenderConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("dist"),
            variants: Vec::new(),
            trunk_manifest: None,
        }
    }
}

impl PrerenderConfig {
    /// Load config from a specific path.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read config, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = PrerenderConfig::default();
        assert_eq!(config.out_dir, PathBuf::from("dist"));
        assert!(config.variants.is_empty());
        assert!(config.trunk_manifest.is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = PrerenderConfig::load_from_path(&temp.path().join(CONFIG_FILE));
        assert_eq!(config, PrerenderConfig::default());
    }

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join(CONFIG_FILE);
        let mut file = std::fs::File::create(&path).expect("create config");
        writeln!(
            file,
            r#"
out_dir = "public/site"
variants = ["studio"]
trunk_manifest = "../../landing/Cargo.toml"
"#
        )
        .expect("write config");

        let config = PrerenderConfig::load_from_path(&path);
        assert_eq!(config.out_dir, PathBuf::from("public/site"));
        assert_eq!(config.variants, vec![Variant::Studio]);
        assert_eq!(config.trunk_manifest.as_deref(), Some("../../landing/Cargo.toml"));
    }

    #[test]
    fn test_load_partial_config_keeps_defaults() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join(CONFIG_FILE);
        std::fs::write(&path, "variants = [\"classic\", \"studio\"]\n").expect("write config");

        let config = PrerenderConfig::load_from_path(&path);
        assert_eq!(config.out_dir, PathBuf::from("dist"));
        assert_eq!(config.variants, Variant::ALL.to_vec());
    }

    #[test]
    fn test_variant_names_ignore_case() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join(CONFIG_FILE);
        std::fs::write(&path, "out_dir = \"site\"\nvariants = [\"Studio\", \"CLASSIC\"]\n")
            .expect("write config");

        let config = PrerenderConfig::load_from_path(&path);
        assert_eq!(config.out_dir, PathBuf::from("site"));
        assert_eq!(config.variants, vec![Variant::Studio, Variant::Classic]);
    }

    #[test]
    fn test_load_invalid_config_falls_back() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join(CONFIG_FILE);
        std::fs::write(&path, "variants = [\"deluxe\"]\n").expect("write config");

        let config = PrerenderConfig::load_from_path(&path);
        assert_eq!(config, PrerenderConfig::default());
    }
}
