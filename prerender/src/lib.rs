//! Static renderer for the Iron Living landing page.
//!
//! Resolves what to render from CLI args and `ironliving.toml`, then writes
//! `<out_dir>/<variant>/index.html` for each variant through
//! [`ironliving_landing::render_document`].

pub mod args;
pub mod config;

use anyhow::{Context, Result};
use ironliving_landing::{FormState, RenderOptions, Variant, render_document};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub use args::Args;
pub use config::PrerenderConfig;

/// File name written inside each variant directory.
pub const INDEX_FILE: &str = "index.html";

/// What a run will write, after merging flags over config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub out_dir: PathBuf,
    pub variants: Vec<Variant>,
    pub options: RenderOptions,
}

impl Plan {
    /// Flags win over config; no variants anywhere means all of them.
    /// Duplicates are dropped, first occurrence keeps its place.
    pub fn resolve(args: &Args, config: PrerenderConfig) -> Self {
        let requested = if !args.variants.is_empty() {
            args.variants.clone()
        } else if !config.variants.is_empty() {
            config.variants
        } else {
            Variant::ALL.to_vec()
        };

        let mut variants = Vec::with_capacity(requested.len());
        for variant in requested {
            if !variants.contains(&variant) {
                variants.push(variant);
            }
        }

        let initial_form = if args.form_open {
            FormState::Visible
        } else {
            FormState::Hidden
        };

        Self {
            out_dir: args.out_dir.clone().unwrap_or(config.out_dir),
            variants,
            options: RenderOptions {
                initial_form,
                trunk_manifest: args.trunk.clone().or(config.trunk_manifest),
            },
        }
    }
}

/// Write every planned variant. Returns the written paths in plan order.
pub fn prerender(plan: &Plan) -> Result<Vec<PathBuf>> {
    plan.variants
        .iter()
        .map(|&variant| write_variant(&plan.out_dir, variant, &plan.options))
        .collect()
}

/// Render one variant into `<out_dir>/<variant>/index.html`.
pub fn write_variant(out_dir: &Path, variant: Variant, options: &RenderOptions) -> Result<PathBuf> {
    let dir = out_dir.join(variant.as_str());
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    let html = render_document(variant.content(), options);
    debug!(%variant, bytes = html.len(), "rendered document");

    let path = dir.join(INDEX_FILE);
    std::fs::write(&path, html).with_context(|| format!("failed to write {}", path.display()))?;

    info!(%variant, path = %path.display(), "wrote landing page");
    Ok(path)
}

/// CLI entry: load config, resolve the plan, write the files.
pub fn run(args: &Args) -> Result<Vec<PathBuf>> {
    let config = PrerenderConfig::load_from_path(&args.config);
    let plan = Plan::resolve(args, config);
    debug!(?plan, "resolved prerender plan");
    prerender(&plan)
}
