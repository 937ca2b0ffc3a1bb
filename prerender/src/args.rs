use clap::Parser;
use ironliving_landing::Variant;
use std::path::PathBuf;

use crate::config::CONFIG_FILE;

#[derive(Parser, Debug, Clone)]
#[command(name = "ironliving-prerender")]
#[command(about = "Render the Iron Living landing page variants to static HTML")]
#[command(version)]
pub struct Args {
    /// Config file (missing file means defaults)
    #[arg(long, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Output root, overrides `out_dir` from the config
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Variant to render (classic, studio); repeat for several. Default: all
    #[arg(long = "variant", value_name = "NAME")]
    pub variants: Vec<Variant>,

    /// Emit a trunk link to this manifest, relative to each written file
    #[arg(long, value_name = "MANIFEST")]
    pub trunk: Option<String>,

    /// Snapshot the page with the application form already open
    #[arg(long)]
    pub form_open: bool,

    /// Log level when RUST_LOG is unset (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
