use std::process::ExitCode;

use clap::Parser;
use ironliving_prerender::{Args, run};
use tracing::info;

fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr, stdout stays free for the list of written files
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    info!("ironliving-prerender v{}", env!("CARGO_PKG_VERSION"));

    match run(&args) {
        Ok(written) => {
            for path in written {
                println!("{}", path.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("[ironliving-prerender] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
