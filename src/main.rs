//! One-shot branding pass over the dashboard assets.
//!
//! Run with no arguments to rewrite the fixed dashboard directory.
//! Run with `--base-dir <DIR>` to point the same pass at another copy.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use brand_rewrite::config::{RewriteConfig, DEFAULT_BASE_DIR};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Swap dashboard emoji for icons and unify border-radius")]
struct Cli {
    /// Directory holding `index.html`, `app.js` and `styles.css`.
    #[arg(long = "base-dir", default_value = DEFAULT_BASE_DIR)]
    base_dir: PathBuf,
}

// ───────────────────────────────────────── main ─────────────

fn main() -> Result<()> {
    // Silent unless RUST_LOG is set.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // stdout is the progress report
        .init();

    let cli = Cli::parse();
    let config = RewriteConfig::new(cli.base_dir);

    let summary = brand_rewrite::run::run(&config, &mut io::stdout().lock())?;
    tracing::info!(
        modified = summary.modified.len(),
        untouched = summary.untouched.len(),
        skipped = summary.skipped.len(),
        "done"
    );

    Ok(())
}
