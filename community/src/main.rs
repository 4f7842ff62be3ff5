use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use community_page::render_page;
use community_page::types::PageMeta;

/// Render the ICP community page to static HTML.
///
/// ```bash
/// community-render --config page.json --output build/community.html
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file overriding page metadata (title, description, share image, ...).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output file. Writes to stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let meta = match &args.config {
        Some(path) => PageMeta::from_path(path)?,
        None => PageMeta::default(),
    };

    let html = render_page(&meta);

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            fs::write(path, &html).with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(path = %path.display(), "page written");
        }
        None => io::stdout()
            .write_all(html.as_bytes())
            .context("writing page to stdout")?,
    }

    Ok(())
}
