use std::time::Duration;

use anyhow::{Context, Result};
use snatch_core::{join_links, LinkLabel};
use snatch_engine::{
    load_config, ClipboardSink, FetchSettings, ReqwestFetcher, Snatcher, SystemClipboard,
};
use snatch_logging::{snatch_debug, snatch_info};

use crate::cli::Args;
use crate::report::StdoutReport;

/// Title every URL in `args`, then copy the joined links unless
/// `--no-clipboard` was given.
pub async fn run(args: Args) -> Result<Vec<LinkLabel>> {
    let config = load_config(args.config.as_deref()).context("failed to load config")?;
    if let Some(path) = &config.source {
        println!("Loaded {}", path.display());
    }

    let settings = FetchSettings {
        request_timeout: Duration::from_secs(args.timeout),
        ..FetchSettings::default()
    };
    snatch_debug!("Fetch settings: {:?}", settings);

    let snatcher = Snatcher::new(ReqwestFetcher::new(settings), config.overrides);
    let links = snatcher.snatch_all(&args.urls, &StdoutReport).await?;
    let text = join_links(&links);

    if args.no_clipboard {
        snatch_info!("Skipping clipboard for {} link(s)", links.len());
        return Ok(links);
    }

    let clipboard = SystemClipboard::detect()?;
    clipboard
        .copy(&text)
        .with_context(|| format!("failed to copy via {:?}", clipboard.program()))?;
    println!("Copied to clipboard");
    Ok(links)
}
