use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;
use snatch_logging::LogDestination;

/// Fetch pages and copy `[title](url)` links for them to the clipboard.
#[derive(Debug, Parser)]
#[command(name = "snatch", version)]
#[command(about = "Copy Markdown bookmark links with cleaned-up page titles", long_about = None)]
pub struct Args {
    /// Absolute URLs to snatch, processed in order.
    #[arg(required = true, value_name = "URL")]
    pub urls: Vec<String>,

    /// Read hostname overrides from this file instead of searching for config.json.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the links without copying them to the clipboard.
    #[arg(long)]
    pub no_clipboard: bool,

    /// Per-request timeout in seconds.
    #[arg(long, default_value = "30", value_name = "SECS")]
    pub timeout: u64,

    /// Log debug details to stderr.
    #[arg(short, long)]
    pub verbose: bool,

    /// Also write the log to ./snatch.log.
    #[arg(long)]
    pub log_file: bool,
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        }
    }

    pub fn log_destination(&self) -> LogDestination {
        if self.log_file {
            LogDestination::Both
        } else {
            LogDestination::Terminal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_required() {
        assert!(Args::try_parse_from(["snatch"]).is_err());
    }

    #[test]
    fn keeps_url_order_and_defaults() {
        let args = Args::try_parse_from(["snatch", "https://b.example.com", "https://a.example.com"])
            .unwrap();
        assert_eq!(args.urls, ["https://b.example.com", "https://a.example.com"]);
        assert_eq!(args.config, None);
        assert!(!args.no_clipboard);
        assert_eq!(args.timeout, 30);
        assert_eq!(args.log_level(), LevelFilter::Warn);
        assert_eq!(args.log_destination(), LogDestination::Terminal);
    }

    #[test]
    fn parses_flags() {
        let args = Args::try_parse_from([
            "snatch",
            "--config",
            "/tmp/snatch.json",
            "--no-clipboard",
            "-v",
            "--log-file",
            "--timeout",
            "5",
            "https://example.com",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/snatch.json")));
        assert!(args.no_clipboard);
        assert_eq!(args.timeout, 5);
        assert_eq!(args.log_level(), LevelFilter::Debug);
        assert_eq!(args.log_destination(), LogDestination::Both);
    }
}
