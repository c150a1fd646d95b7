use std::path::PathBuf;

use clap::Parser;

/// Lite, a minimal tabbed web browser.
#[derive(Parser, Debug)]
#[command(name = "lite", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error) or a full
    /// filter directive such as `lite_session=debug`.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Open this url or search in the first tab.
    #[arg(value_name = "URL")]
    pub url: Option<String>,
}

impl Args {
    /// `--log-level info` means `lite=info`; anything with `=` is taken
    /// as a directive verbatim.
    pub fn log_directive(&self) -> Option<String> {
        self.log_level.as_deref().map(|level| {
            if level.contains('=') {
                level.to_string()
            } else {
                format!("lite={level}")
            }
        })
    }
}

pub fn parse() -> Args {
    Args::parse()
}
