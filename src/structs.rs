use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Infohashes to scrape, 40 hex characters each. Comma separated lists are accepted.
    pub infohashes: Vec<String>,

    /// Tracker to scrape (udp://host:port). Repeat for more; overrides the config file.
    #[arg(short = 't', long = "tracker")]
    pub trackers: Vec<String>,

    /// Seconds to wait for each tracker response.
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Number of trackers scraped at the same time.
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// Log level (off, trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path of the configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,

    /// Create the config file if it does not exist or is broken.
    #[arg(long)]
    pub create_config: bool,
}
