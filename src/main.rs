use std::process::exit;
use clap::Parser;
use log::{error, info};
use tokio::runtime::Builder;
use torrent_tracker_scraper::common::common::setup_logging;
use torrent_tracker_scraper::config::structs::configuration::Configuration;
use torrent_tracker_scraper::scraper::structs::scraper::Scraper;
use torrent_tracker_scraper::structs::Cli;

fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let mut config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[ERROR] {e}");
            exit(101)
        }
    };

    config.apply_cli(&args);

    if let Err(e) = config.validate() {
        eprintln!("[ERROR] {} ({})", e, args.config);
        exit(101);
    }

    if let Err(e) = setup_logging(&config) {
        eprintln!("[ERROR] {e}");
        exit(1);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let scraper = Scraper::from_config(&config, args.infohashes);

    let response = Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(scraper.scrape());

    match serde_json::to_string_pretty(&response) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            error!("Could not serialize scrape response: {e}");
            exit(1);
        }
    }

    Ok(())
}
