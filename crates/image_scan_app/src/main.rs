mod logging;

use std::io;

use anyhow::Context;
use engine_logging::{engine_error, engine_info};
use image_scan_core::ScanConfig;
use image_scan_engine::{harvest_image_urls, write_report, FetchSettings, ReqwestFetcher};
use log::LevelFilter;

fn main() {
    logging::initialize(LevelFilter::Info);

    let config = ScanConfig::default();
    let result = run(&config);
    if let Err(err) = &result {
        engine_error!("scan of {} failed: {:#}", config.page_url, err);
    }

    let stdout = io::stdout();
    if let Err(err) = write_report(&result, &mut stdout.lock()) {
        engine_error!("failed to write report: {}", err);
    }
}

fn run(config: &ScanConfig) -> anyhow::Result<Vec<String>> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let settings = FetchSettings {
        user_agent: config.user_agent.clone(),
    };
    let fetcher = ReqwestFetcher::new(settings);

    engine_info!("scanning {} for CDN image urls", config.page_url);
    let urls = runtime.block_on(harvest_image_urls(&fetcher, config))?;
    Ok(urls)
}
