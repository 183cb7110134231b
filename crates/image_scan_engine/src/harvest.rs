use engine_logging::{engine_info, engine_warn};
use image_scan_core::{collect_image_urls, ScanConfig};

use crate::{decode_utf8, DecodeError, FetchError, Fetcher};

/// Any failure along the fetch, decode and scan pipeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HarvestError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Fetch `config.page_url` and return its CDN image URLs.
///
/// At most `config.max_results` unique URLs are returned, in discovery order.
/// A page without any image fragment yields an empty list.
pub async fn harvest_image_urls(
    fetcher: &dyn Fetcher,
    config: &ScanConfig,
) -> Result<Vec<String>, HarvestError> {
    let output = fetcher.fetch(&config.page_url).await.map_err(|err| {
        engine_warn!("fetch of {} failed: {}", config.page_url, err);
        HarvestError::from(err)
    })?;
    let page = decode_utf8(&output.bytes).map_err(|err| {
        engine_warn!("decode of {} failed: {}", output.final_url, err);
        HarvestError::from(err)
    })?;

    let urls = collect_image_urls(&page.text, config);
    engine_info!(
        "{} image urls from {} (limit {})",
        urls.len(),
        output.final_url,
        config.max_results
    );

    Ok(urls)
}
