//! Image scan engine: page fetch, decoding, the scan pipeline and reporting.
mod decode;
mod fetch;
mod harvest;
mod report;
mod types;

pub use decode::{decode_utf8, DecodeError, DecodedPage};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use harvest::{harvest_image_urls, HarvestError};
pub use report::write_report;
pub use types::{FailureKind, FetchError, FetchOutput};
