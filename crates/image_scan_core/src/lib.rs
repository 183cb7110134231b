//! Image scan core: pure fragment matching, normalization and deduplication.
mod collect;
mod config;
mod matcher;
mod normalize;

pub use collect::{collect_image_urls, UniqueUrls};
pub use config::{
    ScanConfig, DEFAULT_MAX_RESULTS, DEFAULT_ORIGIN, DEFAULT_PAGE_URL, DEFAULT_USER_AGENT,
};
pub use matcher::{scan_fragments, Fragment, FragmentKind, CDN_FILES_MARKER};
pub use normalize::normalize_fragment;
