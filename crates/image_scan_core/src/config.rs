/// Collection page scanned by default.
pub const DEFAULT_PAGE_URL: &str = "https://dimemtl.com/collections/shop-all";

/// Scheme and host prepended to root-relative fragments.
pub const DEFAULT_ORIGIN: &str = "https://dimemtl.com";

/// Browser identification sent with the page request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

pub const DEFAULT_MAX_RESULTS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    pub page_url: String,
    pub origin: String,
    pub user_agent: String,
    pub max_results: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            page_url: DEFAULT_PAGE_URL.to_string(),
            origin: DEFAULT_ORIGIN.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}
