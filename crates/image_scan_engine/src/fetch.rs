use std::error::Error as _;

use engine_logging::engine_info;
use image_scan_core::DEFAULT_USER_AGENT;

use crate::{FailureKind, FetchError, FetchOutput};

/// Request settings. No timeout or size limit is applied; redirects follow
/// reqwest's default policy.
#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub user_agent: String,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchOutput, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    settings: FetchSettings,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, FetchError> {
        // The user agent is the only header set beyond reqwest's defaults.
        reqwest::Client::builder()
            .user_agent(self.settings.user_agent.as_str())
            .build()
            .map_err(map_reqwest_error)
    }
}

#[async_trait::async_trait]
impl Fetcher for ReqwestFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchOutput, FetchError> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let client = self.build_client()?;

        engine_info!("GET {}", parsed);
        let response = client.get(parsed).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let final_url = response.url().to_string();
        let bytes = response.bytes().await.map_err(map_reqwest_error)?.to_vec();
        engine_info!(
            "fetched {} status={} bytes={}",
            final_url,
            status.as_u16(),
            bytes.len()
        );

        Ok(FetchOutput { bytes, final_url })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    let kind = if err.is_redirect() {
        FailureKind::RedirectLimitExceeded
    } else {
        FailureKind::Network
    };
    FetchError::new(kind, error_chain_message(&err))
}

/// Join an error and its `source()` chain into one line.
fn error_chain_message(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
