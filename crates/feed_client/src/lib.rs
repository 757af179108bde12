use domain::FeedResponse;
use std::time::Duration;

pub const DEFAULT_FEED_API_ENDPOINT: &str = "https://api.rss2json.com/v1/api.json";
pub const DEFAULT_CHANNEL_FEED_BASE: &str = "https://www.youtube.com/feeds/videos.xml?channel_id=";
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Where and how the feed-conversion API is reached
#[derive(Debug, Clone)]
pub struct FeedApiConfig {
    /// Feed-conversion endpoint, receives the feed URL as `rss_url`
    pub endpoint: String,
    /// Prefix the channel id is appended to
    pub channel_feed_base: String,
    /// Upper bound for the whole outbound call; `None` waits forever
    pub timeout: Option<Duration>,
}

impl Default for FeedApiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_FEED_API_ENDPOINT.to_string(),
            channel_feed_base: DEFAULT_CHANNEL_FEED_BASE.to_string(),
            timeout: Some(DEFAULT_FETCH_TIMEOUT),
        }
    }
}

/// Failures of a single feed lookup
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Connection failure, timeout or unreadable body
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// Non-2xx answer from the conversion API
    #[error("unexpected status code: {0}")]
    HttpStatus(u16),
    /// Body is not the expected JSON envelope
    #[error("malformed feed response: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("no video items found in feed")]
    EmptyFeed,
}

/// Client for the feed-conversion API
/// Cloning is cheap, the underlying connection pool is shared
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: reqwest::Client,
    config: FeedApiConfig,
}

impl FeedClient {
    /// Build the HTTP client, applying the configured timeout
    pub fn new(config: FeedApiConfig) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            config,
        })
    }

    /// Platform feed URL for a channel. The id is appended as-is.
    pub fn channel_feed_url(&self, channel_id: &str) -> String {
        format!("{}{}", self.config.channel_feed_base, channel_id)
    }

    /// Fetch and decode the converted feed of a channel. Never retries.
    pub async fn fetch_feed(&self, channel_id: &str) -> Result<FeedResponse, FetchError> {
        let feed_url = self.channel_feed_url(channel_id);
        tracing::debug!(%feed_url, endpoint = %self.config.endpoint, "requesting converted feed");

        let response = self
            .http
            .get(&self.config.endpoint)
            .query(&[("rss_url", feed_url.as_str())])
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Link of the newest item in the channel's feed
    pub async fn latest_video_link(&self, channel_id: &str) -> Result<String, FetchError> {
        let feed = self.fetch_feed(channel_id).await?;
        feed.latest_link()
            .map(ToString::to_string)
            .ok_or(FetchError::EmptyFeed)
    }
}
