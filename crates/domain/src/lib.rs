use serde::{Deserialize, Serialize};

/// One entry of a converted feed
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FeedItem {
    /// Link to the video page
    #[serde(default)]
    pub link: String,
}

/// JSON envelope returned by the feed-conversion API
/// Items are in feed order, newest first
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FeedResponse {
    #[serde(default)]
    pub items: Vec<FeedItem>,
}

impl FeedResponse {
    /// Link of the first item, if the feed has any
    pub fn latest_link(&self) -> Option<&str> {
        self.items.first().map(|item| item.link.as_str())
    }
}

/// Values exposed to the page template after a successful lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewData {
    /// Link of the newest feed item
    pub latest_video_link: String,
    /// Value of the link's `v` query parameter
    pub video_id: String,
}
