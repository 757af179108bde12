use crate::template::TemplateError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use feed_client::FetchError;

/// Everything that can go wrong while serving the page.
/// Clients always see the same opaque 500; the kind is only logged.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// Upstream, parse and empty-feed failures
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// Latest link is not a web link or carries no `v` parameter
    #[error("no video id found in link '{link}'")]
    Extraction { link: String },
    /// Template missing, malformed or failing to render
    #[error(transparent)]
    Template(#[from] TemplateError),
}

impl LookupError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Fetch(FetchError::Request(_) | FetchError::HttpStatus(_)) => "upstream_fetch",
            Self::Fetch(FetchError::Parse(_)) => "parse",
            Self::Fetch(FetchError::EmptyFeed) => "empty_feed",
            Self::Extraction { .. } => "extraction",
            Self::Template(_) => "template",
        }
    }
}

impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        tracing::error!(kind = self.kind(), error = %self, "lookup failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}
