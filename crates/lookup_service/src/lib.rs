pub mod error;
pub mod extract;
pub mod template;

use axum::{
    Form, Router,
    extract::{State, rejection::FormRejection},
    response::Html,
    routing::get,
};
use domain::ViewData;
use feed_client::FeedClient;
use std::path::PathBuf;
use std::sync::Arc;

pub use error::LookupError;
pub use template::{Template, TemplateError};

/// Form field carrying the channel id
pub const CHANNEL_ID_FIELD: &str = "channelID";

/// Read-only dependencies shared by every request
#[derive(Debug, Clone)]
pub struct LookupState {
    /// Client for the feed-conversion API, timeout already applied
    pub feeds: FeedClient,
    /// Page template, re-read on every request
    pub template_path: PathBuf,
}

/// Blank form, no network access
async fn index(State(state): State<Arc<LookupState>>) -> Result<Html<String>, LookupError> {
    let template = Template::load(&state.template_path).await?;
    Ok(Html(template.render(None)?))
}

async fn lookup(
    State(state): State<Arc<LookupState>>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Result<Html<String>, LookupError> {
    let channel_id = match form {
        Ok(Form(fields)) => first_channel_id(fields),
        Err(rejection) => {
            // An unreadable body counts as an empty channel id
            tracing::debug!(%rejection, "ignoring unreadable form body");
            String::new()
        }
    };
    let view_data = find_latest_video(&state.feeds, &channel_id).await?;
    let template = Template::load(&state.template_path).await?;
    Ok(Html(template.render(Some(&view_data))?))
}

/// First `channelID` value; repeated fields after it are ignored
fn first_channel_id(fields: Vec<(String, String)>) -> String {
    fields
        .into_iter()
        .find(|(name, _)| name == CHANNEL_ID_FIELD)
        .map(|(_, value)| value)
        .unwrap_or_default()
}

/// Fetch the channel feed and pull the video id out of its newest link
#[tracing::instrument(skip(feeds))]
pub async fn find_latest_video(feeds: &FeedClient, channel_id: &str) -> Result<ViewData, LookupError> {
    let latest_video_link = feeds.latest_video_link(channel_id).await?;
    tracing::info!(%latest_video_link, "fetched latest video link");

    // The link ends up in an href, only web links are rendered
    if !extract::is_web_link(&latest_video_link) {
        return Err(LookupError::Extraction {
            link: latest_video_link,
        });
    }
    let video_id = extract::video_id(&latest_video_link)
        .ok_or_else(|| LookupError::Extraction {
            link: latest_video_link.clone(),
        })?
        .to_string();
    tracing::info!(%video_id, "extracted video id");

    Ok(ViewData {
        latest_video_link,
        video_id,
    })
}

/// Create the router serving the lookup page
pub fn create_router(state: LookupState) -> Router {
    Router::new()
        .route("/", get(index).post(lookup))
        .with_state(Arc::new(state))
}
