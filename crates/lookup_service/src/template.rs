//! Page template, rendered with minijinja.
//!
//! The lookup result is exposed as `result` (`result.latest_video_link`,
//! `result.video_id`) and is undefined on the blank form, so pages branch on
//! `{% if result %}`. Output is always HTML-escaped.

use domain::ViewData;
use minijinja::{AutoEscape, Environment, UndefinedBehavior, context};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("failed to read template {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Syntax errors and failures while rendering
    #[error("failed to render template: {0}")]
    Render(#[from] minijinja::Error),
}

/// Template source as read from disk
#[derive(Debug, Clone)]
pub struct Template {
    source: String,
}

impl Template {
    /// Read a template file. Not cached.
    pub async fn load(path: &Path) -> Result<Self, TemplateError> {
        let source = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| TemplateError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::from_source(source))
    }

    pub fn from_source(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Render with the lookup result, or `None` for the blank form
    pub fn render(&self, data: Option<&ViewData>) -> Result<String, TemplateError> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        // `result.*` stays empty instead of failing when there is no result
        env.set_undefined_behavior(UndefinedBehavior::Chainable);
        let ctx = match data {
            Some(data) => context! { result => data },
            None => context! {},
        };
        Ok(env.render_str(&self.source, ctx)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "<h1>Latest</h1>\
        {% if result %}<p>{{ result.video_id }}</p>{% else %}<form method=\"post\"></form>{% endif %}";

    fn view_data(link: &str, id: &str) -> ViewData {
        ViewData {
            latest_video_link: link.to_string(),
            video_id: id.to_string(),
        }
    }

    #[test]
    fn blank_form_without_model() {
        let html = Template::from_source(PAGE).render(None).unwrap();
        assert_eq!(html, "<h1>Latest</h1><form method=\"post\"></form>");
    }

    #[test]
    fn result_block_with_model() {
        let html = Template::from_source(PAGE)
            .render(Some(&view_data("https://www.youtube.com/watch?v=abc", "abc")))
            .unwrap();
        assert_eq!(html, "<h1>Latest</h1><p>abc</p>");
    }

    #[test]
    fn values_are_escaped() {
        let html = Template::from_source("{{ result.video_id }}|{{ result.latest_video_link }}")
            .render(Some(&view_data("a&b", "<script>\"")))
            .unwrap();
        assert!(html.starts_with("&lt;script&gt;&quot;|"), "{html}");
        assert!(html.ends_with("a&amp;b"), "{html}");
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn result_fields_render_empty_without_model() {
        let html = Template::from_source("id=[{{ result.video_id }}]")
            .render(None)
            .unwrap();
        assert_eq!(html, "id=[]");
    }

    #[test]
    fn syntax_errors_are_reported() {
        for source in ["{% if result %}unclosed", "{{ result.video_id", "{% endif %}"] {
            let err = Template::from_source(source).render(None).unwrap_err();
            assert!(matches!(err, TemplateError::Render(_)), "{source}");
        }
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Template::load(&dir.path().join("missing.html"))
            .await
            .unwrap_err();
        assert!(matches!(err, TemplateError::Io { .. }));
    }
}
