use regex::Regex;
use std::sync::LazyLock;
use url::Url;

// `v` parameter introduced by `?` or `&`, value runs to the next `&` or end of link
static VIDEO_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&]v=([^&]+)").expect("video id regex must compile"));

/// Extract the video id from a watch link
pub fn video_id(link: &str) -> Option<&str> {
    VIDEO_ID_RE
        .captures(link)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Absolute `http` or `https` URL
pub fn is_web_link(link: &str) -> bool {
    Url::parse(link)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn web_links() {
        assert!(is_web_link("https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
        assert!(is_web_link("http://youtube.com/watch?v=abc"));
        assert!(is_web_link("HTTPS://www.youtube.com/watch?v=abc"));
    }

    #[test]
    fn non_web_links() {
        assert!(!is_web_link("javascript:alert(document.cookie)//?v=abc"));
        assert!(!is_web_link("data:text/html,<script>?v=abc"));
        assert!(!is_web_link("/watch?v=abc"));
        assert!(!is_web_link(""));
    }

    #[test]
    fn leading_v_parameter() {
        assert_eq!(
            video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&list=PL123"),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(
            video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn trailing_v_parameter() {
        assert_eq!(
            video_id("https://www.youtube.com/watch?list=PL123&v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn first_match_wins() {
        assert_eq!(video_id("https://x/watch?v=one&v=two"), Some("one"));
        assert_eq!(video_id("https://x/watch?v=&v=two"), Some("two"));
    }

    #[test]
    fn links_without_v_parameter() {
        assert_eq!(video_id("https://youtu.be/abc123"), None);
        assert_eq!(video_id("https://www.youtube.com/shorts/abc123"), None);
        assert_eq!(video_id("https://x/watch?dev=abc"), None);
        assert_eq!(video_id("https://x/watch?v="), None);
        assert_eq!(video_id(""), None);
    }
}
