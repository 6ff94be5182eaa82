use super::PageTags;
use crate::results::{FacebookPreview, GooglePreview, SocialPreviews, TwitterPreview};
use url::Url;

const NO_TITLE: &str = "No title";
const NO_DESCRIPTION: &str = "No description available";

/// Host plus path of `url`, or the raw string if it does not parse
pub fn display_url(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => format!("{}{}", parsed.host_str().unwrap_or_default(), parsed.path()),
        Err(_) => url.to_string(),
    }
}

pub fn google(page: &PageTags<'_>, resolved_url: &str) -> GooglePreview {
    GooglePreview {
        title: page.title.unwrap_or(NO_TITLE).to_string(),
        url: display_url(resolved_url),
        description: page.description.unwrap_or(NO_DESCRIPTION).to_string(),
    }
}

pub fn social(page: &PageTags<'_>) -> SocialPreviews {
    let facebook = FacebookPreview {
        title: page.og_title.or(page.title).unwrap_or(NO_TITLE).to_string(),
        description: page
            .og_description
            .or(page.description)
            .unwrap_or_default()
            .to_string(),
        image: page.og_image.unwrap_or_default().to_string(),
    };

    let twitter = TwitterPreview {
        title: page
            .twitter_title
            .or(page.og_title)
            .or(page.title)
            .unwrap_or(NO_TITLE)
            .to_string(),
        description: page
            .twitter_description
            .or(page.og_description)
            .or(page.description)
            .unwrap_or_default()
            .to_string(),
        image: page
            .twitter_image
            .or(page.og_image)
            .unwrap_or_default()
            .to_string(),
        card_type: page.twitter_card.unwrap_or_default().to_string(),
    };

    SocialPreviews { facebook, twitter }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::TagMap;

    #[test]
    fn test_display_url() {
        assert_eq!(display_url("https://example.com/a/b?q=1"), "example.com/a/b");
        assert_eq!(display_url("https://example.com"), "example.com/");
        assert_eq!(display_url("http://localhost:8080/x"), "localhost/x");
        assert_eq!(display_url("not a url"), "not a url");
    }

    #[test]
    fn test_google_preview_defaults() {
        let tags = TagMap::new();
        let preview = google(&PageTags::from_map(&tags), "https://example.com/");
        assert_eq!(preview.title, "No title");
        assert_eq!(preview.url, "example.com/");
        assert_eq!(preview.description, "No description available");
    }

    #[test]
    fn test_social_fallbacks() {
        let tags: TagMap = [
            ("title", "Page"),
            ("description", "Page description"),
            ("og:title", "OG"),
            ("og:image", "https://example.com/og.png"),
            ("twitter:description", "Tweet description"),
        ]
        .into_iter()
        .collect();
        let previews = social(&PageTags::from_map(&tags));

        assert_eq!(previews.facebook.title, "OG");
        assert_eq!(previews.facebook.description, "Page description");
        assert_eq!(previews.facebook.image, "https://example.com/og.png");

        assert_eq!(previews.twitter.title, "OG");
        assert_eq!(previews.twitter.description, "Tweet description");
        assert_eq!(previews.twitter.image, "https://example.com/og.png");
        assert_eq!(previews.twitter.card_type, "");
    }

    #[test]
    fn test_social_defaults_on_empty_page() {
        let tags = TagMap::new();
        let previews = social(&PageTags::from_map(&tags));
        assert_eq!(previews.facebook.title, "No title");
        assert_eq!(previews.facebook.description, "");
        assert_eq!(previews.twitter.title, "No title");
        assert_eq!(previews.twitter.image, "");
    }
}
