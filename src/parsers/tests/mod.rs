use crate::parsers::{TagMap, html};
use url::Url;

fn page_url() -> Url {
    Url::parse("https://example.com/blog/post").unwrap()
}

#[test]
fn test_extracts_meta_by_name_property_and_http_equiv() {
    let doc = r#"<html><head>
        <meta name="description" content="A page about things">
        <meta property="og:title" content="OG Title">
        <meta http-equiv="refresh" content="30">
        <meta name="viewport" content="width=device-width, initial-scale=1.0">
    </head><body></body></html>"#;

    let tags = html::parse(doc, &page_url());
    assert_eq!(tags.get("description"), Some("A page about things"));
    assert_eq!(tags.get("og:title"), Some("OG Title"));
    assert_eq!(tags.get("refresh"), Some("30"));
    assert_eq!(
        tags.get("viewport"),
        Some("width=device-width, initial-scale=1.0")
    );
}

#[test]
fn test_name_takes_precedence_over_property() {
    let doc = r#"<html><head>
        <meta name="twitter:title" property="og:title" content="Shared">
    </head></html>"#;

    let tags = html::parse(doc, &page_url());
    assert_eq!(tags.get("twitter:title"), Some("Shared"));
    assert_eq!(tags.get("og:title"), None);
}

#[test]
fn test_later_duplicates_overwrite_earlier() {
    let doc = r#"<html><head>
        <meta name="description" content="first">
        <meta name="description" content="second">
        <meta name="description" content="">
    </head></html>"#;

    let tags = html::parse(doc, &page_url());
    // Empty content is skipped, so "second" survives
    assert_eq!(tags.get("description"), Some("second"));
}

#[test]
fn test_meta_without_key_or_content_is_ignored() {
    let doc = r#"<html><head>
        <meta charset="utf-8">
        <meta name="robots">
    </head></html>"#;

    let tags = html::parse(doc, &page_url());
    assert_eq!(tags.get("robots"), None);
    // title, canonical and favicon are always written
    assert_eq!(tags.len(), 3);
}

#[test]
fn test_title_canonical_and_favicon() {
    let doc = r#"<html><head>
        <title>Hello World</title>
        <link rel="canonical" href="https://example.com/blog/post">
        <link rel="icon" href="/static/favicon.png">
    </head></html>"#;

    let tags = html::parse(doc, &page_url());
    assert_eq!(tags.get("title"), Some("Hello World"));
    assert_eq!(tags.get("canonical"), Some("https://example.com/blog/post"));
    assert_eq!(
        tags.get("favicon"),
        Some("https://example.com/static/favicon.png")
    );
}

#[test]
fn test_shortcut_icon_is_resolved_relative_to_page() {
    let doc = r#"<html><head>
        <link rel="shortcut icon" href="icon.ico">
    </head></html>"#;

    let tags = html::parse(doc, &page_url());
    assert_eq!(tags.get("favicon"), Some("https://example.com/blog/icon.ico"));
}

#[test]
fn test_missing_head_elements_are_empty() {
    let tags = html::parse("<html><body><p>No head</p></body></html>", &page_url());
    assert_eq!(tags.get("title"), None);
    assert_eq!(tags.get_or_empty("canonical"), "");
    assert_eq!(tags.get_or_empty("favicon"), "");
}

#[test]
fn test_tag_map_from_iter() {
    let tags: TagMap = [("title", "A"), ("description", "")].into_iter().collect();
    assert_eq!(tags.get("title"), Some("A"));
    assert_eq!(tags.get("description"), None);
    assert_eq!(tags.len(), 2);
    assert!(!tags.is_empty());
    assert!(TagMap::new().is_empty());
}

#[test]
fn test_blank_favicon_href_stays_empty() {
    for href in ["", "   "] {
        let doc = format!(r#"<html><head><link rel="icon" href="{}"></head></html>"#, href);
        let tags = html::parse(&doc, &page_url());
        assert_eq!(tags.get_or_empty("favicon"), "");
    }
}

#[test]
fn test_blank_canonical_href_stays_empty() {
    let doc = r#"<html><head><link rel="canonical" href=" "></head></html>"#;
    let tags = html::parse(doc, &page_url());
    assert_eq!(tags.get("canonical"), None);
}
