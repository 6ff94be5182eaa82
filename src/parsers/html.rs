use crate::parsers::{CANONICAL_KEY, FAVICON_KEY, TITLE_KEY, TagMap};
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use url::Url;

static META_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("meta").expect("meta selector is valid"));
static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("title selector is valid"));
static CANONICAL_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"link[rel="canonical"]"#).expect("canonical selector is valid")
});
static FAVICON_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"link[rel="icon"], link[rel="shortcut icon"]"#)
        .expect("favicon selector is valid")
});

/// Meta attributes that may carry the tag key, in lookup order
const KEY_ATTRIBUTES: [&str; 3] = ["name", "property", "http-equiv"];

/// Parses an HTML document into a tag map
///
/// Every `<meta>` with a key attribute and non-empty `content` is recorded
/// (later duplicates win). The document title, canonical href and favicon
/// (resolved against `page_url`) are always set, possibly to an empty string.
pub fn parse(html: &str, page_url: &Url) -> TagMap {
    let doc = Html::parse_document(html);
    let mut tags = TagMap::new();

    for element in doc.select(&META_SELECTOR) {
        if let Some((key, content)) = meta_entry(element) {
            tags.insert(key, content);
        }
    }

    let title = doc
        .select(&TITLE_SELECTOR)
        .next()
        .map(|e| e.text().collect::<String>())
        .unwrap_or_default();
    tags.insert(TITLE_KEY, title);

    let canonical = first_href(&doc, &CANONICAL_SELECTOR).unwrap_or_default();
    tags.insert(CANONICAL_KEY, canonical);

    let favicon = first_href(&doc, &FAVICON_SELECTOR)
        .map(|href| resolve_href(page_url, &href))
        .unwrap_or_default();
    tags.insert(FAVICON_KEY, favicon);

    ::log::debug!("HTML parser extracted {} tag entries", tags.len());
    tags
}

/// Returns `(key, content)` for a meta element that has both
fn meta_entry(element: ElementRef<'_>) -> Option<(String, String)> {
    let attrs = element.value();
    let key = KEY_ATTRIBUTES
        .iter()
        .filter_map(|attr| attrs.attr(attr))
        .find(|v| !v.is_empty())?;
    let content = attrs.attr("content").filter(|c| !c.is_empty())?;
    Some((key.to_string(), content.to_string()))
}

fn first_href(doc: &Html, selector: &Selector) -> Option<String> {
    doc.select(selector)
        .next()
        .and_then(|e| e.value().attr("href"))
        .map(str::trim)
        .filter(|href| !href.is_empty())
        .map(str::to_string)
}

/// Resolves an href against the page URL, keeping the raw value if that fails
fn resolve_href(page_url: &Url, href: &str) -> String {
    match page_url.join(href) {
        Ok(resolved) => resolved.to_string(),
        Err(e) => {
            ::log::warn!("Could not resolve '{}' against {}: {}", href, page_url, e);
            href.to_string()
        }
    }
}
