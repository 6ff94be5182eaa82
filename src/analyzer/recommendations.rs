use super::PageTags;
use super::catalogue::{DESCRIPTION_BOUNDS, LengthBounds, TITLE_BOUNDS, char_len};
use crate::results::{Recommendation, Recommendations};

const PLACEHOLDER_TITLE: &str = "Your Title";
const PLACEHOLDER_DESCRIPTION: &str = "Your Description";
const PLACEHOLDER_IMAGE: &str = "https://example.com/image.jpg";

fn recommendation(
    title: impl Into<String>,
    description: impl Into<String>,
    solution: impl Into<String>,
    additional_info: &str,
) -> Recommendation {
    Recommendation {
        title: title.into(),
        description: description.into(),
        solution: Some(solution.into()),
        additional_info: Some(additional_info.to_string()),
    }
}

/// Returns `(too_short, length)` when the value falls outside the bounds
fn out_of_bounds(value: &str, bounds: LengthBounds) -> Option<(bool, usize)> {
    let len = char_len(value);
    (!bounds.contains(len)).then_some((bounds.is_too_short(len), len))
}

fn short_or_long(too_short: bool) -> (&'static str, &'static str) {
    if too_short {
        ("Too Short", "too short")
    } else {
        ("Too Long", "too long")
    }
}

/// Builds the prioritized fix list, in catalogue order
pub fn build(page: &PageTags<'_>, resolved_url: &str) -> Recommendations {
    let mut recs = Recommendations::default();

    match page.title {
        None => recs.critical.push(recommendation(
            "Missing Title Tag",
            "Your page is missing a title tag, which is crucial for SEO.",
            "<title>Your Page Title | Your Brand</title>",
            "The title tag is one of the most important elements for SEO and user experience.",
        )),
        Some(title) => {
            if let Some((too_short, len)) = out_of_bounds(title, TITLE_BOUNDS) {
                let (heading, adjective) = short_or_long(too_short);
                recs.improvements.push(recommendation(
                    format!("Title {}", heading),
                    format!("Your title is {} ({} characters).", adjective, len),
                    "<title>Your Optimal Length Title (50-60 characters) | Brand</title>",
                    "The ideal title length is between 50-60 characters to display properly in search results.",
                ));
            }
        }
    }

    match page.description {
        None => recs.critical.push(recommendation(
            "Missing Meta Description",
            "Your page is missing a meta description tag.",
            r#"<meta name="description" content="Your concise page description that is 150-160 characters long and includes relevant keywords for your content." />"#,
            "Meta descriptions help improve click-through rates from search results.",
        )),
        Some(description) => {
            if let Some((too_short, len)) = out_of_bounds(description, DESCRIPTION_BOUNDS) {
                let (heading, adjective) = short_or_long(too_short);
                recs.improvements.push(recommendation(
                    format!("Description {}", heading),
                    format!(
                        "Your meta description is {} ({} characters).",
                        adjective, len
                    ),
                    r#"<meta name="description" content="Your optimal length description between 150-160 characters that accurately summarizes the page content and includes relevant keywords." />"#,
                    "The ideal description length is between 150-160 characters.",
                ));
            }
        }
    }

    if page.canonical.is_none() {
        recs.critical.push(recommendation(
            "Missing Canonical URL Tag",
            "Your page is missing a canonical URL tag.",
            format!(r#"<link rel="canonical" href="{}" />"#, resolved_url),
            "This helps prevent duplicate content issues when the same page is accessible via multiple URLs.",
        ));
    }

    if page.og_title.is_none() || page.og_description.is_none() || page.og_image.is_none() {
        let title = page.title.unwrap_or(PLACEHOLDER_TITLE);
        let description = page.description.unwrap_or(PLACEHOLDER_DESCRIPTION);
        recs.improvements.push(recommendation(
            "Missing Open Graph Tags",
            "Your page is missing essential Open Graph tags for social media sharing.",
            [
                format!(r#"<meta property="og:title" content="{}" />"#, title),
                format!(r#"<meta property="og:description" content="{}" />"#, description),
                format!(r#"<meta property="og:image" content="{}" />"#, PLACEHOLDER_IMAGE),
                format!(r#"<meta property="og:url" content="{}" />"#, resolved_url),
                r#"<meta property="og:type" content="website" />"#.to_string(),
            ]
            .join("\n"),
            "Open Graph tags improve how your content appears when shared on social media platforms like Facebook.",
        ));
    }

    if page.og_image.is_some() && (page.og_image_width.is_none() || page.og_image_height.is_none()) {
        recs.improvements.push(recommendation(
            "Add Open Graph Image Dimensions",
            "Your page has an og:image tag but is missing the image dimensions.",
            "<meta property=\"og:image:width\" content=\"1200\" />\n<meta property=\"og:image:height\" content=\"630\" />",
            "This improves rendering in Facebook and other platforms that use Open Graph.",
        ));
    }

    if page.twitter_card.is_none() || page.twitter_image.is_none() {
        let title = page
            .twitter_title
            .or(page.og_title)
            .or(page.title)
            .unwrap_or(PLACEHOLDER_TITLE);
        let description = page
            .twitter_description
            .or(page.og_description)
            .or(page.description)
            .unwrap_or(PLACEHOLDER_DESCRIPTION);
        recs.improvements.push(recommendation(
            "Add Twitter Card Tags",
            "Your page is missing essential Twitter Card tags for better sharing on Twitter.",
            [
                r#"<meta name="twitter:card" content="summary_large_image" />"#.to_string(),
                format!(r#"<meta name="twitter:title" content="{}" />"#, title),
                format!(r#"<meta name="twitter:description" content="{}" />"#, description),
                format!(r#"<meta name="twitter:image" content="{}" />"#, PLACEHOLDER_IMAGE),
            ]
            .join("\n"),
            "Twitter Card tags help control how your content appears when shared on Twitter.",
        ));
    }

    if page.viewport.is_none() {
        recs.improvements.push(recommendation(
            "Missing Viewport Meta Tag",
            "Your page is missing a viewport meta tag for responsive design.",
            r#"<meta name="viewport" content="width=device-width, initial-scale=1.0" />"#,
            "The viewport meta tag is essential for mobile-friendly pages, which is a ranking factor for search engines.",
        ));
    }

    recs
}
