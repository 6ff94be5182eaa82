//! Tag scoring engine.
//!
//! [`analyze`] turns a [`TagMap`] into an [`AnalysisReport`]. It performs no I/O
//! and cannot fail: absent tags become `missing` records and every preview field
//! has a fallback.

pub mod catalogue;
pub mod preview;
pub mod recommendations;
pub mod score;

use crate::parsers::{FAVICON_KEY, TagMap};
use crate::results::{AnalysisReport, TagRecord};
use catalogue::CATALOGUE;

/// Non-empty values of the tags the rules refer to by name
#[derive(Debug, Clone, Copy, Default)]
pub struct PageTags<'a> {
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
    pub canonical: Option<&'a str>,
    pub og_title: Option<&'a str>,
    pub og_description: Option<&'a str>,
    pub og_image: Option<&'a str>,
    pub og_image_width: Option<&'a str>,
    pub og_image_height: Option<&'a str>,
    pub twitter_card: Option<&'a str>,
    pub twitter_title: Option<&'a str>,
    pub twitter_description: Option<&'a str>,
    pub twitter_image: Option<&'a str>,
    pub viewport: Option<&'a str>,
}

impl<'a> PageTags<'a> {
    pub fn from_map(tags: &'a TagMap) -> Self {
        Self {
            title: tags.get("title"),
            description: tags.get("description"),
            canonical: tags.get("canonical"),
            og_title: tags.get("og:title"),
            og_description: tags.get("og:description"),
            og_image: tags.get("og:image"),
            og_image_width: tags.get("og:image:width"),
            og_image_height: tags.get("og:image:height"),
            twitter_card: tags.get("twitter:card"),
            twitter_title: tags.get("twitter:title"),
            twitter_description: tags.get("twitter:description"),
            twitter_image: tags.get("twitter:image"),
            viewport: tags.get("viewport"),
        }
    }
}

/// Builds one record per catalogue entry, in catalogue order
pub fn tag_records(tags: &TagMap) -> Vec<TagRecord> {
    CATALOGUE
        .iter()
        .map(|entry| {
            let value = tags.get(entry.key);
            let (status, note) = catalogue::evaluate(entry, value);
            TagRecord {
                name: entry.key.to_string(),
                label: entry.label.to_string(),
                value: value.map(str::to_string),
                category: entry.category,
                status,
                recommendation: Some(note),
            }
        })
        .collect()
}

/// Scores the page described by `tags`, fetched from `resolved_url`
pub fn analyze(tags: &TagMap, resolved_url: &str) -> AnalysisReport {
    let page = PageTags::from_map(tags);

    let records = tag_records(tags);
    let status_summary = score::summarize(&records);
    let score = score::score(&status_summary);
    let recommendations = recommendations::build(&page, resolved_url);

    ::log::debug!(
        "Analyzed {}: score {}, {} critical, {} improvements",
        resolved_url,
        score,
        recommendations.critical.len(),
        recommendations.improvements.len()
    );

    AnalysisReport {
        url: resolved_url.to_string(),
        title: page.title.unwrap_or_default().to_string(),
        description: page.description.unwrap_or_default().to_string(),
        favicon: tags.get_or_empty(FAVICON_KEY).to_string(),
        tags: records,
        score,
        google_preview: preview::google(&page, resolved_url),
        social_previews: preview::social(&page),
        recommendations,
        status_summary,
    }
}
