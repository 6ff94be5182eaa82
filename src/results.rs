use serde::{Deserialize, Serialize};

/// Which group a checked tag belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagCategory {
    Essential,
    Opengraph,
    Twitter,
    Technical,
}

impl TagCategory {
    /// Open Graph and Twitter tags are scored together as "social"
    pub fn is_social(&self) -> bool {
        matches!(self, TagCategory::Opengraph | TagCategory::Twitter)
    }
}

/// Outcome of checking a single tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagStatus {
    Present,
    Missing,
    NeedsImprovement,
}

impl TagStatus {
    /// Marker used by the text renderer
    pub fn icon(&self) -> &'static str {
        match self {
            TagStatus::Present => "✓",
            TagStatus::Missing => "✗",
            TagStatus::NeedsImprovement => "⚠",
        }
    }
}

/// Status of one catalogue tag on the analyzed page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagRecord {
    /// Tag key, e.g. `title` or `og:image`
    pub name: String,

    /// Human-readable label
    pub label: String,

    /// Value found on the page (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    pub category: TagCategory,

    pub status: TagStatus,

    /// Short advice about this tag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

/// An actionable fix for the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub title: String,

    pub description: String,

    /// HTML snippet that fixes the issue
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
}

/// How the page would appear in a search results listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GooglePreview {
    pub title: String,
    pub url: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacebookPreview {
    pub title: String,
    pub description: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwitterPreview {
    pub title: String,
    pub description: String,
    pub image: String,
    pub card_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialPreviews {
    pub facebook: FacebookPreview,
    pub twitter: TwitterPreview,
}

/// Recommendations split by severity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    pub critical: Vec<Recommendation>,
    pub improvements: Vec<Recommendation>,
}

impl Recommendations {
    pub fn is_empty(&self) -> bool {
        self.critical.is_empty() && self.improvements.is_empty()
    }
}

/// Present/total counter for one scoring group
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub present: usize,
    pub total: usize,
}

impl CategoryCount {
    /// Percentage of tags present, 0 for an empty group
    pub fn completeness(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.present as f64 / self.total as f64 * 100.0
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSummary {
    pub essential: CategoryCount,
    pub social: CategoryCount,
    pub technical: CategoryCount,
}

/// Complete SEO report for a single page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Resolved URL of the page
    pub url: String,

    /// Page title (empty if missing)
    pub title: String,

    /// Meta description (empty if missing)
    pub description: String,

    /// Absolute favicon URL (empty if missing)
    pub favicon: String,

    /// One record per catalogue tag, in catalogue order
    pub tags: Vec<TagRecord>,

    /// Weighted completeness score, 0-100
    pub score: u8,

    pub google_preview: GooglePreview,

    pub social_previews: SocialPreviews,

    pub recommendations: Recommendations,

    pub status_summary: StatusSummary,
}

impl AnalysisReport {
    /// Look up a tag record by key
    pub fn tag(&self, name: &str) -> Option<&TagRecord> {
        self.tags.iter().find(|t| t.name == name)
    }
}
