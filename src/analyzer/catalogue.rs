use crate::results::{TagCategory, TagStatus};

/// Character-length band a value must fall within to count as present
#[derive(Debug, Clone, Copy)]
pub struct LengthBounds {
    pub min: usize,
    pub max: usize,
    /// Optimal range quoted back to the user, e.g. "50-60"
    pub target: &'static str,
}

impl LengthBounds {
    pub fn contains(&self, len: usize) -> bool {
        (self.min..=self.max).contains(&len)
    }

    pub fn is_too_short(&self, len: usize) -> bool {
        len < self.min
    }
}

pub const TITLE_BOUNDS: LengthBounds = LengthBounds {
    min: 30,
    max: 60,
    target: "50-60",
};

pub const DESCRIPTION_BOUNDS: LengthBounds = LengthBounds {
    min: 120,
    max: 160,
    target: "150-160",
};

/// How a catalogue entry is judged
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Present only if within the bounds; `missing` is the note for an absent value
    Length {
        bounds: LengthBounds,
        missing: &'static str,
    },
    /// Present if non-empty, with a note for each case
    Presence {
        present: &'static str,
        missing: &'static str,
    },
}

/// One checked tag
#[derive(Debug, Clone, Copy)]
pub struct TagSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub category: TagCategory,
    pub rule: Rule,
}

const fn describe(key: &'static str, category: TagCategory, note: &'static str) -> TagSpec {
    TagSpec {
        key,
        label: key,
        category,
        rule: Rule::Presence {
            present: note,
            missing: note,
        },
    }
}

/// Every tag the analyzer reports on, in report order
pub static CATALOGUE: [TagSpec; 14] = [
    TagSpec {
        key: "title",
        label: "Title Tag",
        category: TagCategory::Essential,
        rule: Rule::Length {
            bounds: TITLE_BOUNDS,
            missing: "Missing title tag. Add a descriptive title.",
        },
    },
    TagSpec {
        key: "description",
        label: "Meta Description",
        category: TagCategory::Essential,
        rule: Rule::Length {
            bounds: DESCRIPTION_BOUNDS,
            missing: "Missing meta description. Add a concise summary of your page.",
        },
    },
    TagSpec {
        key: "canonical",
        label: "Canonical URL",
        category: TagCategory::Essential,
        rule: Rule::Presence {
            present: "Canonical URL is properly set.",
            missing: "Missing canonical tag. Add a canonical URL to prevent duplicate content issues.",
        },
    },
    describe("og:title", TagCategory::Opengraph, "Title for social media sharing"),
    describe(
        "og:description",
        TagCategory::Opengraph,
        "Description for social media sharing",
    ),
    describe("og:image", TagCategory::Opengraph, "Image for social media sharing"),
    describe("og:image:width", TagCategory::Opengraph, "Width of the OG image"),
    describe("og:image:height", TagCategory::Opengraph, "Height of the OG image"),
    describe(
        "og:type",
        TagCategory::Opengraph,
        "Type of content (e.g., website, article)",
    ),
    describe("twitter:card", TagCategory::Twitter, "Defines the type of Twitter card"),
    describe("twitter:title", TagCategory::Twitter, "Title for Twitter sharing"),
    describe(
        "twitter:description",
        TagCategory::Twitter,
        "Description for Twitter sharing",
    ),
    describe("twitter:image", TagCategory::Twitter, "Image for Twitter sharing"),
    TagSpec {
        key: "viewport",
        label: "Viewport",
        category: TagCategory::Technical,
        rule: Rule::Presence {
            present: "Viewport is properly set for responsive design.",
            missing: "Missing viewport meta tag. Add it for better mobile rendering.",
        },
    },
];

/// Length in characters, the unit all bounds are expressed in
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Judges one value against its rule, returning the status and a note for the user
pub fn evaluate(entry: &TagSpec, value: Option<&str>) -> (TagStatus, String) {
    match (entry.rule, value) {
        (Rule::Length { missing, .. }, None) => (TagStatus::Missing, missing.to_string()),
        (Rule::Length { bounds, .. }, Some(v)) => {
            let len = char_len(v);
            if bounds.contains(len) {
                (
                    TagStatus::Present,
                    format!(
                        "Good length ({} characters). Aim for {} characters.",
                        len, bounds.target
                    ),
                )
            } else {
                let verdict = if bounds.is_too_short(len) {
                    "Too short"
                } else {
                    "Too long"
                };
                (
                    TagStatus::NeedsImprovement,
                    format!(
                        "{} ({} characters). Aim for {} characters.",
                        verdict, len, bounds.target
                    ),
                )
            }
        }
        (Rule::Presence { present, .. }, Some(_)) => (TagStatus::Present, present.to_string()),
        (Rule::Presence { missing, .. }, None) => (TagStatus::Missing, missing.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str) -> &'static TagSpec {
        CATALOGUE.iter().find(|s| s.key == key).unwrap()
    }

    #[test]
    fn test_catalogue_category_counts() {
        let essential = CATALOGUE
            .iter()
            .filter(|s| s.category == TagCategory::Essential)
            .count();
        let social = CATALOGUE.iter().filter(|s| s.category.is_social()).count();
        let technical = CATALOGUE
            .iter()
            .filter(|s| s.category == TagCategory::Technical)
            .count();
        assert_eq!((essential, social, technical), (3, 10, 1));
    }

    #[test]
    fn test_title_length_boundaries() {
        let title = entry("title");
        for (len, expected) in [
            (29, TagStatus::NeedsImprovement),
            (30, TagStatus::Present),
            (60, TagStatus::Present),
            (61, TagStatus::NeedsImprovement),
        ] {
            let value = "a".repeat(len);
            let (status, _) = evaluate(title, Some(&value));
            assert_eq!(status, expected, "title of length {}", len);
        }
    }

    #[test]
    fn test_description_length_boundaries() {
        let description = entry("description");
        for (len, expected) in [
            (119, TagStatus::NeedsImprovement),
            (120, TagStatus::Present),
            (160, TagStatus::Present),
            (161, TagStatus::NeedsImprovement),
        ] {
            let value = "d".repeat(len);
            let (status, _) = evaluate(description, Some(&value));
            assert_eq!(status, expected, "description of length {}", len);
        }
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 30 two-byte characters
        let value = "é".repeat(30);
        let (status, note) = evaluate(entry("title"), Some(&value));
        assert_eq!(status, TagStatus::Present);
        assert!(note.contains("30 characters"));
    }

    #[test]
    fn test_notes_state_measured_length_and_target() {
        let (_, note) = evaluate(entry("title"), Some("Short"));
        assert_eq!(note, "Too short (5 characters). Aim for 50-60 characters.");

        let long = "x".repeat(200);
        let (_, note) = evaluate(entry("description"), Some(&long));
        assert_eq!(
            note,
            "Too long (200 characters). Aim for 150-160 characters."
        );

        let (status, _) = evaluate(entry("canonical"), None);
        assert_eq!(status, TagStatus::Missing);
    }
}
