use crate::results::{CategoryCount, StatusSummary, TagCategory, TagRecord, TagStatus};

const ESSENTIAL_WEIGHT: f64 = 0.5;
const SOCIAL_WEIGHT: f64 = 0.3;
const TECHNICAL_WEIGHT: f64 = 0.2;

fn count(tags: &[TagRecord], in_group: impl Fn(TagCategory) -> bool) -> CategoryCount {
    let group = tags.iter().filter(|t| in_group(t.category));
    let (present, total) = group.fold((0, 0), |(present, total), tag| {
        let hit = usize::from(tag.status == TagStatus::Present);
        (present + hit, total + 1)
    });
    CategoryCount { present, total }
}

/// Counts present tags per scoring group
pub fn summarize(tags: &[TagRecord]) -> StatusSummary {
    StatusSummary {
        essential: count(tags, |c| c == TagCategory::Essential),
        social: count(tags, |c| c.is_social()),
        technical: count(tags, |c| c == TagCategory::Technical),
    }
}

/// Weighted completeness of the three groups, rounded to 0-100
pub fn score(summary: &StatusSummary) -> u8 {
    let weighted = summary.essential.completeness() * ESSENTIAL_WEIGHT
        + summary.social.completeness() * SOCIAL_WEIGHT
        + summary.technical.completeness() * TECHNICAL_WEIGHT;
    weighted.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(essential: usize, social: usize, technical: usize) -> StatusSummary {
        StatusSummary {
            essential: CategoryCount {
                present: essential,
                total: 3,
            },
            social: CategoryCount {
                present: social,
                total: 10,
            },
            technical: CategoryCount {
                present: technical,
                total: 1,
            },
        }
    }

    #[test]
    fn test_score_extremes() {
        assert_eq!(score(&summary(0, 0, 0)), 0);
        assert_eq!(score(&summary(3, 10, 1)), 100);
    }

    #[test]
    fn test_score_weights() {
        // Essential only: 50
        assert_eq!(score(&summary(3, 0, 0)), 50);
        // Social only: 30
        assert_eq!(score(&summary(0, 10, 0)), 30);
        // Technical only: 20
        assert_eq!(score(&summary(0, 0, 1)), 20);
        // 2/3 essential = 33.33, 5/10 social = 15, no technical
        assert_eq!(score(&summary(2, 5, 0)), 48);
    }

    #[test]
    fn test_empty_group_counts_as_zero() {
        let empty = StatusSummary::default();
        assert_eq!(score(&empty), 0);
    }

    #[test]
    fn test_score_is_monotonic() {
        for essential in 0..=3 {
            for social in 0..=10 {
                for technical in 0..=1 {
                    let current = score(&summary(essential, social, technical));
                    if essential > 0 {
                        assert!(current >= score(&summary(essential - 1, social, technical)));
                    }
                    if social > 0 {
                        assert!(current >= score(&summary(essential, social - 1, technical)));
                    }
                    if technical > 0 {
                        assert!(current >= score(&summary(essential, social, 0)));
                    }
                }
            }
        }
    }
}
