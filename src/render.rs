use crate::results::{AnalysisReport, CategoryCount, Recommendation};
use std::fmt::Write;

const MAX_VALUE_LEN: usize = 80;

/// Shortens `value` to `max` characters, appending "..." when cut
pub fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() > max {
        let cut: String = value.chars().take(max).collect();
        format!("{}...", cut)
    } else {
        value.to_string()
    }
}

/// Verdict shown next to the score
pub fn score_label(score: u8) -> &'static str {
    match score {
        80.. => "Good",
        50..=79 => "Needs work",
        _ => "Poor",
    }
}

fn write_count(out: &mut String, name: &str, count: CategoryCount) {
    let _ = writeln!(out, "  {:<10} {}/{}", name, count.present, count.total);
}

fn write_recommendations(out: &mut String, heading: &str, recs: &[Recommendation]) {
    if recs.is_empty() {
        return;
    }
    let _ = writeln!(out, "\n{} ({})", heading, recs.len());
    for rec in recs {
        let _ = writeln!(out, "  - {}: {}", rec.title, rec.description);
        if let Some(solution) = &rec.solution {
            for line in solution.lines() {
                let _ = writeln!(out, "      {}", line);
            }
        }
    }
}

fn or_note<'a>(value: &'a str, note: &'a str) -> &'a str {
    if value.is_empty() { note } else { value }
}

fn write_social(out: &mut String, title: &str, description: &str, image: &str) {
    let description = or_note(description, "No description available");
    let _ = writeln!(out, "  {}", truncate(title, 60));
    let _ = writeln!(out, "  {}", truncate(description, 160));
    let _ = writeln!(
        out,
        "  image: {}",
        truncate(or_note(image, "(none)"), MAX_VALUE_LEN)
    );
}

/// Plain-text rendering of a report for terminal output
pub fn render_text(report: &AnalysisReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "SEO report for {}", report.url);
    let _ = writeln!(
        out,
        "Score: {}/100 ({})",
        report.score,
        score_label(report.score)
    );

    out.push_str("\nSummary\n");
    write_count(&mut out, "Essential", report.status_summary.essential);
    write_count(&mut out, "Social", report.status_summary.social);
    write_count(&mut out, "Technical", report.status_summary.technical);

    out.push_str("\nTags\n");
    for tag in &report.tags {
        let value = tag
            .value
            .as_deref()
            .map(|v| truncate(v, MAX_VALUE_LEN))
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(out, "  {} {:<20} {}", tag.status.icon(), tag.label, value);
    }

    write_recommendations(&mut out, "Critical issues", &report.recommendations.critical);
    write_recommendations(&mut out, "Improvements", &report.recommendations.improvements);

    let google = &report.google_preview;
    let _ = writeln!(out, "\nGoogle preview");
    let _ = writeln!(out, "  {}", truncate(&google.title, 60));
    let _ = writeln!(out, "  {}", google.url);
    let _ = writeln!(out, "  {}", truncate(&google.description, 160));

    let facebook = &report.social_previews.facebook;
    let _ = writeln!(out, "\nFacebook preview");
    write_social(&mut out, &facebook.title, &facebook.description, &facebook.image);

    let twitter = &report.social_previews.twitter;
    let _ = writeln!(
        out,
        "\nTwitter preview (card: {})",
        or_note(&twitter.card_type, "missing")
    );
    write_social(&mut out, &twitter.title, &twitter.description, &twitter.image);

    out
}
