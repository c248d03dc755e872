//! Plain-text rendering of a search outcome.

use gemfinder_core::{PlaceRecord, SearchParams};
use gemfinder_places::SearchOutcome;

/// Reviews shown per place in text output.
const REVIEWS_SHOWN: usize = 3;

pub(crate) fn render_outcome(params: &SearchParams, outcome: &SearchOutcome) -> String {
    let mut lines = vec![format!(
        "Results for \"{}\" (rating >= {}, reviews <= {}): {}",
        params.query(),
        params.min_rating(),
        params.max_reviews(),
        outcome.records.len()
    )];

    if outcome.records.is_empty() {
        lines.push("No places found matching your criteria.".to_string());
    }

    for (idx, record) in outcome.records.iter().enumerate() {
        lines.push(String::new());
        lines.extend(render_place(idx + 1, record));
    }

    if let Some(reason) = &outcome.truncated_by {
        lines.push(String::new());
        lines.push(format!(
            "note: results may be incomplete, stopped after {} page(s): {reason}",
            outcome.pages_fetched
        ));
    }
    if !outcome.persist_failures.is_empty() {
        lines.push(format!(
            "note: {} of {} result(s) could not be saved",
            outcome.persist_failures.len(),
            outcome.records.len()
        ));
        for failure in &outcome.persist_failures {
            lines.push(format!("  - {failure}"));
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn render_place(position: usize, record: &PlaceRecord) -> Vec<String> {
    let rating = record
        .rating
        .map_or_else(|| "n/a".to_string(), |r| format!("{r:.1}"));
    let reviews = record
        .review_count
        .map_or_else(|| "n/a".to_string(), |c| c.to_string());

    let mut lines = vec![
        format!("{position}. {}", record.name),
        format!(
            "   rating {rating} | {reviews} reviews | {} | price {}",
            record.category_label(),
            record.price_level
        ),
        format!("   {}", record.address),
    ];
    if let Some(url) = &record.maps_url {
        lines.push(format!("   maps: {url}"));
    }
    if let Some(url) = &record.website_url {
        lines.push(format!("   web:  {url}"));
    }
    if !record.photos.is_empty() {
        lines.push(format!("   photos: {}", record.photos.len()));
    }
    for review in record.reviews.iter().take(REVIEWS_SHOWN) {
        let stars = review
            .rating
            .map_or_else(String::new, |r| format!(" ({r}/5)"));
        lines.push(format!(
            "   > {}{stars}: {}",
            review.author_name,
            one_line(&review.text)
        ));
    }
    lines
}

fn one_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
