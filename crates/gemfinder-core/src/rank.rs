//! Display ordering for search results.

use std::cmp::Ordering;

use crate::place::PlaceRecord;

/// Sorts records by rating (highest first), then review count (fewest
/// first).
///
/// The sort is stable: records with equal keys keep their arrival order.
/// Unknown ratings and unknown review counts sort after known ones.
pub fn rank_places(records: &mut [PlaceRecord]) {
    records.sort_by(compare_for_display);
}

fn compare_for_display(a: &PlaceRecord, b: &PlaceRecord) -> Ordering {
    rating_desc(a.rating, b.rating).then_with(|| review_count_asc(a.review_count, b.review_count))
}

fn rating_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn review_count_asc(a: Option<u32>, b: Option<u32>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
