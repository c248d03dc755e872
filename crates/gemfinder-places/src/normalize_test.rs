use chrono::TimeZone;

use super::*;
use crate::types::{AuthorAttribution, RawLatLng};

fn ctx() -> NormalizeContext<'static> {
    NormalizeContext {
        api_key: "test-key",
        query: "restaurants in greenpoint, brooklyn",
        fetched_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
    }
}

fn text(s: &str) -> Option<LocalizedText> {
    Some(LocalizedText {
        text: Some(s.to_owned()),
        language_code: Some("en".to_owned()),
    })
}

fn make_review(body: Option<&str>, rating: Option<f64>, author: Option<&str>) -> RawReview {
    RawReview {
        text: body.and_then(text),
        rating,
        author_attribution: author.map(|a| AuthorAttribution {
            display_name: Some(a.to_owned()),
            uri: None,
            photo_uri: Some(format!("https://lh3.googleusercontent.com/{a}")),
        }),
        relative_publish_time_description: Some("2 months ago".to_owned()),
    }
}

fn make_place() -> RawPlace {
    RawPlace {
        id: Some("ChIJ-lilia".to_owned()),
        display_name: text("Lilia"),
        formatted_address: Some("567 Union Ave, Brooklyn, NY 11211, USA".to_owned()),
        rating: Some(4.8),
        user_rating_count: Some(87),
        google_maps_uri: Some("https://maps.google.com/?cid=1".to_owned()),
        website_uri: Some("https://lilianewyork.com/".to_owned()),
        price_level: Some("PRICE_LEVEL_EXPENSIVE".to_owned()),
        photos: vec![RawPhoto {
            name: Some("places/ChIJ-lilia/photos/AUc7ref1".to_owned()),
            width_px: Some(4032),
            height_px: Some(3024),
        }],
        reviews: vec![make_review(Some("Best pasta."), Some(5.0), Some("Dana"))],
        location: Some(RawLatLng {
            latitude: 40.717,
            longitude: -73.952,
        }),
        primary_type_display_name: text("Italian Restaurant"),
        primary_type: Some("italian_restaurant".to_owned()),
        types: vec![
            "italian_restaurant".to_owned(),
            "restaurant".to_owned(),
            "food".to_owned(),
        ],
    }
}

// -----------------------------------------------------------------------
// normalize_place
// -----------------------------------------------------------------------

#[test]
fn normalize_place_maps_all_fields() {
    let record = normalize_place(make_place(), &ctx()).unwrap();
    assert_eq!(record.place_id.as_deref(), Some("ChIJ-lilia"));
    assert_eq!(record.name, "Lilia");
    assert_eq!(record.address, "567 Union Ave, Brooklyn, NY 11211, USA");
    assert_eq!(record.rating, Some(4.8));
    assert_eq!(record.review_count, Some(87));
    assert_eq!(record.category.as_deref(), Some("Italian Restaurant"));
    assert_eq!(record.primary_type.as_deref(), Some("italian_restaurant"));
    assert_eq!(record.types, vec!["italian_restaurant", "restaurant", "food"]);
    assert_eq!(record.price_level, PriceLevel::Expensive);
    assert_eq!(
        record.website_url.as_deref(),
        Some("https://lilianewyork.com/")
    );
    let location = record.location.unwrap();
    assert!((location.latitude - 40.717).abs() < f64::EPSILON);
    assert_eq!(record.query, "restaurants in greenpoint, brooklyn");
    assert_eq!(record.fetched_at, ctx().fetched_at);
}

#[test]
fn normalize_place_error_when_display_name_missing() {
    let mut place = make_place();
    place.display_name = None;
    let err = normalize_place(place, &ctx()).unwrap_err();
    assert!(
        matches!(err, PlacesError::MalformedRecord { ref reason, .. } if reason.contains("displayName"))
    );
}

#[test]
fn normalize_place_error_when_display_name_text_blank() {
    let mut place = make_place();
    place.display_name = text("  ");
    assert!(normalize_place(place, &ctx()).is_err());
}

#[test]
fn normalize_place_error_when_address_missing() {
    let mut place = make_place();
    place.formatted_address = None;
    let err = normalize_place(place, &ctx()).unwrap_err();
    assert!(
        matches!(err, PlacesError::MalformedRecord { ref place_id, ref reason }
            if place_id.as_deref() == Some("ChIJ-lilia") && reason.contains("formattedAddress"))
    );
}

#[test]
fn normalize_place_unknowns_stay_unknown() {
    let mut place = make_place();
    place.id = None;
    place.rating = None;
    place.user_rating_count = None;
    place.location = None;
    place.primary_type_display_name = None;
    place.website_uri = None;
    place.price_level = None;
    let record = normalize_place(place, &ctx()).unwrap();
    assert!(record.place_id.is_none());
    assert!(record.rating.is_none());
    assert!(record.review_count.is_none());
    assert!(record.location.is_none());
    assert!(record.category.is_none());
    assert_eq!(record.category_label(), "unknown");
    assert!(record.website_url.is_none());
    assert_eq!(record.price_level, PriceLevel::Unknown);
}

#[test]
fn normalize_place_negative_review_count_is_unknown() {
    let mut place = make_place();
    place.user_rating_count = Some(-1);
    let record = normalize_place(place, &ctx()).unwrap();
    assert!(record.review_count.is_none());
}

#[test]
fn normalize_place_builds_photo_urls_in_order() {
    let mut place = make_place();
    place.photos.push(RawPhoto {
        name: Some("places/ChIJ-lilia/photos/AUc7ref2".to_owned()),
        ..RawPhoto::default()
    });
    place.photos.push(RawPhoto::default());
    let record = normalize_place(place, &ctx()).unwrap();
    assert_eq!(
        record.photos,
        vec![
            "https://maps.googleapis.com/maps/api/place/photo?maxwidth=400&photo_reference=AUc7ref1&key=test-key",
            "https://maps.googleapis.com/maps/api/place/photo?maxwidth=400&photo_reference=AUc7ref2&key=test-key",
        ]
    );
}

// -----------------------------------------------------------------------
// map_price_level
// -----------------------------------------------------------------------

#[test]
fn map_price_level_known_values() {
    assert_eq!(
        map_price_level(Some("PRICE_LEVEL_INEXPENSIVE")),
        PriceLevel::Inexpensive
    );
    assert_eq!(
        map_price_level(Some("PRICE_LEVEL_MODERATE")),
        PriceLevel::Moderate
    );
    assert_eq!(map_price_level(Some("PRICE_LEVEL_MODERATE")).to_string(), "$$");
    assert_eq!(
        map_price_level(Some("PRICE_LEVEL_EXPENSIVE")),
        PriceLevel::Expensive
    );
    assert_eq!(
        map_price_level(Some("PRICE_LEVEL_VERY_EXPENSIVE")),
        PriceLevel::VeryExpensive
    );
}

#[test]
fn map_price_level_unknown_values() {
    assert_eq!(map_price_level(Some("FOO")), PriceLevel::Unknown);
    assert_eq!(map_price_level(Some("PRICE_LEVEL_FREE")), PriceLevel::Unknown);
    assert_eq!(map_price_level(Some("")), PriceLevel::Unknown);
    assert_eq!(map_price_level(None), PriceLevel::Unknown);
}

// -----------------------------------------------------------------------
// reviews
// -----------------------------------------------------------------------

#[test]
fn normalize_reviews_drops_reviews_without_text() {
    let reviews = vec![
        make_review(Some("Great."), Some(5.0), Some("A")),
        make_review(None, Some(1.0), Some("B")),
        make_review(Some("   "), Some(2.0), Some("C")),
        make_review(Some("Fine."), Some(3.0), Some("D")),
    ];
    let normalized = normalize_reviews(reviews);
    let authors: Vec<_> = normalized.iter().map(|r| r.author_name.as_str()).collect();
    assert_eq!(authors, vec!["A", "D"]);
    assert_eq!(normalized[0].text, "Great.");
    assert_eq!(normalized[1].rating, Some(3));
}

#[test]
fn normalize_reviews_missing_rating_is_unknown_not_zero() {
    let normalized = normalize_reviews(vec![make_review(Some("Nice."), None, Some("A"))]);
    assert_eq!(normalized[0].rating, None);
}

#[test]
fn normalize_reviews_out_of_range_rating_is_unknown() {
    let normalized = normalize_reviews(vec![
        make_review(Some("a"), Some(0.0), None),
        make_review(Some("b"), Some(6.0), None),
        make_review(Some("c"), Some(4.5), None),
    ]);
    assert!(normalized.iter().all(|r| r.rating.is_none()));
}

#[test]
fn normalize_reviews_defaults_author_to_anonymous() {
    let normalized = normalize_reviews(vec![make_review(Some("Nice."), Some(4.0), None)]);
    assert_eq!(normalized[0].author_name, "Anonymous");
    assert!(normalized[0].author_photo_url.is_none());
    assert_eq!(
        normalized[0].relative_publish_time.as_deref(),
        Some("2 months ago")
    );
}

#[test]
fn has_review_text_is_pure_predicate() {
    assert!(has_review_text(&make_review(Some("x"), None, None)));
    assert!(!has_review_text(&make_review(None, Some(5.0), None)));
    assert!(!has_review_text(&RawReview::default()));
}

#[test]
fn has_review_text_treats_blank_text_as_missing() {
    assert!(!has_review_text(&make_review(Some(""), Some(4.0), None)));
    assert!(!has_review_text(&make_review(Some(" \n\t "), Some(4.0), None)));
    assert!(has_review_text(&make_review(Some("  ok  "), Some(4.0), None)));

    // Surrounding whitespace is not a reason to drop a review, nor is it trimmed.
    let normalized = normalize_reviews(vec![make_review(Some("  ok  "), Some(4.0), None)]);
    assert_eq!(normalized[0].text, "  ok  ");
}

// -----------------------------------------------------------------------
// photo_url
// -----------------------------------------------------------------------

#[test]
fn photo_url_uses_trailing_segment() {
    let url = photo_url("places/abc/photos/REF123", "k").unwrap();
    assert_eq!(
        url,
        "https://maps.googleapis.com/maps/api/place/photo?maxwidth=400&photo_reference=REF123&key=k"
    );
}

#[test]
fn photo_url_accepts_bare_reference() {
    let url = photo_url("REF123", "k").unwrap();
    assert!(url.contains("photo_reference=REF123"));
}

#[test]
fn photo_url_none_for_trailing_slash() {
    assert!(photo_url("places/abc/photos/", "k").is_none());
    assert!(photo_url("", "k").is_none());
}

#[test]
fn photo_url_encodes_key() {
    let url = photo_url("REF", "a b&c").unwrap();
    assert!(url.ends_with("key=a+b%26c"));
}
