// Host-side tests for the artwork model, collection operations and the
// dashboard draft.

use gallery_core::{
    prepend, remove_by_id, replace_by_id, seed_artworks, Artwork, Draft, SuggestedMetadata,
};

fn sample(id: &str, title: &str) -> Artwork {
    Artwork {
        id: id.to_string(),
        title: title.to_string(),
        artist: "A. Tester".to_string(),
        year: "2025".to_string(),
        medium: "Oil on Canvas".to_string(),
        dimensions: "40 x 60 in".to_string(),
        image_url: "http://example.com/x.jpg".to_string(),
    }
}

#[test]
fn seed_collection_is_six_distinct_records() {
    let seed = seed_artworks();
    assert_eq!(seed.len(), 6);
    for art in &seed {
        assert!(!art.id.is_empty());
        assert!(!art.title.is_empty());
        assert!(!art.image_url.is_empty());
    }
    let mut ids: Vec<&str> = seed.iter().map(|a| a.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 6);
}

#[test]
fn created_artwork_is_prepended() {
    let mut list = seed_artworks();
    let created = sample("42", "Test Piece");
    prepend(&mut list, created.clone());

    assert_eq!(list.len(), 7);
    assert_eq!(list[0], created);
    assert_eq!(list[0].title, "Test Piece");
    assert_eq!(list[0].artist, "A. Tester");
    assert_eq!(list[0].image_url, "http://example.com/x.jpg");
    assert!(!list[0].id.is_empty());
}

#[test]
fn replace_swaps_matching_record_only() {
    let mut list = seed_artworks();
    let updated = sample("3", "Renamed Solitude");
    assert!(replace_by_id(&mut list, updated));
    assert_eq!(list.len(), 6);
    let found = list.iter().find(|a| a.id == "3").unwrap();
    assert_eq!(found.title, "Renamed Solitude");
}

#[test]
fn replace_with_unknown_id_leaves_list_unchanged() {
    let mut list = seed_artworks();
    let before = list.clone();
    assert!(!replace_by_id(&mut list, sample("no-such-id", "Ghost")));
    assert_eq!(list, before);
}

#[test]
fn remove_drops_matching_record() {
    let mut list = seed_artworks();
    assert!(remove_by_id(&mut list, "2"));
    assert_eq!(list.len(), 5);
    assert!(list.iter().all(|a| a.id != "2"));
}

#[test]
fn remove_with_unknown_id_is_a_quiet_noop() {
    let mut list = seed_artworks();
    let before = list.clone();
    assert!(!remove_by_id(&mut list, "no-such-id"));
    assert_eq!(list, before);
}

#[test]
fn wire_format_uses_camel_case_image_url() {
    let art = sample("9", "Wire Check");
    let json = serde_json::to_string(&art).unwrap();
    assert!(json.contains("\"imageUrl\""));

    let parsed: Artwork =
        serde_json::from_str(r#"{"id":"7","title":"T","artist":"A","year":"2024","medium":"M","dimensions":"D","imageUrl":"u.jpg"}"#)
            .unwrap();
    assert_eq!(parsed.image_url, "u.jpg");
}

#[test]
fn draft_requires_a_real_title() {
    let mut draft = Draft::default();
    assert!(!draft.is_submittable());
    draft.title = "   ".to_string();
    assert!(!draft.is_submittable());
    draft.title = "Test Piece".to_string();
    assert!(draft.is_submittable());
    // Title alone is enough; an image url is not required
    assert!(draft.image_url.is_empty());
}

#[test]
fn draft_load_and_clear_round_trip() {
    let art = sample("5", "Loaded");
    let mut draft = Draft::from_artwork(&art);
    assert_eq!(draft.title, "Loaded");
    assert_eq!(draft.image_url, art.image_url);
    assert!(draft.is_submittable());

    draft.clear();
    assert_eq!(draft, Draft::default());
}

#[test]
fn suggestion_fills_empty_fields_only() {
    let mut draft = Draft {
        title: "Curator's Title".to_string(),
        ..Draft::default()
    };
    let suggestion = SuggestedMetadata {
        title: Some("AI Title".to_string()),
        artist: Some("AI Artist".to_string()),
        year: Some("1999".to_string()),
        medium: None,
        dimensions: Some("10 x 10 in".to_string()),
    };
    draft.apply_suggestion(&suggestion);

    // The typed field survives; blanks are filled; absent fields stay blank
    assert_eq!(draft.title, "Curator's Title");
    assert_eq!(draft.artist, "AI Artist");
    assert_eq!(draft.year, "1999");
    assert_eq!(draft.medium, "");
    assert_eq!(draft.dimensions, "10 x 10 in");
}

#[test]
fn suggestion_with_no_fields_changes_nothing() {
    let mut draft = Draft {
        title: "Kept".to_string(),
        artist: "Kept Too".to_string(),
        ..Draft::default()
    };
    let before = draft.clone();
    draft.apply_suggestion(&SuggestedMetadata::default());
    assert_eq!(draft, before);
}

#[test]
fn suggestion_response_tolerates_partial_json() {
    let s: SuggestedMetadata = serde_json::from_str(r#"{"title":"Only Title"}"#).unwrap();
    assert_eq!(s.title.as_deref(), Some("Only Title"));
    assert!(s.artist.is_none());
    assert!(s.dimensions.is_none());
}
