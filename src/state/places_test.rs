use super::*;
use time::macros::datetime;

fn summary(id: &str, name: &str) -> PlaceSummary {
    PlaceSummary {
        id: id.to_owned(),
        name: name.to_owned(),
        last_visited: None,
        last_skipped: None,
        visit_count: 0,
        skip_count: 0,
    }
}

// =============================================================
// PlaceRecord
// =============================================================

#[test]
fn place_record_dates_default_to_absent() {
    let record = PlaceRecord::new("/places/3/edit", "Lake House", 4, 0);
    assert_eq!(record.edit_url, "/places/3/edit");
    assert_eq!(record.name, "Lake House");
    assert!(record.last_visited.is_none());
    assert!(record.last_skipped.is_none());
    assert_eq!(record.visit_count, 4);
    assert_eq!(record.skip_count, 0);
}

#[test]
fn place_record_builders_set_dates() {
    let visited = datetime!(2024-01-05 0:00 UTC);
    let skipped = datetime!(2024-02-01 0:00 UTC);
    let record = PlaceRecord::new("/x", "X", 1, 1)
        .with_last_visited(Some(visited))
        .with_last_skipped(Some(skipped));
    assert_eq!(record.last_visited, Some(visited));
    assert_eq!(record.last_skipped, Some(skipped));
}

// =============================================================
// PlaceSummary / decode_places
// =============================================================

#[test]
fn decode_places_reads_camel_case_payload() {
    let body = serde_json::json!([{
        "id": "5a1b",
        "name": "Taco Truck",
        "lastVisited": "2024-01-05T12:00:00Z",
        "lastSkipped": null,
        "visitCount": 3,
        "skipCount": 1
    }])
    .to_string();

    let places = decode_places(&body).expect("valid payload");
    assert_eq!(places.len(), 1);
    assert_eq!(places[0].id, "5a1b");
    assert_eq!(places[0].name, "Taco Truck");
    assert_eq!(places[0].last_visited, Some(datetime!(2024-01-05 12:00 UTC)));
    assert_eq!(places[0].last_skipped, None);
    assert_eq!(places[0].visit_count, 3);
    assert_eq!(places[0].skip_count, 1);
}

#[test]
fn decode_places_accepts_underscore_id_and_missing_counters() {
    let body = serde_json::json!([{ "_id": "abc", "name": "Deli" }]).to_string();
    let places = decode_places(&body).expect("valid payload");
    assert_eq!(places[0].id, "abc");
    assert_eq!(places[0].visit_count, 0);
    assert_eq!(places[0].skip_count, 0);
    assert!(places[0].last_visited.is_none());
}

#[test]
fn decode_places_null_is_empty_list() {
    assert!(decode_places("null").expect("null payload").is_empty());
}

#[test]
fn decode_places_rejects_malformed_json() {
    let err = decode_places("{not json").unwrap_err();
    assert!(err.to_string().starts_with("invalid place list"));
}

#[test]
fn to_record_builds_edit_url_from_id() {
    let record = summary("5a1b", "Deli").to_record();
    assert_eq!(record.edit_url, "/manage/places/5a1b");
    assert_eq!(record.name, "Deli");
}

#[test]
fn to_record_treats_zero_timestamp_as_never() {
    let body = serde_json::json!([{
        "id": "1",
        "name": "Noodles",
        "lastVisited": "0001-01-01T00:00:00Z",
        "lastSkipped": "2024-06-01T09:00:00Z",
        "visitCount": 0,
        "skipCount": 2
    }])
    .to_string();

    let record = decode_places(&body).expect("valid payload")[0].to_record();
    assert!(record.last_visited.is_none());
    assert_eq!(record.last_skipped, Some(datetime!(2024-06-01 9:00 UTC)));
}

// =============================================================
// PlacesState
// =============================================================

#[test]
fn places_state_defaults() {
    let s = PlacesState::default();
    assert!(s.items.is_empty());
    assert!(!s.loading);
}

#[test]
fn replace_all_clears_loading() {
    let mut s = PlacesState { items: Vec::new(), loading: true };
    s.replace_all(vec![summary("1", "Deli")]);
    assert!(!s.loading);
    assert_eq!(s.items.len(), 1);
}

#[test]
fn find_looks_up_by_id() {
    let mut s = PlacesState::default();
    s.replace_all(vec![summary("1", "Deli"), summary("2", "Pho")]);
    assert_eq!(s.find("2").map(|p| p.name.as_str()), Some("Pho"));
    assert!(s.find("3").is_none());
}

#[test]
fn records_are_sorted_by_name_ignoring_case() {
    let mut s = PlacesState::default();
    s.replace_all(vec![summary("1", "pho"), summary("2", "Burgers"), summary("3", "Deli")]);
    let names = s.records().into_iter().map(|r| r.name).collect::<Vec<_>>();
    assert_eq!(names, vec!["Burgers", "Deli", "pho"]);
}

#[test]
fn rename_trims_and_updates() {
    let mut s = PlacesState::default();
    s.replace_all(vec![summary("1", "Deli")]);
    assert_eq!(s.rename("1", "  Corner Deli "), Ok(()));
    assert_eq!(s.items[0].name, "Corner Deli");
}

#[test]
fn rename_rejects_blank_name() {
    let mut s = PlacesState::default();
    s.replace_all(vec![summary("1", "Deli")]);
    assert_eq!(s.rename("1", "   "), Err(PlaceEditError::EmptyName));
    assert_eq!(s.items[0].name, "Deli");
}

#[test]
fn rename_rejects_name_of_another_place() {
    let mut s = PlacesState::default();
    s.replace_all(vec![summary("1", "Deli"), summary("2", "Pho")]);
    assert_eq!(s.rename("1", "Pho"), Err(PlaceEditError::DuplicateName("Pho".to_owned())));
}

#[test]
fn rename_to_own_name_is_allowed() {
    let mut s = PlacesState::default();
    s.replace_all(vec![summary("1", "Deli")]);
    assert_eq!(s.rename("1", "Deli"), Ok(()));
}

#[test]
fn rename_unknown_place_is_not_found() {
    let mut s = PlacesState::default();
    s.replace_all(vec![summary("1", "Deli")]);
    assert_eq!(s.rename("9", "Deli"), Err(PlaceEditError::NotFound("9".to_owned())));
}
