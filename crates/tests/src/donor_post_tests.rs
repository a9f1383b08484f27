//! Posting donation requests onto the seeded donor board

use pretty_assertions::assert_eq;
use shared_types::{seed, AppErrorKind, DonationStatus, Quantity};

use crate::common::{at_millis, draft, noon, NOON_MILLIS};

#[test]
fn seeded_board_has_two_requests_one_active() {
    let board = seed::donor_board();
    assert_eq!(board.len(), 2);
    assert_eq!(board.active_count(), 1);
    assert_eq!(board.all()[0].status, DonationStatus::Accepted);
    assert_eq!(board.all()[0].volunteer.as_deref(), Some("Rajesh Kumar"));
}

#[test]
fn posted_request_goes_first_as_pending() {
    let mut board = seed::donor_board();
    let posted = board
        .post_request(
            &draft("Cooked rice", "50 servings", "Community Hall, HSR Layout"),
            noon(),
        )
        .unwrap()
        .clone();

    assert_eq!(posted.id, NOON_MILLIS.to_string());
    assert_eq!(posted.status, DonationStatus::Pending);
    assert_eq!(posted.quantity, Quantity::new(50, "servings"));
    assert_eq!(posted.volunteer, None);

    assert_eq!(board.len(), 3);
    assert_eq!(board.all()[0], posted);
    assert_eq!(board.all()[1].id, "1");
    assert_eq!(board.active_count(), 2);
}

#[test]
fn recent_overview_shows_new_request_first() {
    let mut board = seed::donor_board();
    board
        .post_request(&draft("Bread", "30 loaves", "Bakery Street"), noon())
        .unwrap();
    let recent: Vec<&str> = board.recent(3).iter().map(|r| r.food_type.as_str()).collect();
    assert_eq!(
        recent,
        vec!["Bread", "Fresh vegetables and fruits", "Cooked rice and curry"]
    );
}

#[test]
fn blank_pickup_time_is_kept_blank() {
    let mut board = seed::donor_board();
    let posted = board
        .post_request(&draft("Soup", "10 litres", "Main Road"), noon())
        .unwrap();
    assert_eq!(posted.pickup_time, "");
}

#[test]
fn two_posts_in_the_same_millisecond_get_distinct_ids() {
    let mut board = seed::donor_board();
    let first = board
        .post_request(&draft("A", "1 kg", "X"), noon())
        .unwrap()
        .id
        .clone();
    let second = board
        .post_request(&draft("B", "2 kg", "Y"), noon())
        .unwrap()
        .id
        .clone();
    assert_ne!(first, second);
    assert_eq!(second, (NOON_MILLIS + 1).to_string());
}

#[test]
fn id_colliding_with_seed_id_is_bumped() {
    let mut board = seed::donor_board();
    let posted = board
        .post_request(&draft("A", "1 kg", "X"), at_millis(1))
        .unwrap();
    assert_eq!(posted.id, "3");
}

#[test]
fn missing_location_is_rejected_without_touching_the_board() {
    let mut board = seed::donor_board();
    let before = board.clone();

    let err = board
        .post_request(&draft("Rice", "5 kg", "   "), noon())
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(err.field("location"), Some("Pickup location is required"));
    assert_eq!(board, before);
}

#[test]
fn every_missing_field_is_reported_at_once() {
    let mut board = seed::donor_board();
    let err = board.post_request(&draft("", "", ""), noon()).unwrap_err();
    assert_eq!(err.field("food_type"), Some("Food type is required"));
    assert_eq!(err.field("quantity"), Some("Quantity is required"));
    assert_eq!(err.field("location"), Some("Pickup location is required"));
}

#[test]
fn quantity_without_a_number_is_rejected() {
    let mut board = seed::donor_board();
    let err = board
        .post_request(&draft("Rice", "lots", "X"), noon())
        .unwrap_err();
    assert_eq!(
        err.field("quantity"),
        Some("Quantity must start with a number, e.g. 50 servings")
    );
    assert_eq!(board.len(), 2);
}

#[test]
fn fractional_or_grouped_quantity_is_rejected_not_mangled() {
    let mut board = seed::donor_board();
    for text in ["2.5 kg", "1,000 servings"] {
        let err = board
            .post_request(&draft("Rice", text, "X"), noon())
            .unwrap_err();
        assert_eq!(
            err.field("quantity"),
            Some("Quantity must be a whole number, e.g. 3 kg")
        );
    }
    assert_eq!(board.len(), 2);
}
