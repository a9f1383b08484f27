//! Volunteer task claiming and completion

use pretty_assertions::assert_eq;
use shared_types::{seed, PickupStatus};

fn ids(tasks: Vec<&shared_types::PickupTask>) -> Vec<String> {
    tasks.into_iter().map(|t| t.id.clone()).collect()
}

#[test]
fn seeded_partitions() {
    let board = seed::volunteer_board();
    assert_eq!(ids(board.available()), vec!["1", "2"]);
    assert_eq!(ids(board.my_tasks()), vec!["3"]);
    assert!(board.completed().is_empty());
}

#[test]
fn accept_moves_task_to_my_tasks() {
    let mut board = seed::volunteer_board();
    assert!(board.accept("1"));

    assert_eq!(board.get("1").unwrap().status, PickupStatus::Accepted);
    assert_eq!(ids(board.available()), vec!["2"]);
    assert_eq!(ids(board.my_tasks()), vec!["1", "3"]);
}

#[test]
fn complete_moves_task_to_completed() {
    let mut board = seed::volunteer_board();
    assert!(board.complete("3"));

    assert_eq!(ids(board.my_tasks()), Vec::<String>::new());
    assert_eq!(ids(board.completed()), vec!["3"]);
}

#[test]
fn full_lifecycle_of_one_task() {
    let mut board = seed::volunteer_board();
    board.accept("2");
    board.complete("2");

    assert_eq!(board.get("2").unwrap().status, PickupStatus::Completed);
    assert_eq!(ids(board.available()), vec!["1"]);
    assert_eq!(ids(board.my_tasks()), vec!["3"]);
    assert_eq!(ids(board.completed()), vec!["2"]);
}

#[test]
fn partitions_always_cover_every_task_once() {
    let mut board = seed::volunteer_board();
    board.accept("1");
    board.complete("3");
    let total = board.available().len() + board.my_tasks().len() + board.completed().len();
    assert_eq!(total, board.all().len());
}

#[test]
fn unknown_id_is_a_no_op() {
    let mut board = seed::volunteer_board();
    let before = board.clone();
    assert!(!board.accept("99"));
    assert!(!board.complete(""));
    assert_eq!(board, before);
}

#[test]
fn task_order_is_stable_across_status_changes() {
    let mut board = seed::volunteer_board();
    board.accept("2");
    board.complete("1");
    let all: Vec<&str> = board.all().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(all, vec!["1", "2", "3"]);
}
