//! Admin overview statistics and lists over the seeded data

use pretty_assertions::assert_eq;
use shared_types::{seed, AccountStatus, AdminStats, UserRole};

#[test]
fn seeded_stats() {
    let stats = seed::admin_overview().stats();
    assert_eq!(
        stats,
        AdminStats {
            total_users: 4,
            active_users: 3,
            total_donors: 2,
            total_volunteers: 2,
            completed_requests: 1,
            pending_requests: 1,
            meals_served: 20,
        }
    );
}

#[test]
fn meals_served_counts_only_completed_requests() {
    let mut overview = seed::admin_overview();
    overview.requests[1].status = shared_types::DonationStatus::Completed;
    assert_eq!(overview.stats().meals_served, 120);
    assert_eq!(overview.stats().pending_requests, 0);
}

#[test]
fn users_by_role_preserves_list_order() {
    let overview = seed::admin_overview();
    let donors: Vec<&str> = overview
        .users_by_role(UserRole::Donor)
        .iter()
        .map(|u| u.name.as_str())
        .collect();
    assert_eq!(donors, vec!["Green Garden Restaurant", "Royal Wedding Hall"]);
    assert!(overview.users_by_role(UserRole::Admin).is_empty());
}

#[test]
fn top_contributors_sorted_descending() {
    let overview = seed::admin_overview();
    let totals: Vec<u32> = overview
        .top_contributors(5)
        .iter()
        .map(|u| u.total_contributions)
        .collect();
    assert_eq!(totals, vec![23, 18, 12, 9]);
}

#[test]
fn top_contributors_keeps_list_order_on_ties() {
    let mut overview = seed::admin_overview();
    overview.users[2].total_contributions = 23;
    let names: Vec<&str> = overview
        .top_contributors(2)
        .iter()
        .map(|u| u.name.as_str())
        .collect();
    assert_eq!(names, vec!["Green Garden Restaurant", "Royal Wedding Hall"]);
}

#[test]
fn recent_activity_is_capped() {
    let overview = seed::admin_overview();
    assert_eq!(overview.recent_activity(5).len(), 3);
    assert_eq!(overview.recent_activity(2)[1].id, "2");
    assert!(overview.recent_activity(0).is_empty());
}

#[test]
fn inactive_volunteer_is_not_counted_active() {
    let overview = seed::admin_overview();
    let priya = overview.users.iter().find(|u| u.id == "4").unwrap();
    assert_eq!(priya.status, AccountStatus::Inactive);
    assert!(!priya.is_active());
    assert_eq!(priya.contribution_noun(), "deliveries");
}
