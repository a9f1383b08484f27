//! Demo data each dashboard starts from.

use crate::{
    AccountStatus, AdminOverview, AdminRequest, DonationRequest, DonationStatus, DonorBoard,
    PickupStatus, PickupTask, Priority, Quantity, User, UserRole, VolunteerBoard,
};

fn servings(amount: u32) -> Quantity {
    Quantity::new(amount, "servings")
}

pub fn donor_board() -> DonorBoard {
    DonorBoard::new(vec![
        DonationRequest {
            id: "1".into(),
            food_type: "Fresh vegetables and fruits".into(),
            quantity: servings(20),
            location: "Green Garden Restaurant, MG Road".into(),
            pickup_time: "2024-06-16 18:00".into(),
            status: DonationStatus::Accepted,
            volunteer: Some("Rajesh Kumar".into()),
        },
        DonationRequest {
            id: "2".into(),
            food_type: "Cooked rice and curry".into(),
            quantity: servings(50),
            location: "Wedding Hall, Koramangala".into(),
            pickup_time: "2024-06-15 21:00".into(),
            status: DonationStatus::Completed,
            volunteer: None,
        },
    ])
}

pub fn volunteer_board() -> VolunteerBoard {
    let task = |id: &str,
                donor: &str,
                food: &str,
                amount: u32,
                location: &str,
                time: &str,
                distance: &str,
                status: PickupStatus,
                priority: Priority| PickupTask {
        id: id.into(),
        donor: donor.into(),
        food_type: food.into(),
        quantity: servings(amount),
        location: location.into(),
        pickup_time: time.into(),
        distance: distance.into(),
        status,
        priority,
    };
    VolunteerBoard::new(vec![
        task(
            "1",
            "Green Garden Restaurant",
            "Fresh vegetables and fruits",
            20,
            "MG Road, Bangalore",
            "2024-06-16 18:00",
            "1.2 km",
            PickupStatus::Available,
            Priority::High,
        ),
        task(
            "2",
            "Royal Wedding Hall",
            "Cooked meals (rice, dal, curry)",
            100,
            "Koramangala, Bangalore",
            "2024-06-16 20:30",
            "2.8 km",
            PickupStatus::Available,
            Priority::Medium,
        ),
        task(
            "3",
            "Sunset Cafe",
            "Sandwiches and pastries",
            15,
            "Indiranagar, Bangalore",
            "2024-06-16 19:00",
            "0.8 km",
            PickupStatus::Accepted,
            Priority::High,
        ),
    ])
}

pub fn admin_overview() -> AdminOverview {
    let user = |id: &str, name: &str, role, status, total, last: &str| User {
        id: id.into(),
        name: name.into(),
        role,
        status,
        total_contributions: total,
        last_active: last.into(),
    };
    let users = vec![
        user("1", "Green Garden Restaurant", UserRole::Donor, AccountStatus::Active, 23, "2024-06-16"),
        user("2", "Rajesh Kumar", UserRole::Volunteer, AccountStatus::Active, 18, "2024-06-16"),
        user("3", "Royal Wedding Hall", UserRole::Donor, AccountStatus::Active, 12, "2024-06-15"),
        user("4", "Priya Sharma", UserRole::Volunteer, AccountStatus::Inactive, 9, "2024-06-14"),
    ];
    let requests = vec![
        AdminRequest {
            id: "1".into(),
            donor: "Green Garden Restaurant".into(),
            volunteer: Some("Rajesh Kumar".into()),
            food_type: "Fresh vegetables and fruits".into(),
            quantity: servings(20),
            location: "MG Road, Bangalore".into(),
            status: DonationStatus::Completed,
            created_at: "2024-06-16 17:30".into(),
            completed_at: Some("2024-06-16 18:45".into()),
        },
        AdminRequest {
            id: "2".into(),
            donor: "Royal Wedding Hall".into(),
            volunteer: None,
            food_type: "Cooked meals (rice, dal, curry)".into(),
            quantity: servings(100),
            location: "Koramangala, Bangalore".into(),
            status: DonationStatus::Pending,
            created_at: "2024-06-16 20:00".into(),
            completed_at: None,
        },
        AdminRequest {
            id: "3".into(),
            donor: "Sunset Cafe".into(),
            volunteer: Some("Priya Sharma".into()),
            food_type: "Sandwiches and pastries".into(),
            quantity: servings(15),
            location: "Indiranagar, Bangalore".into(),
            status: DonationStatus::Accepted,
            created_at: "2024-06-16 18:30".into(),
            completed_at: None,
        },
    ];
    AdminOverview::new(users, requests)
}
