pub mod admin;
pub mod donor;
pub mod volunteer;

use shared_types::{AccountStatus, DonationStatus, PickupStatus, Priority, UserRole};
use shared_ui::components::BadgeVariant;
use shared_ui::theme::Accent;

/// Donor-side status to badge tone.
pub fn donation_status_badge(status: DonationStatus) -> BadgeVariant {
    match status {
        DonationStatus::Pending => BadgeVariant::Warning,
        DonationStatus::Accepted => BadgeVariant::Info,
        DonationStatus::Completed => BadgeVariant::Success,
    }
}

/// Volunteer-side status to badge tone.
pub fn pickup_status_badge(status: PickupStatus) -> BadgeVariant {
    match status {
        PickupStatus::Available => BadgeVariant::Success,
        PickupStatus::Accepted => BadgeVariant::Info,
        PickupStatus::InProgress => BadgeVariant::Warning,
        PickupStatus::Completed => BadgeVariant::Accent,
    }
}

pub fn priority_badge(priority: Priority) -> BadgeVariant {
    match priority {
        Priority::High => BadgeVariant::Danger,
        Priority::Medium => BadgeVariant::Warning,
        Priority::Low => BadgeVariant::Success,
    }
}

pub fn account_status_badge(status: AccountStatus) -> BadgeVariant {
    match status {
        AccountStatus::Active => BadgeVariant::Success,
        AccountStatus::Inactive => BadgeVariant::Neutral,
    }
}

/// Header badge tone and page accent for each role.
pub fn role_theme(role: UserRole) -> (BadgeVariant, Accent) {
    match role {
        UserRole::Donor => (BadgeVariant::Success, Accent::Green),
        UserRole::Volunteer => (BadgeVariant::Highlight, Accent::Orange),
        UserRole::Admin => (BadgeVariant::Accent, Accent::Purple),
    }
}
