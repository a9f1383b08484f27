use serde::{Deserialize, Serialize};

/// Role a visitor picks on the landing page.
///
/// - `Donor`: posts surplus food.
/// - `Volunteer`: picks up and delivers posted food.
/// - `Admin`: read-only oversight of users and requests.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Donor,
    Volunteer,
    Admin,
}

/// All roles in landing-page order.
pub const ALL_ROLES: &[UserRole] = &[UserRole::Donor, UserRole::Volunteer, UserRole::Admin];

impl UserRole {
    /// Parse a role key. Unknown values default to `Donor`, the auth form's default.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "volunteer" => UserRole::Volunteer,
            "admin" => UserRole::Admin,
            _ => UserRole::Donor,
        }
    }

    /// Lowercase key used in routes, select values and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Donor => "donor",
            UserRole::Volunteer => "volunteer",
            UserRole::Admin => "admin",
        }
    }

    /// Label used by the sign-up role picker.
    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Donor => "Food Donor",
            UserRole::Volunteer => "Volunteer",
            UserRole::Admin => "Administrator",
        }
    }

    /// "Donor", "Volunteer", "Admin" for banners and list captions.
    pub fn title(&self) -> &'static str {
        match self {
            UserRole::Donor => "Donor",
            UserRole::Volunteer => "Volunteer",
            UserRole::Admin => "Admin",
        }
    }
}

/// Whether a member account is currently active.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Inactive,
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Active => "active",
            AccountStatus::Inactive => "inactive",
        }
    }
}

/// A registered donor or volunteer, as listed on the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: UserRole,
    pub status: AccountStatus,
    /// Donations for donors, deliveries for volunteers.
    pub total_contributions: u32,
    /// `YYYY-MM-DD`.
    pub last_active: String,
}

impl User {
    pub fn is_active(&self) -> bool {
        self.status == AccountStatus::Active
    }

    /// Noun for the contribution count ("donations" or "deliveries").
    pub fn contribution_noun(&self) -> &'static str {
        match self.role {
            UserRole::Volunteer => "deliveries",
            _ => "donations",
        }
    }
}
