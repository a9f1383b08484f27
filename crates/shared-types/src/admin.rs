use serde::{Deserialize, Serialize};

use crate::{DonationStatus, Quantity, User, UserRole};

/// A request as listed on the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminRequest {
    pub id: String,
    pub donor: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volunteer: Option<String>,
    pub food_type: String,
    pub quantity: Quantity,
    pub location: String,
    pub status: DonationStatus,
    /// `YYYY-MM-DD HH:MM`.
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
}

/// Headline numbers on the admin dashboard.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdminStats {
    pub total_users: usize,
    pub active_users: usize,
    pub total_donors: usize,
    pub total_volunteers: usize,
    pub completed_requests: usize,
    pub pending_requests: usize,
    /// Sum of quantity amounts over completed requests.
    pub meals_served: u64,
}

/// Read-only view over every user and request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AdminOverview {
    pub users: Vec<User>,
    pub requests: Vec<AdminRequest>,
}

impl AdminOverview {
    pub fn new(users: Vec<User>, requests: Vec<AdminRequest>) -> Self {
        Self { users, requests }
    }

    pub fn stats(&self) -> AdminStats {
        let count_status = |status: DonationStatus| {
            self.requests.iter().filter(|r| r.status == status).count()
        };
        AdminStats {
            total_users: self.users.len(),
            active_users: self.users.iter().filter(|u| u.is_active()).count(),
            total_donors: self.users_by_role(UserRole::Donor).len(),
            total_volunteers: self.users_by_role(UserRole::Volunteer).len(),
            completed_requests: count_status(DonationStatus::Completed),
            pending_requests: count_status(DonationStatus::Pending),
            meals_served: self
                .requests
                .iter()
                .filter(|r| r.status == DonationStatus::Completed)
                .map(|r| u64::from(r.quantity.amount))
                .sum(),
        }
    }

    /// Users with `role`, in list order.
    pub fn users_by_role(&self, role: UserRole) -> Vec<&User> {
        self.users.iter().filter(|u| u.role == role).collect()
    }

    /// The `n` users with the most contributions. Ties keep list order.
    pub fn top_contributors(&self, n: usize) -> Vec<&User> {
        let mut ranked: Vec<&User> = self.users.iter().collect();
        ranked.sort_by(|a, b| b.total_contributions.cmp(&a.total_contributions));
        ranked.truncate(n);
        ranked
    }

    pub fn recent_activity(&self, n: usize) -> &[AdminRequest] {
        &self.requests[..n.min(self.requests.len())]
    }
}
