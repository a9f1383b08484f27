pub mod auth_dialog;
pub mod dashboard;
pub mod landing;
pub mod not_found;

use dioxus::prelude::*;
use shared_types::UserRole;

use dashboard::admin::AdminDashboard;
use dashboard::donor::DonorDashboard;
use dashboard::volunteer::VolunteerDashboard;
use landing::Landing;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/donor")]
    DonorDashboard {},
    #[route("/volunteer")]
    VolunteerDashboard {},
    #[route("/admin")]
    AdminDashboard {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    /// Dashboard a role lands on after picking it.
    pub fn for_role(role: UserRole) -> Self {
        match role {
            UserRole::Donor => Route::DonorDashboard {},
            UserRole::Volunteer => Route::VolunteerDashboard {},
            UserRole::Admin => Route::AdminDashboard {},
        }
    }
}
