pub mod error;
pub mod feature_flags;

// Food rescue domain
pub mod admin;
pub mod auth_form;
pub mod donation;
pub mod models;
pub mod pickup;
pub mod quantity;
pub mod seed;
pub mod snapshot;

pub use error::*;
pub use feature_flags::*;

pub use admin::*;
pub use auth_form::*;
pub use donation::*;
pub use models::*;
pub use pickup::*;
pub use quantity::*;
pub use snapshot::*;
