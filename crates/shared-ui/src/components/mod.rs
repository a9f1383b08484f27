// Standalone components
pub mod badge;
pub mod button;
pub mod card;
pub mod form_select;
pub mod input;
pub mod stat_card;
pub mod textarea;

// Primitive wrappers
pub mod dialog;
pub mod tabs;

// Composites (depend on badge and card)
pub mod dashboard_header;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use dashboard_header::*;
pub use dialog::*;
pub use form_select::*;
pub use input::*;
pub use stat_card::*;
pub use tabs::*;
pub use textarea::*;
