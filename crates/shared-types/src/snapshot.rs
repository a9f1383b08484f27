use serde::{Deserialize, Serialize};

use crate::{seed, AdminOverview, AppError, DonorBoard, VolunteerBoard};

pub const SNAPSHOT_VERSION: u32 = 1;

/// All three dashboards' state in one versioned document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    pub version: u32,
    pub donor: DonorBoard,
    pub volunteer: VolunteerBoard,
    pub admin: AdminOverview,
}

impl Snapshot {
    /// The demo state the dashboards mount with.
    pub fn seeded() -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            donor: seed::donor_board(),
            volunteer: seed::volunteer_board(),
            admin: seed::admin_overview(),
        }
    }

    pub fn to_json(&self) -> Result<String, AppError> {
        serde_json::to_string_pretty(self).map_err(|e| AppError::internal(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(AppError::bad_request(format!(
                "unsupported snapshot version {}",
                snapshot.version
            )));
        }
        Ok(snapshot)
    }
}
