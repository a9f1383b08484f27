use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{AppError, Quantity};

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Lifecycle of a donor's request: `pending → accepted → completed`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DonationStatus {
    Pending,
    Accepted,
    Completed,
}

impl DonationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DonationStatus::Pending => "pending",
            DonationStatus::Accepted => "accepted",
            DonationStatus::Completed => "completed",
        }
    }

    /// Position in the lifecycle. Nothing enforces forward-only moves;
    /// callers that care can compare ranks.
    pub fn rank(&self) -> u8 {
        match self {
            DonationStatus::Pending => 0,
            DonationStatus::Accepted => 1,
            DonationStatus::Completed => 2,
        }
    }

    pub fn is_active(&self) -> bool {
        *self != DonationStatus::Completed
    }
}

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// A food pickup request as the donor sees it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DonationRequest {
    pub id: String,
    pub food_type: String,
    pub quantity: Quantity,
    pub location: String,
    /// Free text; the form submits `YYYY-MM-DDTHH:MM` or nothing.
    pub pickup_time: String,
    pub status: DonationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volunteer: Option<String>,
}

// ---------------------------------------------------------------------------
// Draft
// ---------------------------------------------------------------------------

/// The "Post Request" form contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Validate)]
pub struct NewDonationRequest {
    #[validate(length(min = 1, message = "Food type is required"))]
    pub food_type: String,
    #[validate(length(min = 1, message = "Quantity is required"))]
    pub quantity: String,
    #[validate(length(min = 1, message = "Pickup location is required"))]
    pub location: String,
    #[serde(default)]
    pub pickup_time: String,
    /// Shown on the form only; not carried onto the posted record.
    #[serde(default)]
    pub description: String,
}

impl NewDonationRequest {
    /// True once food type, quantity and location are filled in.
    /// The submit button stays disabled until then.
    pub fn is_complete(&self) -> bool {
        !self.food_type.trim().is_empty()
            && !self.quantity.trim().is_empty()
            && !self.location.trim().is_empty()
    }

    fn trimmed(&self) -> Self {
        Self {
            food_type: self.food_type.trim().to_string(),
            quantity: self.quantity.trim().to_string(),
            location: self.location.trim().to_string(),
            pickup_time: self.pickup_time.trim().to_string(),
            description: self.description.trim().to_string(),
        }
    }

    /// Run the required-field rules and parse the quantity.
    ///
    /// All field messages are collected into one error so the form can show
    /// them together.
    fn check(&self) -> Result<Quantity, AppError> {
        let required = self.validate().err().map(AppError::from);
        match (required, Quantity::parse(&self.quantity)) {
            (None, Ok(quantity)) => Ok(quantity),
            (None, Err(parse)) => Err(parse),
            (Some(err), Ok(_)) => Err(err),
            (Some(err), Err(parse)) => Err(err.merge_fields(parse)),
        }
    }
}

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// The donor dashboard's list of requests, newest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DonorBoard {
    requests: Vec<DonationRequest>,
}

impl DonorBoard {
    pub fn new(requests: Vec<DonationRequest>) -> Self {
        Self { requests }
    }

    pub fn all(&self) -> &[DonationRequest] {
        &self.requests
    }

    /// The first `n` requests (the overview's "Recent Food Requests").
    pub fn recent(&self, n: usize) -> &[DonationRequest] {
        &self.requests[..n.min(self.requests.len())]
    }

    /// Requests that are not completed yet.
    pub fn active_count(&self) -> usize {
        self.requests.iter().filter(|r| r.status.is_active()).count()
    }

    pub fn get(&self, id: &str) -> Option<&DonationRequest> {
        self.requests.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Validate `draft` and prepend it as a new `pending` request.
    ///
    /// The id is `now` in epoch milliseconds, bumped until it is unused.
    /// On error the board is left untouched.
    pub fn post_request(
        &mut self,
        draft: &NewDonationRequest,
        now: DateTime<Utc>,
    ) -> Result<&DonationRequest, AppError> {
        let draft = draft.trimmed();
        let quantity = draft.check()?;
        let id = self.next_id(now);

        self.requests.insert(
            0,
            DonationRequest {
                id,
                food_type: draft.food_type,
                quantity,
                location: draft.location,
                pickup_time: draft.pickup_time,
                status: DonationStatus::Pending,
                volunteer: None,
            },
        );
        self.requests
            .first()
            .ok_or_else(|| AppError::internal("request list empty after insert"))
    }

    fn next_id(&self, now: DateTime<Utc>) -> String {
        let mut candidate = now.timestamp_millis();
        loop {
            let id = candidate.to_string();
            if self.get(&id).is_none() {
                return id;
            }
            tracing::debug!(id = %id, "request id taken, bumping");
            candidate += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppErrorKind;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn draft(food: &str, qty: &str, loc: &str) -> NewDonationRequest {
        NewDonationRequest {
            food_type: food.into(),
            quantity: qty.into(),
            location: loc.into(),
            ..Default::default()
        }
    }

    fn at_millis(ms: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(ms).single().unwrap()
    }

    #[test]
    fn status_rank_follows_lifecycle() {
        let ranks: Vec<u8> = [
            DonationStatus::Pending,
            DonationStatus::Accepted,
            DonationStatus::Completed,
        ]
        .iter()
        .map(|s| s.rank())
        .collect();
        assert_eq!(ranks, vec![0, 1, 2]);
        assert!(DonationStatus::Accepted.is_active());
        assert!(!DonationStatus::Completed.is_active());
    }

    #[test]
    fn is_complete_ignores_optional_fields_and_whitespace() {
        assert!(draft("Rice", "10 servings", "X").is_complete());
        assert!(!draft("Rice", "   ", "X").is_complete());
        assert!(!draft("", "10 servings", "X").is_complete());
    }

    #[test]
    fn post_prepends_pending_request() {
        let mut board = DonorBoard::new(vec![]);
        let posted = board
            .post_request(&draft(" Rice ", "10 servings", "X"), at_millis(1_718_550_000_000))
            .unwrap()
            .clone();
        assert_eq!(posted.id, "1718550000000");
        assert_eq!(posted.food_type, "Rice");
        assert_eq!(posted.quantity, Quantity::new(10, "servings"));
        assert_eq!(posted.status, DonationStatus::Pending);
        assert_eq!(posted.volunteer, None);
        assert_eq!(board.all()[0], posted);
    }

    #[test]
    fn id_bumps_past_existing_ids() {
        let mut board = DonorBoard::new(vec![]);
        let now = at_millis(5_000);
        board.post_request(&draft("A", "1 kg", "X"), now).unwrap();
        board.post_request(&draft("B", "2 kg", "X"), now).unwrap();
        board.post_request(&draft("C", "3 kg", "X"), now).unwrap();
        let ids: Vec<&str> = board.all().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["5002", "5001", "5000"]);
    }

    #[test]
    fn missing_fields_reported_per_field() {
        let mut board = DonorBoard::default();
        let err = board
            .post_request(&draft("", "", "  "), at_millis(1))
            .unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(err.field("food_type"), Some("Food type is required"));
        assert_eq!(err.field("quantity"), Some("Quantity is required"));
        assert_eq!(err.field("location"), Some("Pickup location is required"));
        assert!(board.is_empty());
    }

    #[test]
    fn unparseable_quantity_is_a_field_error() {
        let mut board = DonorBoard::default();
        let err = board
            .post_request(&draft("Rice", "lots", "X"), at_millis(1))
            .unwrap_err();
        assert!(err.field("quantity").unwrap().starts_with("Quantity must start"));
        assert_eq!(err.field("food_type"), None);
        assert!(board.is_empty());
    }

    #[test]
    fn quantity_error_merges_with_other_missing_fields() {
        let err = draft("", "lots", "X").check().unwrap_err();
        assert!(err.field("food_type").is_some());
        assert!(err.field("quantity").is_some());
    }

    #[test]
    fn recent_and_active_count() {
        let mut board = DonorBoard::default();
        for (i, name) in ["A", "B", "C", "D"].iter().enumerate() {
            board
                .post_request(&draft(name, "1 kg", "X"), at_millis(i as i64))
                .unwrap();
        }
        assert_eq!(board.recent(3).len(), 3);
        assert_eq!(board.recent(3)[0].food_type, "D");
        assert_eq!(board.recent(10).len(), 4);
        assert_eq!(board.active_count(), 4);
    }
}
