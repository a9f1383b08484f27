use chrono::{DateTime, TimeZone, Utc};
use shared_types::NewDonationRequest;

/// Fixed clock for id assertions: 2024-06-16 12:00:00 UTC.
pub const NOON_MILLIS: i64 = 1_718_539_200_000;

pub fn at_millis(ms: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(ms)
        .single()
        .expect("valid millisecond timestamp")
}

pub fn noon() -> DateTime<Utc> {
    at_millis(NOON_MILLIS)
}

/// A draft with the three required fields set and everything else blank.
pub fn draft(food_type: &str, quantity: &str, location: &str) -> NewDonationRequest {
    NewDonationRequest {
        food_type: food_type.to_string(),
        quantity: quantity.to_string(),
        location: location.to_string(),
        ..Default::default()
    }
}
