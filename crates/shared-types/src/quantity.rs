use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::AppError;

/// An amount of food with its unit, e.g. `50 servings` or `10 kg`.
///
/// Parsed once from the free-text form input so aggregations add plain
/// integers instead of re-parsing display text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Quantity {
    pub amount: u32,
    /// May be empty for bare numbers.
    pub unit: String,
}

impl Quantity {
    pub fn new(amount: u32, unit: impl Into<String>) -> Self {
        Self {
            amount,
            unit: unit.into(),
        }
    }

    /// Parse `"<number> <unit>"`.
    ///
    /// The leading run of ASCII digits is the amount and the trimmed rest is
    /// the unit. Input without a leading integer is rejected, and so are
    /// decimals and digit groups (`2.5 kg`, `1,000 servings`).
    pub fn parse(text: &str) -> Result<Self, AppError> {
        let text = text.trim();
        let digits_end = text
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(text.len());
        if digits_end == 0 {
            return Err(AppError::invalid_field(
                "quantity",
                "Quantity must start with a number, e.g. 50 servings",
            ));
        }
        let mut rest = text[digits_end..].chars();
        if let (Some('.' | ','), Some(next)) = (rest.next(), rest.next()) {
            if next.is_ascii_digit() {
                return Err(AppError::invalid_field(
                    "quantity",
                    "Quantity must be a whole number, e.g. 3 kg",
                ));
            }
        }
        let amount = text[..digits_end].parse::<u32>().map_err(|_| {
            AppError::invalid_field("quantity", "Quantity is too large")
        })?;
        Ok(Self::new(amount, text[digits_end..].trim()))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.is_empty() {
            write!(f, "{}", self.amount)
        } else {
            write!(f, "{} {}", self.amount, self.unit)
        }
    }
}

impl FromStr for Quantity {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Quantity::parse(s)
    }
}

// Stored as display text so snapshots stay readable.
impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Quantity::parse(&text).map_err(|e| serde::de::Error::custom(e.message))
    }
}
