use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents a pizza size offered by the kitchen
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Size {
    /// Unique identifier assigned by the backend
    pub id: u32,
    /// Display name of the size (e.g., "small", "family")
    pub name: String,
    /// Base price of a pizza of this size
    pub price: Decimal,
}

impl Size {
    /// Creates a new Size
    pub fn new(id: u32, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }

    /// Placeholder size shown before the catalog has loaded
    pub fn placeholder() -> Self {
        Self::new(1, "", Decimal::ZERO)
    }
}
