use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents a topping that can be added to a pizza
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Topping {
    /// Unique identifier assigned by the backend
    pub id: u32,
    /// Display name of the topping (e.g., "mushrooms")
    pub name: String,
    /// Price added per portion of this topping
    pub price: Decimal,
}

impl Topping {
    /// Creates a new Topping
    pub fn new(id: u32, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}
