use crate::models::Pizza;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents a complete order as submitted to the backend
///
/// Constructed once at submission time from the current form state and never
/// mutated afterwards; it exists to be serialized into the request body.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Order {
    /// Customer first name
    pub first_name: String,
    /// Customer last name
    pub last_name: String,
    /// The pizzas being ordered
    pub pizzas: Vec<Pizza>,
}

impl Order {
    /// Creates a new Order
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        pizzas: Vec<Pizza>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            pizzas,
        }
    }

    /// Total price across all pizzas in the order
    pub fn total(&self) -> Decimal {
        self.pizzas.iter().map(Pizza::total).sum()
    }
}
