use crate::models::{Size, Topping};
use serde::{Deserialize, Serialize};

/// The catalog of available sizes and toppings served by the backend
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Catalog {
    /// Sizes offered, in the order the backend returns them
    pub sizes: Vec<Size>,
    /// Toppings offered, in the order the backend returns them
    pub toppings: Vec<Topping>,
}

impl Catalog {
    /// Creates a new Catalog
    pub fn new(sizes: Vec<Size>, toppings: Vec<Topping>) -> Self {
        Self { sizes, toppings }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_catalog_deserialization() {
        let json = r#"{
            "sizes": [{"id": 1, "name": "small", "price": 5.0}],
            "toppings": [{"id": 1, "name": "cheese", "price": 1.0}]
        }"#;

        let catalog: Catalog = serde_json::from_str(json).unwrap();

        assert_eq!(catalog.sizes.len(), 1);
        assert_eq!(catalog.sizes[0].name, "small");
        assert_eq!(catalog.sizes[0].price, dec!(5.0));
        assert_eq!(catalog.toppings[0].name, "cheese");
    }
}
