use crate::models::{Size, Topping};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents one configured pizza in the order being built
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Pizza {
    /// The chosen size
    pub size: Size,
    /// Toppings on this pizza, in selection order. The same topping may
    /// appear more than once (a double portion).
    pub toppings: Vec<Topping>,
}

impl Pizza {
    /// Creates a new Pizza from a size and a topping list
    pub fn new(size: Size, toppings: Vec<Topping>) -> Self {
        Self { size, toppings }
    }

    /// Total price of this pizza: size price plus the sum of topping prices
    pub fn total(&self) -> Decimal {
        self.size.price + self.toppings.iter().map(|t| t.price).sum::<Decimal>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn large() -> Size {
        Size::new(2, "large", dec!(9.00))
    }

    #[test]
    fn test_total_with_no_toppings() {
        let pizza = Pizza::new(large(), vec![]);

        assert_eq!(pizza.total(), dec!(9.00));
    }

    #[test]
    fn test_total_sums_topping_prices() {
        let pizza = Pizza::new(
            large(),
            vec![
                Topping::new(1, "cheese", dec!(1.00)),
                Topping::new(2, "ham", dec!(4.00)),
            ],
        );

        assert_eq!(pizza.total(), dec!(14.00));
    }

    #[test]
    fn test_duplicate_toppings_count_twice() {
        let cheese = Topping::new(1, "cheese", dec!(1.00));
        let pizza = Pizza::new(large(), vec![cheese.clone(), cheese]);

        assert_eq!(pizza.total(), dec!(11.00));
    }
}
