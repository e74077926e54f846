//! The topping picker: a labeled list of clickable topping tiles

use crate::core::event::FormEvent;
use crate::models::Topping;
use crate::utils::format_currency;

/// One selectable topping tile
#[derive(Debug, Clone, PartialEq)]
pub struct ToppingTile {
    /// Identifier reported when the tile is clicked
    pub id: u32,
    /// Topping name as displayed
    pub name: String,
    /// Formatted price, e.g. `$3.50`
    pub price_label: String,
}

impl ToppingTile {
    /// Builds a tile for one catalog topping
    pub fn from_topping(topping: &Topping) -> Self {
        Self {
            id: topping.id,
            name: topping.name.clone(),
            price_label: format_currency(topping.price),
        }
    }

    /// The single event a click on this tile produces
    pub fn select_event(&self) -> FormEvent {
        FormEvent::ToppingSelected { id: self.id }
    }
}

/// Container laying out the topping tiles under a label
#[derive(Debug, Clone, PartialEq)]
pub struct ToppingList {
    /// Heading shown above the tiles
    pub label: String,
    /// The tiles, in catalog order
    pub tiles: Vec<ToppingTile>,
}

impl ToppingList {
    /// Builds the picker for the catalog toppings
    pub fn new(label: impl Into<String>, toppings: &[Topping]) -> Self {
        Self {
            label: label.into(),
            tiles: toppings.iter().map(ToppingTile::from_topping).collect(),
        }
    }
}

/// A topping already chosen for the pizza in progress, with its remove
/// control
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedToppingTag {
    /// Position in the selected-toppings list
    pub index: usize,
    /// Topping name as displayed
    pub name: String,
}

impl SelectedToppingTag {
    /// Builds the tag for one selected topping
    pub fn new(index: usize, topping: &Topping) -> Self {
        Self {
            index,
            name: topping.name.clone(),
        }
    }

    /// The event produced by clicking the tag's delete control
    pub fn remove_event(&self) -> FormEvent {
        FormEvent::ToppingRemoved { index: self.index }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_tile_formats_price_and_reports_id() {
        let topping = Topping::new(6, "pepperoni", dec!(3.85));
        let tile = ToppingTile::from_topping(&topping);

        assert_eq!(tile.name, "pepperoni");
        assert_eq!(tile.price_label, "$3.85");
        assert_eq!(tile.select_event(), FormEvent::ToppingSelected { id: 6 });
    }

    #[test]
    fn test_list_keeps_catalog_order() {
        let toppings = vec![
            Topping::new(1, "ham", dec!(4.00)),
            Topping::new(2, "olives", dec!(5.75)),
        ];

        let list = ToppingList::new("Select your toppings:", &toppings);

        assert_eq!(list.label, "Select your toppings:");
        assert_eq!(list.tiles[0].name, "ham");
        assert_eq!(list.tiles[1].name, "olives");
    }

    #[test]
    fn test_tag_removes_by_position() {
        let topping = Topping::new(1, "ham", dec!(4.00));
        let tag = SelectedToppingTag::new(3, &topping);

        assert_eq!(tag.remove_event(), FormEvent::ToppingRemoved { index: 3 });
    }
}
