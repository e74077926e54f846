//! Stateless view models for the order screen
//!
//! Nothing in here holds state of its own; every type is derived from the
//! current [`crate::FormState`] and reports user intent back as
//! [`crate::FormEvent`] values.

mod form_view;
mod topping_picker;

pub use form_view::{FormView, PizzaRow, SizeOption};
pub use topping_picker::{SelectedToppingTag, ToppingList, ToppingTile};
