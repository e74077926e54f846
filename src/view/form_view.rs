//! View model for the whole order screen

use crate::core::event::FormEvent;
use crate::core::state::FormState;
use crate::models::Pizza;
use crate::utils::{capitalize, format_currency};
use crate::view::topping_picker::{SelectedToppingTag, ToppingList};

/// One entry of the size dropdown
#[derive(Debug, Clone, PartialEq)]
pub struct SizeOption {
    /// Identifier reported on selection
    pub id: u32,
    /// Capitalized display label
    pub label: String,
    /// Whether this option is the current selection
    pub selected: bool,
}

impl SizeOption {
    /// The event produced by picking this option
    pub fn select_event(&self) -> FormEvent {
        FormEvent::SizeSelected { id: self.id }
    }
}

/// One pizza already added to the order
#[derive(Debug, Clone, PartialEq)]
pub struct PizzaRow {
    /// Position in the pizza list
    pub index: usize,
    /// Readable summary, e.g. `Large: cheese, ham`
    pub description: String,
    /// Formatted total for this pizza
    pub total_label: String,
}

impl PizzaRow {
    /// Builds a row for one added pizza
    pub fn new(index: usize, pizza: &Pizza) -> Self {
        let toppings = pizza
            .toppings
            .iter()
            .map(|t| t.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let description = if toppings.is_empty() {
            capitalize(&pizza.size.name)
        } else {
            format!("{}: {}", capitalize(&pizza.size.name), toppings)
        };

        Self {
            index,
            description,
            total_label: format_currency(pizza.total()),
        }
    }

    /// The event produced by this row's remove control
    pub fn remove_event(&self) -> FormEvent {
        FormEvent::PizzaRemoved { index: self.index }
    }
}

/// Everything a renderer needs to draw the order screen
///
/// Derived fresh from the state on every render; holds no state of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    /// Current first-name input value
    pub first_name: String,
    /// Current last-name input value
    pub last_name: String,
    /// The size dropdown entries
    pub size_options: Vec<SizeOption>,
    /// Price label for the selected size
    pub size_price_label: String,
    /// Tags for the toppings chosen so far
    pub selected_toppings: Vec<SelectedToppingTag>,
    /// The topping picker
    pub topping_list: ToppingList,
    /// Rows for the pizzas added so far
    pub pizza_rows: Vec<PizzaRow>,
    /// Whether the submit control and order total are shown at all
    pub show_order_block: bool,
    /// Formatted order total
    pub order_total_label: String,
    /// Banner message when a submission error is visible
    pub error_banner: Option<String>,
}

impl FormView {
    /// Projects the current form state into a renderable view
    pub fn from_state(state: &FormState) -> Self {
        let size_options = state
            .sizes
            .iter()
            .map(|size| SizeOption {
                id: size.id,
                label: capitalize(&size.name),
                selected: size.id == state.selected_size.id,
            })
            .collect();

        let selected_toppings = state
            .selected_toppings
            .iter()
            .enumerate()
            .map(|(index, topping)| SelectedToppingTag::new(index, topping))
            .collect();

        let pizza_rows = state
            .pizzas
            .iter()
            .enumerate()
            .map(|(index, pizza)| PizzaRow::new(index, pizza))
            .collect();

        Self {
            first_name: state.first_name.clone(),
            last_name: state.last_name.clone(),
            size_options,
            size_price_label: format_currency(state.size_price()),
            selected_toppings,
            topping_list: ToppingList::new("Select your toppings:", &state.toppings),
            pizza_rows,
            show_order_block: state.can_submit(),
            order_total_label: format_currency(state.order_total()),
            error_banner: state.error.is_on.then(|| state.error.message.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::event::NameField;
    use crate::models::{Catalog, Size, Topping};
    use rust_decimal_macros::dec;

    fn loaded_state() -> FormState {
        let mut state = FormState::new();
        state.apply(FormEvent::CatalogLoaded(Catalog::new(
            vec![
                Size::new(1, "small", dec!(5.00)),
                Size::new(2, "large", dec!(9.00)),
            ],
            vec![Topping::new(1, "cheese", dec!(1.00))],
        )));
        state
    }

    #[test]
    fn test_order_block_hidden_without_pizzas() {
        let mut state = loaded_state();

        let view = FormView::from_state(&state);
        assert!(!view.show_order_block);

        state.apply(FormEvent::PizzaAdded);
        let view = FormView::from_state(&state);
        assert!(view.show_order_block);
        assert_eq!(view.order_total_label, "$5.00");
    }

    #[test]
    fn test_size_options_are_capitalized_and_marked() {
        let mut state = loaded_state();
        state.apply(FormEvent::SizeSelected { id: 2 });

        let view = FormView::from_state(&state);

        assert_eq!(view.size_options[0].label, "Small");
        assert_eq!(view.size_options[1].label, "Large");
        assert!(!view.size_options[0].selected);
        assert!(view.size_options[1].selected);
        assert_eq!(view.size_price_label, "$9.00");
    }

    #[test]
    fn test_name_inputs_mirror_state() {
        // The old form suppressed re-renders while a name field changed;
        // the view must always show the latest keystroke.
        let mut state = loaded_state();
        state.apply(FormEvent::FieldChanged {
            field: NameField::FirstName,
            value: "Ada".to_string(),
        });

        let view = FormView::from_state(&state);

        assert_eq!(view.first_name, "Ada");
        assert_eq!(view.last_name, "");
    }

    #[test]
    fn test_pizza_row_description_and_remove_event() {
        let mut state = loaded_state();
        state.apply(FormEvent::SizeSelected { id: 2 });
        state.apply(FormEvent::ToppingSelected { id: 1 });
        state.apply(FormEvent::PizzaAdded);

        let view = FormView::from_state(&state);
        let row = &view.pizza_rows[0];

        assert_eq!(row.description, "Large: cheese");
        assert_eq!(row.total_label, "$10.00");
        assert_eq!(row.remove_event(), FormEvent::PizzaRemoved { index: 0 });
    }

    #[test]
    fn test_error_banner_visibility() {
        let mut state = loaded_state();
        assert_eq!(FormView::from_state(&state).error_banner, None);

        state.apply(FormEvent::SubmissionFailed {
            message: "Invalid address".to_string(),
        });
        assert_eq!(
            FormView::from_state(&state).error_banner,
            Some("Invalid address".to_string())
        );

        state.apply(FormEvent::ErrorDismissed);
        assert_eq!(FormView::from_state(&state).error_banner, None);
    }
}
