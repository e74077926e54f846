//! Events driving the order-form state

use crate::models::Catalog;

/// A name input field on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    /// The customer's first name
    FirstName,
    /// The customer's last name
    LastName,
}

/// Everything that can happen to the order form, from user interaction or
/// from the completion of a network request
///
/// Child components report intent upward as events rather than mutating
/// state themselves; the reducer in [`crate::core::state`] is the single
/// place where state changes.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// The user edited one of the name inputs
    FieldChanged {
        /// Which field changed
        field: NameField,
        /// The input's current value
        value: String,
    },
    /// The user picked a size from the dropdown
    SizeSelected {
        /// Identifier of the chosen size
        id: u32,
    },
    /// The user clicked a topping tile
    ToppingSelected {
        /// Identifier of the clicked topping
        id: u32,
    },
    /// The user removed a topping from the current selection
    ToppingRemoved {
        /// Position in the selected-toppings list
        index: usize,
    },
    /// The user clicked "Add Pizza"
    PizzaAdded,
    /// The user removed a pizza from the order
    PizzaRemoved {
        /// Position in the pizza list
        index: usize,
    },
    /// The catalog fetch completed successfully
    CatalogLoaded(Catalog),
    /// The catalog fetch failed
    CatalogFailed {
        /// Failure detail, kept for logging
        reason: String,
    },
    /// An order submission was issued
    SubmissionStarted,
    /// The backend accepted the order
    SubmissionSucceeded {
        /// Confirmation message from the response body
        confirmation: String,
    },
    /// The backend rejected the order, or the request never completed
    SubmissionFailed {
        /// Error message to surface in the banner
        message: String,
    },
    /// The user dismissed the error banner
    ErrorDismissed,
}
