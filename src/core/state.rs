//! The order form's state container and its transition function
//!
//! All mutable order-building state lives in [`FormState`]; every change
//! goes through [`FormState::apply`] with a [`FormEvent`]. The reducer is
//! pure apart from logging, so the whole form can be unit tested without a
//! rendered screen or a network.

use crate::core::event::{FormEvent, NameField};
use crate::core::request::RequestPhase;
use crate::models::{Order, Pizza, Size, Topping};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// The dismissible error banner shown after a failed submission
///
/// Dismissing the banner only clears `is_on`; the last message is retained
/// so "dismissed" and "never failed" stay distinguishable.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ErrorBanner {
    /// Message from the most recent failure, empty if none occurred yet
    pub message: String,
    /// Whether the banner is currently visible
    pub is_on: bool,
}

/// State of the order-building form
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FormState {
    /// Customer first name, as currently typed
    pub first_name: String,
    /// Customer last name, as currently typed
    pub last_name: String,
    /// Sizes received from the backend
    pub sizes: Vec<Size>,
    /// The size currently picked in the dropdown; always one of `sizes`
    /// (or the placeholder before the catalog loads)
    pub selected_size: Size,
    /// Toppings received from the backend
    pub toppings: Vec<Topping>,
    /// Toppings chosen for the pizza being configured, in click order.
    /// Duplicates are allowed (a double portion).
    pub selected_toppings: Vec<Topping>,
    /// Pizzas added to the order so far
    pub pizzas: Vec<Pizza>,
    /// The submission error banner
    pub error: ErrorBanner,
    /// Confirmation message from the last accepted submission, kept so a
    /// renderer can show it alongside `submission: Succeeded`
    pub confirmation: Option<String>,
    /// Lifecycle of the catalog fetch
    pub catalog: RequestPhase,
    /// Lifecycle of the most recent order submission
    pub submission: RequestPhase,
}

impl FormState {
    /// Creates the initial placeholder state shown before the catalog loads
    pub fn new() -> Self {
        let placeholder = Size::placeholder();
        Self {
            first_name: String::new(),
            last_name: String::new(),
            sizes: vec![placeholder.clone()],
            selected_size: placeholder,
            toppings: Vec::new(),
            selected_toppings: Vec::new(),
            pizzas: Vec::new(),
            error: ErrorBanner::default(),
            confirmation: None,
            catalog: RequestPhase::Idle,
            submission: RequestPhase::Idle,
        }
    }

    /// Applies one event to the state
    ///
    /// Lookup misses (unknown size or topping id, out-of-range index) are
    /// silent no-ops: the identifiers always originate from rendered
    /// options, so a miss cannot occur through the UI.
    pub fn apply(&mut self, event: FormEvent) {
        match event {
            FormEvent::FieldChanged { field, value } => match field {
                NameField::FirstName => self.first_name = value,
                NameField::LastName => self.last_name = value,
            },
            FormEvent::SizeSelected { id } => {
                if let Some(size) = self.sizes.iter().find(|s| s.id == id) {
                    self.selected_size = size.clone();
                }
            }
            FormEvent::ToppingSelected { id } => {
                if let Some(topping) = self.toppings.iter().find(|t| t.id == id) {
                    self.selected_toppings.push(topping.clone());
                }
            }
            FormEvent::ToppingRemoved { index } => {
                if index < self.selected_toppings.len() {
                    self.selected_toppings.remove(index);
                }
            }
            FormEvent::PizzaAdded => {
                // Snapshot the selection so later edits do not reach into
                // pizzas that were already added.
                let pizza = Pizza::new(
                    self.selected_size.clone(),
                    self.selected_toppings.clone(),
                );
                self.pizzas.push(pizza);
            }
            FormEvent::PizzaRemoved { index } => {
                if index < self.pizzas.len() {
                    self.pizzas.remove(index);
                }
            }
            FormEvent::CatalogLoaded(catalog) => {
                self.catalog = RequestPhase::Succeeded;
                if let Some(first) = catalog.sizes.first() {
                    self.selected_size = first.clone();
                    self.sizes = catalog.sizes;
                    self.toppings = catalog.toppings;
                } else {
                    // An empty catalog is indistinguishable from a broken
                    // backend; keep the placeholders.
                    warn!("catalog contained no sizes, keeping placeholders");
                }
            }
            FormEvent::CatalogFailed { reason } => {
                // Not surfaced to the user; the form stays usable with
                // placeholder defaults.
                warn!(%reason, "failed to load catalog");
                self.catalog = RequestPhase::Failed;
            }
            FormEvent::SubmissionStarted => {
                self.submission = RequestPhase::Pending;
            }
            FormEvent::SubmissionSucceeded { confirmation } => {
                self.submission = RequestPhase::Succeeded;
                self.confirmation = Some(confirmation);
            }
            FormEvent::SubmissionFailed { message } => {
                self.submission = RequestPhase::Failed;
                self.error = ErrorBanner {
                    message,
                    is_on: true,
                };
            }
            FormEvent::ErrorDismissed => {
                // Keep the message for debugging, only hide the banner.
                self.error.is_on = false;
            }
        }
    }

    /// Price of the currently selected size, for live display
    pub fn size_price(&self) -> Decimal {
        self.selected_size.price
    }

    /// Running total over all pizzas currently in the order
    ///
    /// Recomputed on every call; the lists are small enough that caching
    /// is not worth it.
    pub fn order_total(&self) -> Decimal {
        self.pizzas.iter().map(Pizza::total).sum()
    }

    /// Whether the submit control should be offered at all
    pub fn can_submit(&self) -> bool {
        !self.pizzas.is_empty()
    }

    /// Builds the order to submit from the current state
    pub fn build_order(&self) -> Order {
        Order::new(
            self.first_name.clone(),
            self.last_name.clone(),
            self.pizzas.clone(),
        )
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
