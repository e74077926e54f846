//! The order form controller
//!
//! [`OrderForm`] ties the pure state reducer to the HTTP client. The
//! embedding UI forwards user events through [`OrderForm::handle`], renders
//! from [`OrderForm::state`], and calls the async methods at mount and
//! submit time. Because both async methods borrow the form mutably, tearing
//! the form down drops any in-flight future with it; a completion can never
//! mutate a form that no longer exists.

use crate::api::client::OrderClient;
use crate::config::Config;
use crate::core::event::FormEvent;
use crate::core::state::FormState;
use tracing::{info, warn};

/// Root controller owning all order-building state
#[derive(Debug)]
pub struct OrderForm {
    state: FormState,
    client: OrderClient,
}

impl OrderForm {
    /// Creates a form in its placeholder state
    pub fn new(config: Config) -> Self {
        Self {
            state: FormState::new(),
            client: OrderClient::new(config),
        }
    }

    /// Read access to the current form state, for rendering
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Applies one user-interaction event
    pub fn handle(&mut self, event: FormEvent) {
        self.state.apply(event);
    }

    /// Loads the catalog and populates the form
    ///
    /// A failed load is logged and leaves the placeholder defaults in
    /// place; no error is surfaced for this path.
    pub async fn mount(&mut self) {
        match self.client.fetch_catalog().await {
            Ok(catalog) => self.state.apply(FormEvent::CatalogLoaded(catalog)),
            Err(e) => self.state.apply(FormEvent::CatalogFailed {
                reason: e.to_string(),
            }),
        }
    }

    /// Builds the order from the current state and submits it
    ///
    /// Returns the path the browser should navigate to when the backend
    /// accepts the order. On any failure the error banner is raised and
    /// `None` is returned; there is no third outcome.
    pub async fn place_order(&mut self, csrf_token: &str) -> Option<String> {
        let order = self.state.build_order();
        self.state.apply(FormEvent::SubmissionStarted);

        match self.client.place_order(&order, csrf_token).await {
            Ok(confirmation) => {
                info!(%confirmation, "order accepted");
                self.state.apply(FormEvent::SubmissionSucceeded { confirmation });
                Some(self.client.config().confirm_path.clone())
            }
            Err(e) => {
                warn!(error = %e, "order submission failed");
                self.state.apply(FormEvent::SubmissionFailed {
                    message: e.banner_message(),
                });
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::event::NameField;

    #[test]
    fn test_events_reach_the_reducer() {
        let mut form = OrderForm::new(Config::new());

        form.handle(FormEvent::FieldChanged {
            field: NameField::FirstName,
            value: "Ada".to_string(),
        });

        assert_eq!(form.state().first_name, "Ada");
    }
}
