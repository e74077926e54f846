//! HTTP client for the ordering backend

use crate::config::Config;
use crate::core::error::Error;
use crate::models::{Catalog, Order};
use crate::Result;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::StatusCode;
use tracing::debug;

/// Client for the two backend endpoints the form talks to
#[derive(Debug, Clone)]
pub struct OrderClient {
    http: reqwest::Client,
    config: Config,
}

impl OrderClient {
    /// Creates a new client for the given configuration
    pub fn new(config: Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fetches the catalog of sizes and toppings
    pub async fn fetch_catalog(&self) -> Result<Catalog> {
        let url = self.config.catalog_url();
        debug!(%url, "fetching catalog");

        let catalog = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<Catalog>()
            .await?;

        Ok(catalog)
    }

    /// Submits a completed order
    ///
    /// The anti-forgery token travels in the header named by the
    /// configuration. A 200 response yields the backend's confirmation
    /// message; any other status becomes [`Error::Rejected`] carrying the
    /// response body.
    pub async fn place_order(&self, order: &Order, csrf_token: &str) -> Result<String> {
        let url = self.config.order_url();
        debug!(%url, pizzas = order.pizzas.len(), "submitting order");

        let token = HeaderValue::from_str(csrf_token)
            .map_err(|e| Error::Config(format!("invalid CSRF token: {e}")))?;
        let body = serde_json::to_string(order)?;

        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(self.config.csrf_header.as_str(), token)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        interpret_order_response(status, body)
    }
}

/// Maps a submission response to a confirmation message or a rejection
///
/// Kept separate from the request plumbing so the status handling can be
/// tested without a socket.
fn interpret_order_response(status: StatusCode, body: String) -> Result<String> {
    if status == StatusCode::OK {
        Ok(body)
    } else {
        Err(Error::Rejected {
            status: status.as_u16(),
            message: body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_200_yields_confirmation() {
        let result =
            interpret_order_response(StatusCode::OK, "Order #42 created".to_string());

        assert_eq!(result.unwrap(), "Order #42 created");
    }

    #[test]
    fn test_non_200_yields_rejection_with_body() {
        let result = interpret_order_response(
            StatusCode::BAD_REQUEST,
            "Invalid address".to_string(),
        );

        match result {
            Err(Error::Rejected { status, message }) => {
                assert_eq!(status, 400);
                assert_eq!(message, "Invalid address");
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_500_is_a_rejection_too() {
        let result = interpret_order_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "boom".to_string(),
        );

        assert!(matches!(result, Err(Error::Rejected { status: 500, .. })));
    }
}
