//! Client configuration

/// Endpoints and header names used by the order client
///
/// The defaults match a same-origin deployment where the frontend is served
/// next to the ordering backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the backend, without a trailing slash
    pub base_url: String,
    /// Path of the catalog endpoint
    pub catalog_path: String,
    /// Path of the order-creation endpoint
    pub order_path: String,
    /// Where the browser should navigate after a successful order
    pub confirm_path: String,
    /// Name of the cookie carrying the anti-forgery token
    pub csrf_cookie: String,
    /// Name of the header the token is sent back in
    pub csrf_header: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            catalog_path: "/api/order".to_string(),
            order_path: "/order".to_string(),
            confirm_path: "/order/confirm".to_string(),
            csrf_cookie: "csrftoken".to_string(),
            csrf_header: "X-CSRFTOKEN".to_string(),
        }
    }
}

impl Config {
    /// Creates a configuration with the default paths
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the backend base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the catalog endpoint path
    pub fn with_catalog_path(mut self, path: impl Into<String>) -> Self {
        self.catalog_path = path.into();
        self
    }

    /// Sets the order-creation endpoint path
    pub fn with_order_path(mut self, path: impl Into<String>) -> Self {
        self.order_path = path.into();
        self
    }

    /// Sets the post-order navigation target
    pub fn with_confirm_path(mut self, path: impl Into<String>) -> Self {
        self.confirm_path = path.into();
        self
    }

    /// Sets the name of the anti-forgery cookie
    pub fn with_csrf_cookie(mut self, name: impl Into<String>) -> Self {
        self.csrf_cookie = name.into();
        self
    }

    /// Sets the header the anti-forgery token is sent in
    pub fn with_csrf_header(mut self, name: impl Into<String>) -> Self {
        self.csrf_header = name.into();
        self
    }

    /// Full URL of the catalog endpoint
    pub fn catalog_url(&self) -> String {
        format!("{}{}", self.base_url, self.catalog_path)
    }

    /// Full URL of the order-creation endpoint
    pub fn order_url(&self) -> String {
        format!("{}{}", self.base_url, self.order_path)
    }
}
