pub mod api;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;
pub mod view;

/// Re-export important types for easier access
pub use crate::models::{Catalog, Order, Pizza, Size, Topping};

pub use crate::api::{OrderClient, OrderForm};
pub use crate::config::Config;
pub use crate::core::error::Error;
pub use crate::core::event::{FormEvent, NameField};
pub use crate::core::state::FormState;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
