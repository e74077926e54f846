//! HTTP client and the form controller that drives it

pub mod client;
pub mod form;

pub use client::OrderClient;
pub use form::OrderForm;
