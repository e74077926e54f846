//! Core order-form logic and data structures

pub mod error;
pub mod event;
pub mod request;
pub mod state;
