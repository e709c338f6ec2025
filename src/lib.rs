//! Listing shell — session and listing-wizard core for a listings marketplace.

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod session;
pub mod store;
pub mod wizard;
