//! API
//!
//! HTTP client functions for the two upstream data sources.

pub mod client;

pub use client::*;
