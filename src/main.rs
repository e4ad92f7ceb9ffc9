//! CallDash
//!
//! Call compliance analysis dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Call analysis reports with compliance score, violations, and
//!   recommendations
//! - Sortable analysis history table
//! - Customer profile listing
//! - Emotion and score distribution charts
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles
//! to WebAssembly. It is a pure presentational client: it fetches
//! already-analyzed records from two independent HTTP endpoints and
//! renders ordered and aggregated views of them, persisting nothing but
//! the endpoint URLs.

use leptos::*;

mod api;
mod app;
mod components;
mod core;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
