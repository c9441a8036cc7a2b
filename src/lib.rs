//! Terminal search client for the Spotify catalog.
//!
//! Type a query, pick a category, browse the results and open one in the
//! browser. The binary in `main.rs` wires these modules to a terminal.

pub mod auth;
pub mod config;
pub mod controller;
pub mod logging;
pub mod model;
pub mod opener;
pub mod view;

#[cfg(test)]
mod test_support;
