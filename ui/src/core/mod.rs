//! Rating documents and the computations behind the tables.
//!
//! Nothing in here depends on Dioxus; components in `tables` and `views`
//! consume it.

pub mod config;
pub mod cost;
pub mod derive;
pub mod fetch;
pub mod format;
pub mod links;
pub mod model;
pub mod rows;
pub mod table;
