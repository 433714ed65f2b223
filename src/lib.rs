//! engg.pk content portal
//!
//! Read-only content verticals for an engineering community, each listing page
//! searchable and filterable through one shared query model.

pub mod catalog;
pub mod config;
pub mod errors;
pub mod models;
pub mod query;
pub mod routes;
pub mod store;
pub mod views;

pub use config::Config;
pub use errors::AppError;
pub use models::ContentStore;
pub use query::{FilteredView, Listing, QueryState, ALL};
pub use routes::{Route, ROUTES};
pub use views::{build_page, render, OutputFormat, Page, PageRequest};

#[cfg(test)]
mod tests;
