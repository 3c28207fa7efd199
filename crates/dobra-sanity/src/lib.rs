//! Read-only client for the Sanity content lake backing the storefront.
//!
//! Queries are GROQ strings sent to the HTTP query API. Responses are
//! deserialized into loosely-typed raw records ([`types`]) and projected into
//! the `dobra-core` domain model ([`project`]), where every default is
//! applied once.

pub mod cache;
pub mod client;
pub mod error;
pub mod project;
pub mod queries;
pub mod types;

pub use cache::ResponseCache;
pub use client::SanityClient;
pub use error::SanityError;
pub use project::{
    project_category, project_product_detail, project_product_summaries, project_product_summary,
    project_site_settings,
};
