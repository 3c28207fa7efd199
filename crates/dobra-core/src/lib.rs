//! Domain model and pure catalog rules for the Dobra storefront.
//!
//! Nothing in this crate performs I/O apart from reading configuration from
//! the process environment. Availability, message composition and contact
//! links are plain functions over values projected from the CMS.

pub mod app_config;
pub mod availability;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod message;
pub mod price;
pub mod site;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use availability::{describe_availability, Availability};
pub use catalog::{
    Category, CategoryRef, ImageRef, ProductDetail, ProductStatus, ProductSummary, RichTextBlock,
    RichTextSpan, Seo, SiteSettings, DEFAULT_WHATSAPP_MESSAGE,
};
pub use config::{load_app_config, load_app_config_from_env};
pub use contact::{
    build_chat_url, build_contact_url, contact_for_product, normalize_phone, ContactAction,
    ContactSubject, PhoneDigits,
};
pub use message::{compose_message, compose_minimal_message, resolve_base_message, MessageDetail};
pub use price::{format_brl, price_label};
pub use site::SiteUrl;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
