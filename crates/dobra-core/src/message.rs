//! Composition of the pre-filled contact message sent through WhatsApp.
//!
//! The chat app renders the text exactly as received: no markdown, and every
//! line break is significant. Line order is part of the contract.

use rust_decimal::Decimal;

use crate::price::format_brl;
use crate::site::SiteUrl;

/// How much product context goes into a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageDetail<'a> {
    /// Base message and product title only.
    Minimal,
    /// Title, canonical product link and, when known, the starting price.
    Full {
        slug: &'a str,
        price: Option<Decimal>,
    },
}

/// Picks the product override when it has any non-whitespace content,
/// otherwise the site default.
#[must_use]
pub fn resolve_base_message<'a>(product_override: Option<&'a str>, site_default: &'a str) -> &'a str {
    product_override
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .unwrap_or(site_default)
}

/// Builds the outbound message for a product.
///
/// ```text
/// <base>
///
/// Produto: <title>
/// Ver peça: <site>/produtos/<slug>
/// Preço no site: A partir de R$ <price>
/// ```
///
/// The link line is only present in [`MessageDetail::Full`], the price line
/// only when a price is given.
#[must_use]
pub fn compose_message(
    site: &SiteUrl,
    base_message: &str,
    product_title: &str,
    detail: MessageDetail<'_>,
) -> String {
    let mut text = compose_minimal_message(base_message, product_title);
    if let MessageDetail::Full { slug, price } = detail {
        text.push_str("\nVer peça: ");
        text.push_str(&site.product_url(slug));
        if let Some(price) = price {
            text.push_str("\nPreço no site: A partir de R$ ");
            text.push_str(&format_brl(price));
        }
    }
    text
}

/// Base message followed by the product title, with no link or price.
#[must_use]
pub fn compose_minimal_message(base_message: &str, product_title: &str) -> String {
    format!("{base_message}\n\nProduto: {product_title}")
}
