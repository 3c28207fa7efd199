//! WhatsApp deep links.
//!
//! The destination parses the query string literally, so the message is
//! encoded exactly once with URI-component rules.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::availability::describe_availability;
use crate::catalog::{ProductDetail, ProductStatus, ProductSummary, SiteSettings};
use crate::message::{compose_message, resolve_base_message, MessageDetail};
use crate::site::SiteUrl;

const WHATSAPP_BASE: &str = "https://wa.me/";

/// Characters left unescaped by URI-component encoding.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// A phone number reduced to its ASCII digits, never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneDigits(String);

impl PhoneDigits {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Strips everything but ASCII digits. `"+55 (11) 99999-9999"` and
/// `"5511999999999"` normalize identically. Returns `None` when no digit is
/// left.
#[must_use]
pub fn normalize_phone(raw: &str) -> Option<PhoneDigits> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        None
    } else {
        Some(PhoneDigits(digits))
    }
}

/// `https://wa.me/<digits>?text=<encoded message>`, or `None` if the phone
/// has no digits.
#[must_use]
pub fn build_contact_url(phone_raw: &str, message: &str) -> Option<String> {
    let phone = normalize_phone(phone_raw)?;
    let text = utf8_percent_encode(message, URI_COMPONENT);
    Some(format!("{WHATSAPP_BASE}{}?text={text}", phone.as_str()))
}

/// Bare chat link with no pre-filled message, for site-wide "talk to us"
/// links.
#[must_use]
pub fn build_chat_url(phone_raw: &str) -> Option<String> {
    normalize_phone(phone_raw).map(|phone| format!("{WHATSAPP_BASE}{}", phone.as_str()))
}

/// State of a contact button. Serializes as `{"enabled": true, "url": ...}`
/// or `{"enabled": false}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactAction {
    Enabled { url: String },
    Disabled,
}

#[derive(Serialize)]
struct ContactActionRepr<'a> {
    enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'a str>,
}

impl Serialize for ContactAction {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ContactActionRepr {
            enabled: self.is_enabled(),
            url: self.url(),
        }
        .serialize(serializer)
    }
}

impl ContactAction {
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Enabled { url } => Some(url),
            Self::Disabled => None,
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled { .. })
    }
}

/// The product fields a contact link depends on.
#[derive(Debug, Clone, Copy)]
pub struct ContactSubject<'a> {
    pub title: &'a str,
    pub slug: &'a str,
    pub status: &'a ProductStatus,
    pub quantity_available: Option<u32>,
    pub starting_price: Option<Decimal>,
    pub whatsapp_message: Option<&'a str>,
}

impl<'a> From<&'a ProductSummary> for ContactSubject<'a> {
    fn from(p: &'a ProductSummary) -> Self {
        Self {
            title: &p.title,
            slug: &p.slug,
            status: &p.status,
            quantity_available: p.quantity_available,
            starting_price: p.starting_price,
            whatsapp_message: p.whatsapp_message.as_deref(),
        }
    }
}

impl<'a> From<&'a ProductDetail> for ContactSubject<'a> {
    fn from(p: &'a ProductDetail) -> Self {
        Self {
            title: &p.title,
            slug: &p.slug,
            status: &p.status,
            quantity_available: p.quantity_available,
            starting_price: p.starting_price,
            whatsapp_message: p.whatsapp_message.as_deref(),
        }
    }
}

/// Contact button for a product.
///
/// Enabled only when the availability policy allows contact and the site
/// settings hold a phone with at least one digit. Missing settings disable
/// every product.
#[must_use]
pub fn contact_for_product(
    settings: Option<&SiteSettings>,
    site: &SiteUrl,
    product: &ContactSubject<'_>,
) -> ContactAction {
    let Some(settings) = settings else {
        return ContactAction::Disabled;
    };
    if !describe_availability(product.status, product.quantity_available).contact_enabled {
        return ContactAction::Disabled;
    }
    let Some(phone) = settings.whatsapp_phone.as_deref() else {
        return ContactAction::Disabled;
    };

    let base = resolve_base_message(
        product.whatsapp_message,
        &settings.whatsapp_default_message,
    );
    let message = compose_message(
        site,
        base,
        product.title,
        MessageDetail::Full {
            slug: product.slug,
            price: product.starting_price,
        },
    );

    build_contact_url(phone, &message).map_or(ContactAction::Disabled, |url| {
        ContactAction::Enabled { url }
    })
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
