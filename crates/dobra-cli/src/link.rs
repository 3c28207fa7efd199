//! Offline contact-link construction for the `link` command.

use dobra_core::{build_contact_url, compose_message, compose_minimal_message, MessageDetail, SiteUrl};
use rust_decimal::Decimal;

/// Arguments of the `link` command.
#[derive(Debug)]
pub(crate) struct LinkRequest<'a> {
    pub phone: &'a str,
    pub message: &'a str,
    pub title: Option<&'a str>,
    pub slug: Option<&'a str>,
    pub price: Option<Decimal>,
}

/// Builds the contact URL for `request`.
///
/// Without a title the message is sent as-is; with a title but no slug the
/// minimal form is used; with a slug the full form, including the price when
/// given.
///
/// # Errors
///
/// Returns an error if the phone contains no digits.
pub(crate) fn build_link(site: &SiteUrl, request: &LinkRequest<'_>) -> anyhow::Result<String> {
    let text = match (request.title, request.slug) {
        (None, _) => request.message.to_string(),
        (Some(title), None) => compose_minimal_message(request.message, title),
        (Some(title), Some(slug)) => compose_message(
            site,
            request.message,
            title,
            MessageDetail::Full {
                slug,
                price: request.price,
            },
        ),
    };

    build_contact_url(request.phone, &text)
        .ok_or_else(|| anyhow::anyhow!("phone '{}' contains no digits", request.phone))
}
