//! Read-only catalog listings against the CMS.

use dobra_core::{
    contact_for_product, describe_availability, format_brl, ContactAction, ContactSubject,
    ProductSummary, SiteSettings, SiteUrl,
};
use dobra_sanity::SanityClient;

/// Print every product with its availability and contact link.
///
/// # Errors
///
/// Returns an error if either CMS query fails.
pub(crate) async fn run_catalog(
    client: &SanityClient,
    site: &SiteUrl,
    category: Option<&str>,
) -> anyhow::Result<()> {
    let (products, settings) = tokio::join!(
        client.list_products(category),
        client.get_site_settings()
    );
    let products = products?;
    let settings = settings?;

    if settings.as_ref().and_then(|s| s.whatsapp_phone.as_ref()).is_none() {
        tracing::warn!("site settings have no WhatsApp phone; contact links are disabled");
    }

    if products.is_empty() {
        println!(
            "no products found{}",
            category
                .map(|c| format!(" in category {c}"))
                .unwrap_or_default()
        );
        return Ok(());
    }

    for line in catalog_lines(&products, settings.as_ref(), site) {
        println!("{line}");
    }
    Ok(())
}

/// Print every product slug, one per line.
///
/// # Errors
///
/// Returns an error if the CMS query fails.
pub(crate) async fn run_slugs(client: &SanityClient) -> anyhow::Result<()> {
    for slug in client.list_product_slugs().await? {
        println!("{slug}");
    }
    Ok(())
}

/// Table rows for `products`, each followed by an indented contact line.
pub(crate) fn catalog_lines(
    products: &[ProductSummary],
    settings: Option<&SiteSettings>,
    site: &SiteUrl,
) -> Vec<String> {
    let mut lines = vec![format!(
        "{:<28}{:<16}{:<48}PRICE",
        "SLUG", "STATUS", "AVAILABILITY"
    )];

    for product in products {
        let availability = describe_availability(&product.status, product.quantity_available);
        let price = product
            .starting_price
            .map_or_else(|| "-".to_string(), |p| format!("R$ {}", format_brl(p)));
        lines.push(format!(
            "{:<28}{:<16}{:<48}{}",
            product.slug,
            product.status.badge(),
            availability.label,
            price
        ));

        let contact = contact_for_product(settings, site, &ContactSubject::from(product));
        lines.push(match contact {
            ContactAction::Enabled { url } => format!("  {url}"),
            ContactAction::Disabled => "  (contact disabled)".to_string(),
        });
    }

    lines
}
