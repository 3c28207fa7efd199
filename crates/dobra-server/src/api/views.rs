//! Product view models shared by the home, catalog and detail routes.

use dobra_core::{
    contact_for_product, describe_availability, price_label, Availability, CategoryRef,
    ContactAction, ContactSubject, ImageRef, ProductDetail, ProductStatus, ProductSummary,
    RichTextBlock, Seo, SiteSettings, SiteUrl,
};
use rust_decimal::Decimal;
use serde::Serialize;

/// A product as shown in a listing: one image, a badge and a contact action.
#[derive(Debug, Serialize)]
pub(super) struct ProductCard {
    id: String,
    title: String,
    slug: String,
    url: String,
    status: ProductStatus,
    badge: String,
    availability: Availability,
    starting_price: Option<Decimal>,
    price_label: Option<String>,
    short_description: Option<String>,
    image: Option<ImageRef>,
    featured: bool,
    category: Option<CategoryRef>,
    contact: ContactAction,
}

impl ProductCard {
    pub(super) fn new(
        product: &ProductSummary,
        settings: Option<&SiteSettings>,
        site: &SiteUrl,
    ) -> Self {
        Self {
            id: product.id.clone(),
            title: product.title.clone(),
            slug: product.slug.clone(),
            url: site.product_url(&product.slug),
            status: product.status.clone(),
            badge: product.status.badge().to_string(),
            availability: describe_availability(&product.status, product.quantity_available),
            starting_price: product.starting_price,
            price_label: product.starting_price.map(price_label),
            short_description: product.short_description.clone(),
            image: product.image.clone(),
            featured: product.featured,
            category: product.category.clone(),
            contact: contact_for_product(settings, site, &ContactSubject::from(product)),
        }
    }

    pub(super) fn list(
        products: &[ProductSummary],
        settings: Option<&SiteSettings>,
        site: &SiteUrl,
    ) -> Vec<Self> {
        products
            .iter()
            .map(|product| Self::new(product, settings, site))
            .collect()
    }
}

/// A product page: every image, the rich-text body and SEO metadata.
#[derive(Debug, Serialize)]
pub(super) struct ProductView {
    id: String,
    title: String,
    slug: String,
    url: String,
    status: ProductStatus,
    badge: String,
    availability: Availability,
    starting_price: Option<Decimal>,
    price_label: Option<String>,
    short_description: Option<String>,
    description: Vec<RichTextBlock>,
    description_text: String,
    cover_image: Option<ImageRef>,
    images: Vec<ImageRef>,
    category: Option<CategoryRef>,
    seo: Option<Seo>,
    contact: ContactAction,
}

impl ProductView {
    pub(super) fn new(
        product: ProductDetail,
        settings: Option<&SiteSettings>,
        site: &SiteUrl,
    ) -> Self {
        let contact = contact_for_product(settings, site, &ContactSubject::from(&product));
        let availability = describe_availability(&product.status, product.quantity_available);
        let description_text = product.description_text();
        let cover_image = product.cover_image().cloned();

        Self {
            url: site.product_url(&product.slug),
            badge: product.status.badge().to_string(),
            availability,
            price_label: product.starting_price.map(price_label),
            description_text,
            cover_image,
            contact,
            id: product.id,
            title: product.title,
            slug: product.slug,
            status: product.status,
            starting_price: product.starting_price,
            short_description: product.short_description,
            description: product.description,
            images: product.images,
            category: product.category,
            seo: product.seo,
        }
    }
}
