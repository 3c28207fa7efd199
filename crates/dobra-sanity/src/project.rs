//! Projection from raw CMS records to [`dobra_core`] catalog types.
//!
//! Projection never fails on optional content. A product without an id,
//! title or slug cannot be linked to, so it projects to `None` and listings
//! skip it.

use dobra_core::{
    Category, CategoryRef, ImageRef, ProductDetail, ProductStatus, ProductSummary, RichTextBlock,
    RichTextSpan, Seo, SiteSettings, DEFAULT_WHATSAPP_MESSAGE,
};
use rust_decimal::Decimal;

use crate::types::{
    RawCategory, RawCategoryRef, RawImage, RawProduct, RawSeo, RawSiteSettings, RawSpan,
};

/// Fields every product projection needs.
struct ProductCore {
    id: String,
    title: String,
    slug: String,
    status: ProductStatus,
    quantity_available: Option<u32>,
    starting_price: Option<Decimal>,
    short_description: Option<String>,
    featured: bool,
    order: i64,
    category: Option<CategoryRef>,
    whatsapp_message: Option<String>,
}

/// Projects one listing record. Only the first usable image is kept.
#[must_use]
pub fn project_product_summary(mut raw: RawProduct) -> Option<ProductSummary> {
    let image = raw
        .image
        .take()
        .and_then(project_image)
        .or_else(|| project_images(raw.images.take()).into_iter().next());
    let core = project_core(raw)?;

    Some(ProductSummary {
        id: core.id,
        title: core.title,
        slug: core.slug,
        status: core.status,
        quantity_available: core.quantity_available,
        starting_price: core.starting_price,
        short_description: core.short_description,
        image,
        featured: core.featured,
        order: core.order,
        category: core.category,
        whatsapp_message: core.whatsapp_message,
    })
}

/// Projects a listing, dropping records that cannot be linked to.
#[must_use]
pub fn project_product_summaries(raw: Vec<RawProduct>) -> Vec<ProductSummary> {
    let total = raw.len();
    let products: Vec<ProductSummary> = raw
        .into_iter()
        .filter_map(project_product_summary)
        .collect();
    if products.len() < total {
        tracing::warn!(
            skipped = total - products.len(),
            total,
            "skipped product records missing id, title or slug"
        );
    }
    products
}

/// Projects a detail record with every image and the rich-text body.
#[must_use]
pub fn project_product_detail(mut raw: RawProduct) -> Option<ProductDetail> {
    let images = project_images(raw.images.take());
    let description = raw
        .description
        .take()
        .unwrap_or_default()
        .into_iter()
        .map(|block| RichTextBlock {
            kind: non_blank(block.kind).unwrap_or_else(|| "block".to_string()),
            style: non_blank(block.style),
            spans: block
                .children
                .unwrap_or_default()
                .into_iter()
                .filter_map(project_span)
                .collect(),
        })
        .collect();
    let seo = raw.seo.take().map(project_seo);
    let core = project_core(raw)?;

    Some(ProductDetail {
        id: core.id,
        title: core.title,
        slug: core.slug,
        status: core.status,
        quantity_available: core.quantity_available,
        starting_price: core.starting_price,
        short_description: core.short_description,
        description,
        images,
        featured: core.featured,
        order: core.order,
        category: core.category,
        whatsapp_message: core.whatsapp_message,
        seo,
    })
}

/// Projects the settings singleton. A blank default message falls back to
/// [`DEFAULT_WHATSAPP_MESSAGE`]; a blank phone or banner is absent.
#[must_use]
pub fn project_site_settings(raw: RawSiteSettings) -> SiteSettings {
    SiteSettings {
        whatsapp_phone: non_blank(raw.whatsapp_phone),
        whatsapp_default_message: non_blank(raw.whatsapp_default_message)
            .unwrap_or_else(|| DEFAULT_WHATSAPP_MESSAGE.to_string()),
        hero_image: raw.hero_image.and_then(project_image),
        top_banner_text: non_blank(raw.top_banner_text),
        instagram_url: non_blank(raw.instagram_url),
        seo: raw.seo.map(project_seo),
    }
}

#[must_use]
pub fn project_category(raw: RawCategory) -> Option<Category> {
    Some(Category {
        id: non_blank(raw.id)?,
        title: non_blank(raw.title)?,
        slug: non_blank(raw.slug)?,
        order: raw.order.and_then(whole_number).unwrap_or(0),
    })
}

fn project_core(raw: RawProduct) -> Option<ProductCore> {
    let id = non_blank(raw.id)?;
    let title = non_blank(raw.title)?;
    let slug = non_blank(raw.slug)?;

    // Schema initial value for new products.
    let status = non_blank(raw.status).map_or(ProductStatus::MadeToOrder, ProductStatus::from);

    let quantity_available = raw
        .quantity_available
        .and_then(whole_number)
        .and_then(|q| u32::try_from(q).ok());

    let starting_price = raw
        .starting_price
        .filter(|p| p.is_finite() && *p >= 0.0)
        .and_then(|p| Decimal::try_from(p).ok());

    Some(ProductCore {
        id,
        title,
        slug,
        status,
        quantity_available,
        starting_price,
        short_description: non_blank(raw.short_description),
        featured: raw.featured.unwrap_or(false),
        order: raw.order.and_then(whole_number).unwrap_or(0),
        category: raw.category.and_then(project_category_ref),
        whatsapp_message: non_blank(raw.whatsapp_message),
    })
}

fn project_image(raw: RawImage) -> Option<ImageRef> {
    let asset_ref = raw.asset.and_then(|a| non_blank(a.reference))?;
    Some(ImageRef {
        asset_ref,
        alt: non_blank(raw.alt),
    })
}

fn project_images(raw: Option<Vec<Option<RawImage>>>) -> Vec<ImageRef> {
    raw.unwrap_or_default()
        .into_iter()
        .flatten()
        .filter_map(project_image)
        .collect()
}

fn project_span(raw: RawSpan) -> Option<RichTextSpan> {
    Some(RichTextSpan {
        text: raw.text?,
        marks: raw.marks.unwrap_or_default(),
    })
}

fn project_seo(raw: RawSeo) -> Seo {
    Seo {
        title: non_blank(raw.title),
        description: non_blank(raw.description),
        og_image: raw.og_image.and_then(project_image),
    }
}

fn project_category_ref(raw: RawCategoryRef) -> Option<CategoryRef> {
    Some(CategoryRef {
        title: non_blank(raw.title)?,
        slug: non_blank(raw.slug)?,
    })
}

/// Trims and drops empty strings.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Integral JSON numbers only; `3.0` is accepted, `2.5` and `NaN` are not.
#[allow(clippy::cast_possible_truncation)]
fn whole_number(value: f64) -> Option<i64> {
    // i64::MAX is not exactly representable; stay well inside the range.
    const LIMIT: f64 = 9_007_199_254_740_992.0;
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= LIMIT {
        Some(value as i64)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "project_test.rs"]
mod tests;
