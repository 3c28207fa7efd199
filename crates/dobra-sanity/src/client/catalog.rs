//! Catalog queries, projected into `dobra-core` types.

use dobra_core::{Category, ProductDetail, ProductSummary, SiteSettings};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::error::SanityError;
use crate::project::{
    project_category, project_product_detail, project_product_summaries, project_site_settings,
};
use crate::queries;
use crate::types::{RawCategory, RawProduct, RawSiteSettings, RawSlug};

use super::SanityClient;

impl SanityClient {
    /// Lists products in display order, optionally restricted to the category
    /// with slug `category`. A blank category lists everything.
    ///
    /// # Errors
    ///
    /// Propagates any [`SanityError`] from the query.
    pub async fn list_products(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<ProductSummary>, SanityError> {
        let category = category.map(str::trim).filter(|c| !c.is_empty());
        let raw: Option<Vec<Value>> = match category {
            Some(slug) => {
                self.fetch(
                    "products by category",
                    queries::PRODUCTS_BY_CATEGORY,
                    &[("category", json!(slug))],
                    self.revalidate,
                )
                .await?
            }
            None => {
                self.fetch("products", queries::PRODUCTS, &[], self.revalidate)
                    .await?
            }
        };
        Ok(project_product_summaries(decode_records("products", raw)))
    }

    /// Lists products flagged as featured, in display order.
    ///
    /// # Errors
    ///
    /// Propagates any [`SanityError`] from the query.
    pub async fn list_featured_products(&self) -> Result<Vec<ProductSummary>, SanityError> {
        let raw: Option<Vec<Value>> = self
            .fetch(
                "featured products",
                queries::FEATURED_PRODUCTS,
                &[],
                self.revalidate,
            )
            .await?;
        Ok(project_product_summaries(decode_records(
            "featured products",
            raw,
        )))
    }

    /// Fetches one product by slug. `Ok(None)` means no such product, or a
    /// record too incomplete to show.
    ///
    /// # Errors
    ///
    /// Propagates any [`SanityError`] from the query.
    pub async fn get_product(&self, slug: &str) -> Result<Option<ProductDetail>, SanityError> {
        let raw: Option<Value> = self
            .fetch(
                "product by slug",
                queries::PRODUCT_BY_SLUG,
                &[("slug", json!(slug))],
                self.revalidate,
            )
            .await?;
        Ok(raw
            .and_then(|v| decode_record::<RawProduct>("product", v))
            .and_then(project_product_detail))
    }

    /// Every product slug, for static page enumeration.
    ///
    /// # Errors
    ///
    /// Propagates any [`SanityError`] from the query.
    pub async fn list_product_slugs(&self) -> Result<Vec<String>, SanityError> {
        let raw: Option<Vec<Value>> = self
            .fetch(
                "product slugs",
                queries::PRODUCT_SLUGS,
                &[],
                self.revalidate,
            )
            .await?;
        Ok(decode_records::<RawSlug>("product slugs", raw)
            .into_iter()
            .filter_map(|s| s.slug)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect())
    }

    /// Fetches the site-settings singleton; `Ok(None)` if it was never
    /// published.
    ///
    /// # Errors
    ///
    /// Propagates any [`SanityError`] from the query.
    pub async fn get_site_settings(&self) -> Result<Option<SiteSettings>, SanityError> {
        let raw: Option<RawSiteSettings> = self
            .fetch(
                "site settings",
                queries::SITE_SETTINGS,
                &[],
                self.settings_revalidate,
            )
            .await?;
        Ok(raw.map(project_site_settings))
    }

    /// Lists categories in display order.
    ///
    /// # Errors
    ///
    /// Propagates any [`SanityError`] from the query.
    pub async fn list_categories(&self) -> Result<Vec<Category>, SanityError> {
        let raw: Option<Vec<Value>> = self
            .fetch("categories", queries::CATEGORIES, &[], self.revalidate)
            .await?;
        Ok(decode_records::<RawCategory>("categories", raw)
            .into_iter()
            .filter_map(project_category)
            .collect())
    }
}

/// Decodes each listing element on its own so one malformed record drops
/// only itself.
fn decode_records<T: DeserializeOwned>(context: &str, raw: Option<Vec<Value>>) -> Vec<T> {
    let raw = raw.unwrap_or_default();
    let total = raw.len();
    let records: Vec<T> = raw
        .into_iter()
        .filter_map(|v| serde_json::from_value(v).ok())
        .collect();
    let skipped = total - records.len();
    if skipped > 0 {
        tracing::warn!(context, skipped, total, "skipped undecodable records");
    }
    records
}

fn decode_record<T: DeserializeOwned>(context: &str, raw: Value) -> Option<T> {
    match serde_json::from_value(raw) {
        Ok(record) => Some(record),
        Err(e) => {
            tracing::warn!(context, error = %e, "skipped undecodable record");
            None
        }
    }
}
