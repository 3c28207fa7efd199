//! Raw record shapes returned by the GROQ queries in [`crate::queries`].
//!
//! Content is authored by hand in the studio and drafts may be half filled,
//! so every field is optional here, including the ones the schema marks as
//! required. Arrays are `Option<Vec<_>>` because projections return explicit
//! `null` for absent arrays. Numbers arrive as JSON numbers that may carry a
//! fraction (`3.0`), so they are read as `f64` and narrowed in projection.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// Reads an optional field, turning a value of the wrong type into `None`
/// instead of failing the whole record.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Envelope of every `GET /data/query/{dataset}` response.
#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    /// The query result; `null` when a `[0]` lookup matched nothing.
    #[serde(default)]
    pub result: serde_json::Value,
    /// Server-side query time in milliseconds.
    pub ms: Option<u64>,
}

/// Error body returned with 4xx responses, e.g.
/// `{"error": {"description": "expected '}' following object body", "type": "queryParseError"}}`.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawAssetRef {
    #[serde(rename = "_ref")]
    pub reference: Option<String>,
}

/// An `image` field: `{"_type": "image", "asset": {"_ref": "image-..."}, "alt": "..."}`.
#[derive(Debug, Default, Deserialize)]
pub struct RawImage {
    pub asset: Option<RawAssetRef>,
    pub alt: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawSpan {
    pub text: Option<String>,
    pub marks: Option<Vec<String>>,
}

/// One portable-text block. Non-`block` entries (embedded images, custom
/// objects) have no `children`.
#[derive(Debug, Default, Deserialize)]
pub struct RawBlock {
    #[serde(rename = "_type")]
    pub kind: Option<String>,
    pub style: Option<String>,
    pub children: Option<Vec<RawSpan>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSeo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub og_image: Option<RawImage>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawCategoryRef {
    pub title: Option<String>,
    pub slug: Option<String>,
}

/// A product as returned by the listing and detail queries. Listing queries
/// fill `image`; the detail query fills `images`, `description` and `seo`.
///
/// Hand-authored drafts may carry a field of the wrong type (`"order": "2"`);
/// such a field reads as absent and the rest of the record survives.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProduct {
    #[serde(rename = "_id", default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub quantity_available: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub starting_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub short_description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<Vec<RawBlock>>,
    #[serde(default, deserialize_with = "lenient")]
    pub image: Option<RawImage>,
    #[serde(default, deserialize_with = "lenient")]
    pub images: Option<Vec<Option<RawImage>>>,
    #[serde(default, deserialize_with = "lenient")]
    pub featured: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub order: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub category: Option<RawCategoryRef>,
    #[serde(default, deserialize_with = "lenient")]
    pub whatsapp_message: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub seo: Option<RawSeo>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSiteSettings {
    pub whatsapp_phone: Option<String>,
    pub whatsapp_default_message: Option<String>,
    pub hero_image: Option<RawImage>,
    pub top_banner_text: Option<String>,
    pub instagram_url: Option<String>,
    pub seo: Option<RawSeo>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawCategory {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub title: Option<String>,
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub order: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawSlug {
    pub slug: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn mistyped_product_fields_read_as_absent() {
        let raw: RawProduct = serde_json::from_value(json!({
            "_id": "p",
            "title": "Prato",
            "slug": "prato",
            "order": "2",
            "featured": "yes",
            "quantityAvailable": "3",
            "image": "not-an-image"
        }))
        .expect("record should still decode");

        assert_eq!(raw.slug.as_deref(), Some("prato"));
        assert!(raw.order.is_none());
        assert!(raw.featured.is_none());
        assert!(raw.quantity_available.is_none());
        assert!(raw.image.is_none());
    }

    #[test]
    fn mistyped_category_order_reads_as_absent() {
        let raw: RawCategory =
            serde_json::from_value(json!({ "_id": "c", "title": "Vasos", "slug": "vasos", "order": [] }))
                .expect("record should still decode");
        assert!(raw.order.is_none());
    }
}
