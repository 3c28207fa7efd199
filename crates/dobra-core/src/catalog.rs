//! Typed catalog records, as projected from the CMS.
//!
//! All optional content has already been defaulted by the time a value of
//! these types exists, so downstream rules never inspect raw CMS shapes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Contact message used when the site settings carry none.
pub const DEFAULT_WHATSAPP_MESSAGE: &str = "Oi! Tenho interesse em um produto da Dobra.";

/// Commercial status of a product.
///
/// Values the CMS may add later are kept verbatim in [`ProductStatus::Other`]
/// instead of failing the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProductStatus {
    Available,
    MadeToOrder,
    SoldOut,
    Other(String),
}

impl ProductStatus {
    /// The CMS value for this status, e.g. `"made_to_order"`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Available => "available",
            Self::MadeToOrder => "made_to_order",
            Self::SoldOut => "sold_out",
            Self::Other(raw) => raw,
        }
    }

    /// Short label for a status badge. Unknown statuses echo the raw value.
    #[must_use]
    pub fn badge(&self) -> &str {
        match self {
            Self::Available => "Available",
            Self::MadeToOrder => "Made to order",
            Self::SoldOut => "Sold out",
            Self::Other(raw) => raw,
        }
    }
}

impl From<&str> for ProductStatus {
    fn from(raw: &str) -> Self {
        match raw {
            "available" => Self::Available,
            "made_to_order" => Self::MadeToOrder,
            "sold_out" => Self::SoldOut,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for ProductStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "available" | "made_to_order" | "sold_out" => Self::from(raw.as_str()),
            _ => Self::Other(raw),
        }
    }
}

impl From<ProductStatus> for String {
    fn from(status: ProductStatus) -> Self {
        match status {
            ProductStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to an image asset stored in the CMS, e.g.
/// `"image-Tb9Ew8CXIwaY6R1kjMvI0uRR-2000x3000-jpg"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub asset_ref: String,
    pub alt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichTextSpan {
    pub text: String,
    /// Decorators and annotation keys, e.g. `["strong"]`.
    pub marks: Vec<String>,
}

/// One block of the long product description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichTextBlock {
    /// Block type, `"block"` for ordinary paragraphs.
    pub kind: String,
    /// Paragraph style such as `"normal"` or `"h2"`.
    pub style: Option<String>,
    pub spans: Vec<RichTextSpan>,
}

impl RichTextBlock {
    /// Concatenated text of every span in the block.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Per-record search and social metadata. Presentation only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub og_image: Option<ImageRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub title: String,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub order: i64,
}

/// Listing projection of a product: one representative image, no long
/// description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub status: ProductStatus,
    /// Units in stock. Only meaningful while `status` is `Available`.
    pub quantity_available: Option<u32>,
    /// Advisory "from" price in BRL.
    pub starting_price: Option<Decimal>,
    pub short_description: Option<String>,
    pub image: Option<ImageRef>,
    pub featured: bool,
    pub order: i64,
    pub category: Option<CategoryRef>,
    /// Product-specific contact message overriding the site default.
    pub whatsapp_message: Option<String>,
}

/// Detail projection of a product: the full image sequence and long
/// description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetail {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub status: ProductStatus,
    pub quantity_available: Option<u32>,
    pub starting_price: Option<Decimal>,
    pub short_description: Option<String>,
    pub description: Vec<RichTextBlock>,
    pub images: Vec<ImageRef>,
    pub featured: bool,
    pub order: i64,
    pub category: Option<CategoryRef>,
    pub whatsapp_message: Option<String>,
    pub seo: Option<Seo>,
}

impl ProductDetail {
    /// First image, used for previews and social cards.
    #[must_use]
    pub fn cover_image(&self) -> Option<&ImageRef> {
        self.images.first()
    }

    /// Long description flattened to paragraphs separated by blank lines.
    #[must_use]
    pub fn description_text(&self) -> String {
        self.description
            .iter()
            .map(RichTextBlock::plain_text)
            .filter(|t| !t.trim().is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// The singleton site configuration record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSettings {
    /// Contact phone as authored, e.g. `"5511999999999"`. May contain
    /// formatting; see [`crate::normalize_phone`].
    pub whatsapp_phone: Option<String>,
    pub whatsapp_default_message: String,
    pub hero_image: Option<ImageRef>,
    pub top_banner_text: Option<String>,
    pub instagram_url: Option<String>,
    pub seo: Option<Seo>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            whatsapp_phone: None,
            whatsapp_default_message: DEFAULT_WHATSAPP_MESSAGE.to_string(),
            hero_image: None,
            top_banner_text: None,
            instagram_url: None,
            seo: None,
        }
    }
}
