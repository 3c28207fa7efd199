use serde::Serialize;

/// Public base URL of the storefront, without a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteUrl(String);

impl SiteUrl {
    #[must_use]
    pub fn new(base: &str) -> Self {
        Self(base.trim().trim_end_matches('/').to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical page URL for a product: `{base}/produtos/{slug}`.
    #[must_use]
    pub fn product_url(&self, slug: &str) -> String {
        format!("{}/produtos/{slug}", self.0)
    }
}

impl std::fmt::Display for SiteUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
