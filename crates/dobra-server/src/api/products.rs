use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use dobra_core::Category;
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::views::{ProductCard, ProductView};
use super::{or_degraded, ApiError, ApiResponse, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct CatalogQuery {
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct CatalogView {
    /// Category slug the listing was filtered by, if any.
    category: Option<String>,
    categories: Vec<Category>,
    products: Vec<ProductCard>,
}

pub(super) async fn list_products(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<CatalogQuery>,
) -> Json<ApiResponse<CatalogView>> {
    let category = query
        .category
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty());

    let (products, categories, settings) = tokio::join!(
        state.sanity.list_products(category.as_deref()),
        state.sanity.list_categories(),
        state.sanity.get_site_settings(),
    );
    let products = or_degraded("products", products);
    let categories = or_degraded("categories", categories);
    let settings = or_degraded("site settings", settings);

    let view = CatalogView {
        category,
        categories,
        products: ProductCard::list(&products, settings.as_ref(), &state.site),
    };
    ApiResponse::new(req_id.0, view)
}

pub(super) async fn get_product(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<ProductView>>, ApiError> {
    let (product, settings) = tokio::join!(
        state.sanity.get_product(&slug),
        state.sanity.get_site_settings(),
    );
    let settings = or_degraded("site settings", settings);

    match product {
        Ok(Some(product)) => Ok(ApiResponse::new(
            req_id.0,
            ProductView::new(product, settings.as_ref(), &state.site),
        )),
        Ok(None) => Err(ApiError::new(
            req_id.0,
            "not_found",
            format!("product {slug} not found"),
        )),
        Err(error) => {
            tracing::warn!(error = %error, slug = %slug, "product fetch failed");
            Err(ApiError::new(
                req_id.0,
                "content_unavailable",
                "product content is temporarily unavailable",
            ))
        }
    }
}

pub(super) async fn list_product_slugs(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<String>>> {
    let slugs = or_degraded("product slugs", state.sanity.list_product_slugs().await);
    ApiResponse::new(req_id.0, slugs)
}
