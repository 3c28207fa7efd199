mod about;
mod home;
mod products;
mod views;

use std::sync::Arc;

use axum::{
    http::{header, HeaderName, HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use dobra_core::SiteUrl;
use dobra_sanity::{SanityClient, SanityError};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::middleware::{request_id, RequestId};

#[derive(Clone)]
pub struct AppState {
    pub sanity: Arc<SanityClient>,
    pub site: SiteUrl,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub(super) fn new(request_id: String, data: T) -> Json<Self> {
        Json(Self {
            data,
            meta: ResponseMeta::new(request_id),
        })
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" => StatusCode::BAD_REQUEST,
            "content_unavailable" => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status == StatusCode::SERVICE_UNAVAILABLE {
            // An outage must not be cached for the revalidate window.
            let no_store = [(header::CACHE_CONTROL, HeaderValue::from_static("no-store"))];
            return (status, no_store, Json(self)).into_response();
        }
        (status, Json(self)).into_response()
    }
}

/// Unwraps a content fetch, substituting the empty value on failure.
///
/// Pages never fail because the CMS is down; they render without the
/// missing content instead.
pub(super) fn or_degraded<T: Default>(what: &'static str, result: Result<T, SanityError>) -> T {
    result.unwrap_or_else(|error| {
        tracing::warn!(error = %error, what, "content fetch failed, serving degraded view");
        T::default()
    })
}

/// `Cache-Control` for content routes, mirroring the CMS revalidate window.
fn cache_control(revalidate_secs: u64) -> HeaderValue {
    if revalidate_secs == 0 {
        return HeaderValue::from_static("no-store");
    }
    HeaderValue::from_str(&format!(
        "public, s-maxage={revalidate_secs}, stale-while-revalidate"
    ))
    .unwrap_or_else(|_| HeaderValue::from_static("no-store"))
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::HEAD])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static("x-request-id")])
}

fn content_router(revalidate_secs: u64) -> Router<AppState> {
    Router::new()
        .route("/api/v1/home", get(home::get_home))
        .route("/api/v1/products", get(products::list_products))
        .route("/api/v1/products/{slug}", get(products::get_product))
        .route("/api/v1/product-slugs", get(products::list_product_slugs))
        .route("/api/v1/about", get(about::get_about))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            cache_control(revalidate_secs),
        ))
}

pub fn build_app(state: AppState) -> Router {
    let revalidate_secs = state.sanity.revalidate().as_secs();
    let public_routes = Router::new().route("/api/v1/health", get(health));

    Router::new()
        .merge(public_routes)
        .merge(content_router(revalidate_secs))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(CompressionLayer::new())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(Extension(req_id): Extension<RequestId>) -> impl IntoResponse {
    ApiResponse::new(req_id.0, HealthData { status: "ok" })
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
