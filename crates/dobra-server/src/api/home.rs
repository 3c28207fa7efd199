use axum::{extract::State, Extension, Json};
use dobra_core::{build_chat_url, ImageRef};
use serde::Serialize;

use crate::middleware::RequestId;

use super::views::ProductCard;
use super::{or_degraded, ApiResponse, AppState};

#[derive(Debug, Serialize)]
pub(super) struct HomeView {
    top_banner_text: Option<String>,
    hero_image: Option<ImageRef>,
    /// First featured product, shown large.
    highlight: Option<ProductCard>,
    /// Remaining featured products, in display order.
    featured: Vec<ProductCard>,
    chat_url: Option<String>,
}

pub(super) async fn get_home(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<HomeView>> {
    let (featured, settings) = tokio::join!(
        state.sanity.list_featured_products(),
        state.sanity.get_site_settings(),
    );
    let featured = or_degraded("featured products", featured);
    let settings = or_degraded("site settings", settings);

    let mut cards = ProductCard::list(&featured, settings.as_ref(), &state.site).into_iter();
    let highlight = cards.next();

    let view = HomeView {
        top_banner_text: settings.as_ref().and_then(|s| s.top_banner_text.clone()),
        hero_image: settings.as_ref().and_then(|s| s.hero_image.clone()),
        highlight,
        featured: cards.collect(),
        chat_url: settings
            .as_ref()
            .and_then(|s| s.whatsapp_phone.as_deref())
            .and_then(build_chat_url),
    };

    ApiResponse::new(req_id.0, view)
}
