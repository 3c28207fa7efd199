use axum::{extract::State, Extension, Json};
use dobra_core::build_chat_url;
use serde::Serialize;

use crate::middleware::RequestId;

use super::{or_degraded, ApiResponse, AppState};

#[derive(Debug, Serialize)]
pub(super) struct AboutView {
    chat_url: Option<String>,
    instagram_url: Option<String>,
}

pub(super) async fn get_about(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<AboutView>> {
    let settings = or_degraded("site settings", state.sanity.get_site_settings().await);

    let view = AboutView {
        chat_url: settings
            .as_ref()
            .and_then(|s| s.whatsapp_phone.as_deref())
            .and_then(build_chat_url),
        instagram_url: settings.and_then(|s| s.instagram_url),
    };
    ApiResponse::new(req_id.0, view)
}
