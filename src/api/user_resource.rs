use actix_web::{web, HttpResponse, ResponseError};

use crate::state::AppState;

/// Term query against the search index. Bypasses the user service and may lag the store.
#[utoipa::path(
    get,
    path = "/user-resource/{name}",
    tag = "Search",
    params(("name" = String, Path, description = "Term matched against the indexed name")),
    responses(
        (status = 200, description = "Users matched by the index", body = [crate::models::User]),
        (status = 503, description = "Search index unavailable")
    )
)]
pub async fn search_by_name(state: web::Data<AppState>, name: web::Path<String>) -> HttpResponse {
    match state.search.query_by_name(&name).await {
        Ok(users) => HttpResponse::Ok().json(users),
        Err(e) => {
            log::error!("❌ Search by name failed: {}", e);
            e.error_response()
        }
    }
}
