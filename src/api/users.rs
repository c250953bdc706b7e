use actix_web::{web, HttpResponse, ResponseError};

use crate::{models::User, state::AppState};

#[utoipa::path(
    post,
    path = "/users/save",
    tag = "Users",
    request_body = User,
    responses(
        (status = 200, description = "Persisted user with its id", body = User),
        (status = 500, description = "Database error")
    )
)]
pub async fn save_user(state: web::Data<AppState>, user: web::Json<User>) -> HttpResponse {
    log::info!("📝 POST /users/save - {}", user.name);

    match state.users.save(user.into_inner()).await {
        Ok(saved) => HttpResponse::Ok().json(saved),
        Err(e) => {
            log::error!("❌ Error saving user: {}", e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    put,
    path = "/users/update/{id}",
    tag = "Users",
    request_body = User,
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "Updated user", body = User),
        (status = 404, description = "User not found"),
        (status = 500, description = "Database error")
    )
)]
pub async fn update_user(
    state: web::Data<AppState>,
    id: web::Path<String>,
    user: web::Json<User>,
) -> HttpResponse {
    log::info!("🔧 PUT /users/update/{}", id);

    match state.users.update(&id, user.into_inner()).await {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(e) => {
            log::warn!("⚠️ Failed to update user {}: {}", id, e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/users/findOne/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "User", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn find_one(state: web::Data<AppState>, id: web::Path<String>) -> HttpResponse {
    match state.users.find_one(&id).await {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(e) => {
            log::warn!("⚠️ GET /users/findOne/{}: {}", id, e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/users/all",
    tag = "Users",
    responses(
        (status = 200, description = "Every stored user", body = [User])
    )
)]
pub async fn find_all(state: web::Data<AppState>) -> HttpResponse {
    match state.users.find_all().await {
        Ok(users) => {
            log::info!("📋 Listed {} users", users.len());
            HttpResponse::Ok().json(users)
        }
        Err(e) => {
            log::error!("❌ Error listing users: {}", e);
            e.error_response()
        }
    }
}

/// Exact match on `name` in the store. The index-backed lookup lives at `/user-resource/{name}`.
#[utoipa::path(
    get,
    path = "/users/findByName/{name}",
    tag = "Users",
    params(("name" = String, Path, description = "Exact, case-sensitive name")),
    responses(
        (status = 200, description = "Users whose name is exactly the given one", body = [User])
    )
)]
pub async fn find_by_name(state: web::Data<AppState>, name: web::Path<String>) -> HttpResponse {
    match state.users.find_by_name(&name).await {
        Ok(users) => HttpResponse::Ok().json(users),
        Err(e) => {
            log::error!("❌ Error finding users by name: {}", e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    delete,
    path = "/users/delete/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "Deleted, or was already absent")
    )
)]
pub async fn delete_user(state: web::Data<AppState>, id: web::Path<String>) -> HttpResponse {
    log::info!("🗑️  DELETE /users/delete/{}", id);

    match state.users.delete(&id).await {
        Ok(()) => HttpResponse::Ok().finish(),
        Err(e) => {
            log::error!("❌ Error deleting user {}: {}", id, e);
            e.error_response()
        }
    }
}
