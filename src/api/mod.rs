pub mod health;
pub mod metrics;
pub mod swagger;
pub mod user_resource;
pub mod users;

use actix_web::web;

/// Rotas dos dois caminhos de leitura + health/metrics
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Health check
        .route("/health", web::get().to(health::health_check))
        // Metrics
        .route("/metrics", web::get().to(metrics::get_metrics))
        // ==================== CRUD (RECORD STORE) ====================
        .service(
            web::scope("/users")
                .route("/save", web::post().to(users::save_user))
                .route("/update/{id}", web::put().to(users::update_user))
                .route("/findOne/{id}", web::get().to(users::find_one))
                .route("/all", web::get().to(users::find_all))
                .route("/findByName/{name}", web::get().to(users::find_by_name))
                .route("/delete/{id}", web::delete().to(users::delete_user)),
        )
        // ==================== SEARCH INDEX (READ ONLY) ====================
        .service(
            web::scope("/user-resource")
                .route("/{name}", web::get().to(user_resource::search_by_name)),
        );
}
