use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Search Service API",
        version = "1.0.0",
        description = "Users are stored in MongoDB and looked up by name through two independent paths.\n\n**Paths:**\n- `/users/findByName/{name}`: exact match on the record store (always current)\n- `/user-resource/{name}`: term query on the Elasticsearch `users` index (maintained externally, may be stale)"
    ),
    paths(
        // CRUD (record store)
        crate::api::users::save_user,
        crate::api::users::update_user,
        crate::api::users::find_one,
        crate::api::users::find_all,
        crate::api::users::find_by_name,
        crate::api::users::delete_user,

        // Search index
        crate::api::user_resource::search_by_name,

        // Health & Metrics
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,
    ),
    components(
        schemas(
            crate::models::User,
            crate::api::health::HealthResponse,
            crate::api::metrics::MetricsResponse,
        )
    ),
    tags(
        (name = "Users", description = "CRUD over the authoritative record store."),
        (name = "Search", description = "Read-only lookups against the search index. Not synchronized with the store."),
        (name = "Health", description = "Health check and request metrics."),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_both_lookup_paths() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/users/findByName/{name}"));
        assert!(doc.paths.paths.contains_key("/user-resource/{name}"));
    }
}
