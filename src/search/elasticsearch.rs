use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

use super::{UserSearch, USERS_INDEX};
use crate::{config::SearchConfig, models::User, utils::AppError};

#[derive(Debug, Deserialize)]
struct SearchResponse {
    hits: SearchHits,
}

#[derive(Debug, Deserialize)]
struct SearchHits {
    #[serde(default)]
    hits: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    #[serde(rename = "_id", default)]
    id: Option<String>,
    /// Decodificado por hit: um documento ruim não derruba a consulta inteira
    #[serde(rename = "_source", default)]
    source: Option<serde_json::Value>,
}

/// Documento do índice `users`. O id pode vir como string ou número.
#[derive(Debug, Deserialize)]
struct UserSource {
    #[serde(default)]
    id: Option<serde_json::Value>,
    name: String,
    #[serde(rename = "lastName")]
    last_name: String,
}

impl SearchHit {
    fn into_user(self) -> Result<User, String> {
        let source = self.source.ok_or_else(|| "no _source".to_string())?;
        let source: UserSource =
            serde_json::from_value(source).map_err(|e| format!("undecodable _source: {}", e))?;

        let id = source
            .id
            .and_then(|value| match value {
                serde_json::Value::String(s) => Some(s),
                serde_json::Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .or(self.id);

        Ok(User {
            id,
            name: source.name,
            last_name: source.last_name,
        })
    }
}

/// Term-query client for the Elasticsearch `users` index
pub struct ElasticsearchUserSearch {
    client: reqwest::Client,
    search_url: String,
}

impl ElasticsearchUserSearch {
    pub fn new(config: &SearchConfig) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::SearchUnavailable(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            search_url: format!("{}/{}/_search", config.base_url(), USERS_INDEX),
        })
    }
}

#[async_trait]
impl UserSearch for ElasticsearchUserSearch {
    async fn query_by_name(&self, text: &str) -> Result<Vec<User>, AppError> {
        log::info!("🔎 Term query on {}.name = {:?}", USERS_INDEX, text);

        let query = serde_json::json!({
            "query": {
                "term": {
                    "name": { "value": text }
                }
            }
        });

        let response = self
            .client
            .post(&self.search_url)
            .header("Accept", "application/json")
            .json(&query)
            .send()
            .await
            .map_err(|e| AppError::SearchUnavailable(format!("Failed to reach search index: {}", e)))?;

        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            let body: serde_json::Value = response.json().await.unwrap_or_default();
            if body["error"]["type"] == "index_not_found_exception" {
                log::warn!("⚠️  Index '{}' does not exist yet, returning no hits", USERS_INDEX);
                return Ok(Vec::new());
            }
            return Err(AppError::SearchUnavailable(format!("Search index error: {}", status)));
        }

        if !status.is_success() {
            return Err(AppError::SearchUnavailable(format!("Search index error: {}", status)));
        }

        let parsed: SearchResponse = response
            .json()
            .await
            .map_err(|e| AppError::SearchUnavailable(format!("Malformed search response: {}", e)))?;

        let mut users = Vec::with_capacity(parsed.hits.hits.len());
        for hit in parsed.hits.hits {
            let hit_id = hit.id.clone();
            match hit.into_user() {
                Ok(user) => users.push(user),
                Err(reason) => log::warn!("⚠️  Hit {:?} skipped: {}", hit_id, reason),
            }
        }

        log::info!("✅ Search index returned {} users", users.len());

        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::test_support::{spawn_fake_index, FakeIndex};
    use serde_json::json;

    fn ann_docs() -> Vec<serde_json::Value> {
        vec![
            json!({ "id": "a1", "name": "Ann", "lastName": "Lee" }),
            json!({ "id": 7, "name": "Ann", "lastName": "Smith" }),
            json!({ "name": "Ann", "lastName": "Doe" }),
            json!({ "id": "b2", "name": "Bob", "lastName": "Lee" }),
        ]
    }

    #[actix_web::test]
    async fn test_term_query_maps_hits_to_users() {
        let (config, server) = spawn_fake_index(FakeIndex::Documents(ann_docs())).await;
        let search = ElasticsearchUserSearch::new(&config).unwrap();

        let users = search.query_by_name("Ann").await.unwrap();

        assert_eq!(users.len(), 3);
        assert!(users.iter().all(|u| u.name == "Ann"));
        assert_eq!(users[0].id.as_deref(), Some("a1"));
        assert_eq!(users[1].id.as_deref(), Some("7"));
        // sem id no _source, usa o _id do hit
        assert_eq!(users[2].id.as_deref(), Some("2"));

        server.stop(true).await;
    }

    #[actix_web::test]
    async fn test_partial_document_is_skipped_not_fatal() {
        let (config, server) = spawn_fake_index(FakeIndex::Documents(vec![
            json!({ "id": "a1", "name": "Ann", "lastName": "Lee" }),
            json!({ "id": "a2", "name": "Ann" }),
            json!({ "id": "a3", "name": "Ann", "lastName": null }),
        ]))
        .await;
        let search = ElasticsearchUserSearch::new(&config).unwrap();

        let users = search.query_by_name("Ann").await.unwrap();

        assert_eq!(users, vec![User {
            id: Some("a1".into()),
            name: "Ann".into(),
            last_name: "Lee".into(),
        }]);

        server.stop(true).await;
    }

    #[actix_web::test]
    async fn test_no_match_is_empty() {
        let (config, server) = spawn_fake_index(FakeIndex::Documents(ann_docs())).await;
        let search = ElasticsearchUserSearch::new(&config).unwrap();

        assert!(search.query_by_name("Carol").await.unwrap().is_empty());

        server.stop(true).await;
    }

    #[actix_web::test]
    async fn test_empty_index_is_empty() {
        let (config, server) = spawn_fake_index(FakeIndex::Documents(vec![])).await;
        let search = ElasticsearchUserSearch::new(&config).unwrap();

        assert!(search.query_by_name("Ann").await.unwrap().is_empty());

        server.stop(true).await;
    }

    #[actix_web::test]
    async fn test_missing_index_is_empty() {
        let (config, server) = spawn_fake_index(FakeIndex::Missing).await;
        let search = ElasticsearchUserSearch::new(&config).unwrap();

        assert!(search.query_by_name("Ann").await.unwrap().is_empty());

        server.stop(true).await;
    }

    #[actix_web::test]
    async fn test_malformed_response_is_unavailable() {
        let (config, server) = spawn_fake_index(FakeIndex::Garbage).await;
        let search = ElasticsearchUserSearch::new(&config).unwrap();

        let result = search.query_by_name("Ann").await;
        assert!(matches!(result, Err(AppError::SearchUnavailable(_))));

        server.stop(true).await;
    }

    #[actix_web::test]
    async fn test_server_error_is_unavailable() {
        let (config, server) = spawn_fake_index(FakeIndex::Failing).await;
        let search = ElasticsearchUserSearch::new(&config).unwrap();

        let result = search.query_by_name("Ann").await;
        assert!(matches!(result, Err(AppError::SearchUnavailable(_))));

        server.stop(true).await;
    }

    #[actix_web::test]
    async fn test_unreachable_transport_is_unavailable() {
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let config = SearchConfig {
            scheme: "http".into(),
            host: "127.0.0.1".into(),
            port,
        };
        let search = ElasticsearchUserSearch::new(&config).unwrap();

        let result = search.query_by_name("Ann").await;
        assert!(matches!(result, Err(AppError::SearchUnavailable(_))));
    }
}
