//! Local stand-in for the Elasticsearch `_search` endpoint.

use actix_web::{dev::ServerHandle, web, App, HttpResponse, HttpServer};
use serde_json::{json, Value};

use super::USERS_INDEX;
use crate::config::SearchConfig;

pub(crate) enum FakeIndex {
    /// `_source` documents; a term query matches on exact `name`.
    Documents(Vec<Value>),
    Missing,
    Garbage,
    Failing,
}

async fn search(index: web::Data<FakeIndex>, body: web::Json<Value>) -> HttpResponse {
    match index.get_ref() {
        FakeIndex::Documents(docs) => {
            let term = body["query"]["term"]["name"]["value"].as_str().unwrap_or_default();
            let hits: Vec<Value> = docs
                .iter()
                .enumerate()
                .filter(|(_, doc)| doc["name"] == term)
                .map(|(i, doc)| {
                    json!({ "_index": USERS_INDEX, "_id": i.to_string(), "_score": 1.0, "_source": doc })
                })
                .collect();

            HttpResponse::Ok().json(json!({
                "took": 1,
                "timed_out": false,
                "hits": {
                    "total": { "value": hits.len(), "relation": "eq" },
                    "max_score": 1.0,
                    "hits": hits
                }
            }))
        }
        FakeIndex::Missing => HttpResponse::NotFound().json(json!({
            "error": {
                "type": "index_not_found_exception",
                "reason": format!("no such index [{}]", USERS_INDEX)
            },
            "status": 404
        })),
        FakeIndex::Garbage => HttpResponse::Ok()
            .content_type("application/json")
            .body("<html>not a search response</html>"),
        FakeIndex::Failing => HttpResponse::InternalServerError().finish(),
    }
}

/// Starts the fake index on an ephemeral port; stop it through the handle.
pub(crate) async fn spawn_fake_index(index: FakeIndex) -> (SearchConfig, ServerHandle) {
    let index = web::Data::new(index);
    let path = format!("/{}/_search", USERS_INDEX);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(index.clone())
            .route(&path, web::post().to(search))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("bind fake index");

    let port = server.addrs()[0].port();
    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);

    let config = SearchConfig {
        scheme: "http".into(),
        host: "127.0.0.1".into(),
        port,
    };

    (config, handle)
}
