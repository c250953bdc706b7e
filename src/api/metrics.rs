// ==================== METRICS ====================
// Contadores por caminho de leitura: record store (`/users/*`) e índice de
// busca (`/user-resource/*`). Um 503 do índice é contado à parte, já que
// indisponibilidade do índice não afeta o CRUD.

use actix_web::{http::StatusCode, HttpResponse};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Which backend a request path reads from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadPath {
    Store,
    SearchIndex,
    Other,
}

impl ReadPath {
    pub fn of(path: &str) -> Self {
        if path.starts_with("/users/") {
            ReadPath::Store
        } else if path.starts_with("/user-resource/") {
            ReadPath::SearchIndex
        } else {
            ReadPath::Other
        }
    }
}

pub struct RequestCounters {
    requests: AtomicU64,
    errors: AtomicU64,
    store_requests: AtomicU64,
    search_requests: AtomicU64,
    search_unavailable: AtomicU64,
}

impl RequestCounters {
    pub const fn new() -> Self {
        Self {
            requests: AtomicU64::new(0),
            errors: AtomicU64::new(0),
            store_requests: AtomicU64::new(0),
            search_requests: AtomicU64::new(0),
            search_unavailable: AtomicU64::new(0),
        }
    }

    /// `status` is `None` when the handler chain itself failed.
    pub fn record(&self, path: ReadPath, status: Option<StatusCode>) {
        self.requests.fetch_add(1, Ordering::Relaxed);

        match path {
            ReadPath::Store => {
                self.store_requests.fetch_add(1, Ordering::Relaxed);
            }
            ReadPath::SearchIndex => {
                self.search_requests.fetch_add(1, Ordering::Relaxed);
                if status == Some(StatusCode::SERVICE_UNAVAILABLE) {
                    self.search_unavailable.fetch_add(1, Ordering::Relaxed);
                }
            }
            ReadPath::Other => {}
        }

        let failed = status.map_or(true, |s| s.is_client_error() || s.is_server_error());
        if failed {
            self.errors.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn snapshot(&self) -> MetricsResponse {
        MetricsResponse {
            http_requests_total: self.requests.load(Ordering::Relaxed),
            http_errors_total: self.errors.load(Ordering::Relaxed),
            store_requests_total: self.store_requests.load(Ordering::Relaxed),
            search_requests_total: self.search_requests.load(Ordering::Relaxed),
            search_unavailable_total: self.search_unavailable.load(Ordering::Relaxed),
        }
    }
}

impl Default for RequestCounters {
    fn default() -> Self {
        Self::new()
    }
}

/// Contadores do processo, alimentados pelo middleware `RequestMetrics`
pub static COUNTERS: RequestCounters = RequestCounters::new();

#[derive(Debug, Serialize, Deserialize, PartialEq, utoipa::ToSchema)]
pub struct MetricsResponse {
    pub http_requests_total: u64,
    pub http_errors_total: u64,
    pub store_requests_total: u64,
    pub search_requests_total: u64,
    pub search_unavailable_total: u64,
}

impl MetricsResponse {
    /// Prometheus text exposition format
    pub fn render(&self) -> String {
        let series = [
            ("http_requests_total", "HTTP requests served", self.http_requests_total),
            ("http_errors_total", "HTTP requests answered with 4xx/5xx", self.http_errors_total),
            ("user_store_requests_total", "Requests on the record store path", self.store_requests_total),
            ("user_search_requests_total", "Requests on the search index path", self.search_requests_total),
            (
                "user_search_unavailable_total",
                "Search index lookups answered with 503",
                self.search_unavailable_total,
            ),
        ];

        series
            .iter()
            .map(|(name, help, value)| format!("# HELP {name} {help}\n# TYPE {name} counter\n{name} {value}\n"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[utoipa::path(
    get,
    path = "/metrics",
    tag = "Health",
    responses(
        (status = 200, description = "Request counters per read path, Prometheus text format", body = String)
    )
)]
pub async fn get_metrics() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(COUNTERS.snapshot().render())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_path_classification() {
        assert_eq!(ReadPath::of("/users/findByName/Ann"), ReadPath::Store);
        assert_eq!(ReadPath::of("/user-resource/Ann"), ReadPath::SearchIndex);
        assert_eq!(ReadPath::of("/health"), ReadPath::Other);
        assert_eq!(ReadPath::of("/users"), ReadPath::Other);
    }

    #[test]
    fn test_search_outage_counted_separately() {
        let counters = RequestCounters::new();

        counters.record(ReadPath::Store, Some(StatusCode::OK));
        counters.record(ReadPath::SearchIndex, Some(StatusCode::OK));
        counters.record(ReadPath::SearchIndex, Some(StatusCode::SERVICE_UNAVAILABLE));
        counters.record(ReadPath::Store, Some(StatusCode::NOT_FOUND));
        counters.record(ReadPath::Other, None);

        assert_eq!(
            counters.snapshot(),
            MetricsResponse {
                http_requests_total: 5,
                http_errors_total: 3,
                store_requests_total: 2,
                search_requests_total: 2,
                search_unavailable_total: 1,
            }
        );
    }

    #[test]
    fn test_render_exposes_every_series() {
        let counters = RequestCounters::new();
        counters.record(ReadPath::SearchIndex, Some(StatusCode::SERVICE_UNAVAILABLE));

        let text = counters.snapshot().render();

        assert!(text.contains("# TYPE user_search_unavailable_total counter\nuser_search_unavailable_total 1\n"));
        assert!(text.contains("http_requests_total 1\n"));
        assert!(text.contains("user_store_requests_total 0\n"));
        assert_eq!(text.matches("# HELP").count(), 5);
    }
}
