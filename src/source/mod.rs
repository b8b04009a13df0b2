pub mod document;

use std::path::PathBuf;
use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::config::SourceConfig;
use crate::labels::Labels;
pub use document::{Board, Document, SchemaError, SingleMetric};

/// Where the progress document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Http(String),
    File(PathBuf),
}

impl Location {
    pub fn parse(url: &str) -> Self {
        if url.starts_with("http://") || url.starts_with("https://") {
            Location::Http(url.to_string())
        } else if let Some(path) = url.strip_prefix("file://") {
            Location::File(PathBuf::from(path))
        } else {
            Location::File(PathBuf::from(url))
        }
    }
}

/// Fetches the progress document with a single GET.
pub struct ProgressClient {
    location: Location,
    cache_bust: bool,
    client: Client,
}

impl ProgressClient {
    pub fn new(config: &SourceConfig) -> Result<Self, LoadError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(LoadError::Http)?;
        Ok(Self {
            location: Location::parse(&config.url),
            cache_bust: config.cache_bust,
            client,
        })
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Request URL with the `ts` cache-busting parameter when enabled.
    pub fn request_url(&self, url: &str, now_millis: i64) -> String {
        if !self.cache_bust {
            return url.to_string();
        }
        let sep = if url.contains('?') { '&' } else { '?' };
        format!("{url}{sep}ts={now_millis}")
    }

    /// Fetch the raw JSON body.
    pub async fn fetch(&self) -> Result<Value, LoadError> {
        match &self.location {
            Location::Http(url) => {
                let url = self.request_url(url, chrono::Utc::now().timestamp_millis());
                tracing::debug!("GET {url}");
                let resp = self.client.get(&url).send().await.map_err(LoadError::Http)?;
                let status = resp.status();
                if !status.is_success() {
                    return Err(LoadError::Status(status.as_u16()));
                }
                let body = resp.bytes().await.map_err(LoadError::Http)?;
                serde_json::from_slice(&body).map_err(LoadError::Json)
            }
            Location::File(path) => {
                tracing::debug!("Reading {}", path.display());
                let text = tokio::fs::read_to_string(path).await.map_err(LoadError::Io)?;
                serde_json::from_str(&text).map_err(LoadError::Json)
            }
        }
    }

    /// Fetch, validate and normalize into a `Board`.
    pub async fn load(&self, labels: &Labels) -> Result<Board, LoadError> {
        let value = self.fetch().await?;
        let doc = Document::from_value(value).map_err(LoadError::Schema)?;
        Ok(Board::from_document(doc, labels))
    }
}

#[derive(Debug)]
pub enum LoadError {
    Http(reqwest::Error),
    Status(u16),
    Io(std::io::Error),
    Json(serde_json::Error),
    Schema(SchemaError),
}

impl LoadError {
    /// The single user-facing message shown in place of the board.
    pub fn message(&self, labels: &Labels) -> String {
        match self {
            LoadError::Status(code) => format!("{} (HTTP {code})", labels.load_failed),
            LoadError::Http(e) => format!("{}: {e}", labels.load_failed),
            LoadError::Io(e) => format!("{}: {e}", labels.load_failed),
            LoadError::Json(e) => format!("{}: {e}", labels.load_failed),
            LoadError::Schema(e) => e.message(labels),
        }
    }
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Http(e) => write!(f, "HTTP error: {e}"),
            LoadError::Status(code) => write!(f, "could not load data (HTTP {code})"),
            LoadError::Io(e) => write!(f, "I/O error: {e}"),
            LoadError::Json(e) => write!(f, "invalid JSON: {e}"),
            LoadError::Schema(e) => write!(f, "schema error: {e}"),
        }
    }
}

impl std::error::Error for LoadError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::Language;
    use std::sync::atomic::{AtomicU64, Ordering};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

    fn temp_json(contents: &str) -> PathBuf {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let path = std::env::temp_dir().join(format!(
            "progressboard_test_{}_{}.json",
            std::process::id(),
            id
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    /// Answer one HTTP request on `listener` and return its request line.
    async fn serve_once(listener: TcpListener, status: &str, body: &str) -> String {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut chunk = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..n]);
        }
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
        String::from_utf8_lossy(&request)
            .lines()
            .next()
            .unwrap_or_default()
            .to_string()
    }

    fn client_for(url: &str, cache_bust: bool) -> ProgressClient {
        ProgressClient::new(&SourceConfig {
            url: url.to_string(),
            cache_bust,
            timeout_secs: None,
        })
        .unwrap()
    }

    #[test]
    fn location_parsing() {
        assert_eq!(
            Location::parse("https://example.org/progress.json"),
            Location::Http("https://example.org/progress.json".into())
        );
        assert_eq!(
            Location::parse("file:///tmp/progress.json"),
            Location::File(PathBuf::from("/tmp/progress.json"))
        );
        assert_eq!(
            Location::parse("data/progress.json"),
            Location::File(PathBuf::from("data/progress.json"))
        );
    }

    #[test]
    fn cache_busting_parameter() {
        let client = client_for("http://localhost/progress.json", true);
        assert_eq!(
            client.request_url("http://localhost/progress.json", 1700000000123),
            "http://localhost/progress.json?ts=1700000000123"
        );
        assert_eq!(
            client.request_url("http://localhost/p.json?v=2", 5),
            "http://localhost/p.json?v=2&ts=5"
        );

        let plain = client_for("http://localhost/progress.json", false);
        assert_eq!(
            plain.request_url("http://localhost/progress.json", 5),
            "http://localhost/progress.json"
        );
    }

    #[test]
    fn status_error_message() {
        let err = LoadError::Status(404);
        assert_eq!(
            err.message(Language::It.labels()),
            "Impossibile caricare i dati (HTTP 404)"
        );
        assert_eq!(
            err.message(Language::En.labels()),
            "Could not load data (HTTP 404)"
        );
        assert_eq!(err.to_string(), "could not load data (HTTP 404)");
    }

    #[tokio::test]
    async fn http_error_status_becomes_status_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(serve_once(listener, "404 Not Found", ""));

        let client = client_for(&format!("http://{addr}/progress.json"), true);
        let err = client.load(Language::It.labels()).await.unwrap_err();
        assert!(matches!(err, LoadError::Status(404)), "got {err}");

        let request_line = server.await.unwrap();
        assert!(
            request_line.starts_with("GET /progress.json?ts="),
            "request line: {request_line}"
        );
    }

    #[tokio::test]
    async fn http_document_is_loaded() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(serve_once(
            listener,
            "200 OK",
            r#"{"done": 25, "total": 100, "updated": "ieri"}"#,
        ));

        let client = client_for(&format!("http://{addr}/stats.json?v=2"), true);
        let board = client.load(Language::It.labels()).await.unwrap();
        assert_eq!(board.updated(), Some("ieri"));
        assert!(matches!(board, Board::SingleMetric(ref m) if m.pct() == 25.0));

        let request_line = server.await.unwrap();
        assert!(
            request_line.starts_with("GET /stats.json?v=2&ts="),
            "request line: {request_line}"
        );
    }

    #[tokio::test]
    async fn http_without_cache_busting_requests_plain_url() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(serve_once(listener, "200 OK", "{ not json"));

        let client = client_for(&format!("http://{addr}/progress.json"), false);
        assert!(matches!(client.fetch().await, Err(LoadError::Json(_))));
        assert_eq!(server.await.unwrap(), "GET /progress.json HTTP/1.1");
    }

    #[tokio::test]
    async fn loads_portfolio_from_file() {
        let path = temp_json(
            r#"{"title": "Paceco", "projects": [
                {"title": "Battesimi", "total": 10, "partial": 7, "complete": 9}
            ]}"#,
        );
        let client = client_for(&path.display().to_string(), true);
        let board = client.load(Language::It.labels()).await.unwrap();
        let Board::Portfolio(p) = board else {
            panic!("expected portfolio board");
        };
        assert_eq!(p.title.as_deref(), Some("Paceco"));
        assert_eq!(p.projects[0].partial, 9.0);
        assert_eq!(format!("{:.1}", p.aggregate.coverage_pct), "90.0");
        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn missing_projects_fails_with_one_error() {
        let path = temp_json(r#"{"title": "Paceco", "updated": "oggi"}"#);
        let client = client_for(&format!("file://{}", path.display()), true);
        let err = client.load(Language::It.labels()).await.unwrap_err();
        assert!(matches!(err, LoadError::Schema(SchemaError::ExpectedPortfolio)));
        assert_eq!(
            err.message(Language::It.labels()),
            "il documento deve contenere: { title, updated, credit, projects: [...] }"
        );
        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn invalid_json_and_missing_file() {
        let path = temp_json("{ not json");
        let client = client_for(&path.display().to_string(), false);
        assert!(matches!(client.fetch().await, Err(LoadError::Json(_))));
        let _ = std::fs::remove_file(&path);

        let missing = std::env::temp_dir().join("progressboard_definitely_missing.json");
        let client = client_for(&missing.display().to_string(), false);
        assert!(matches!(client.fetch().await, Err(LoadError::Io(_))));
    }
}
