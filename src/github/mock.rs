//! In-process stand-in for the GitHub REST API, bound on `127.0.0.1:0`

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, Uri, header},
    response::{IntoResponse, Response},
    routing::get,
};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// One request seen by the mock
#[derive(Debug, Clone)]
pub struct Hit {
    pub path: String,
    pub accept: String,
    pub user_agent: String,
}

#[derive(Default)]
pub struct MockGithub {
    repos: HashMap<String, Value>,
    files: HashMap<String, String>,
}

struct MockState {
    repos: HashMap<String, Value>,
    files: HashMap<String, String>,
    hits: Mutex<Vec<Hit>>,
}

pub struct MockServer {
    pub base: String,
    state: Arc<MockState>,
}

impl MockServer {
    pub fn hits(&self) -> Vec<Hit> {
        self.state.hits.lock().unwrap().clone()
    }
}

impl MockGithub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `owner/name` with fixed counts (42 stars, 7 forks, 3 issues)
    pub fn repo(mut self, full_name: &str, language: Option<&str>) -> Self {
        let (owner, name) = full_name.split_once('/').unwrap();
        self.repos.insert(
            full_name.to_string(),
            json!({
                "name": name,
                "full_name": full_name,
                "owner": {"login": owner},
                "stargazers_count": 42,
                "forks_count": 7,
                "open_issues_count": 3,
                "language": language,
            }),
        );
        self
    }

    /// Serve `text` base64-encoded and wrapped at 60 columns, like the real API
    pub fn file(self, full_name: &str, file_name: &str, text: &str) -> Self {
        let encoded = STANDARD.encode(text);
        let wrapped = encoded
            .as_bytes()
            .chunks(60)
            .map(|chunk| std::str::from_utf8(chunk).unwrap())
            .collect::<Vec<_>>()
            .join("\n");
        self.raw_file(full_name, file_name, &wrapped)
    }

    /// Serve `content` verbatim in the `content` field
    pub fn raw_file(mut self, full_name: &str, file_name: &str, content: &str) -> Self {
        self.files
            .insert(format!("{}/{}", full_name, file_name), content.to_string());
        self
    }

    pub async fn start(self) -> MockServer {
        let state = Arc::new(MockState {
            repos: self.repos,
            files: self.files,
            hits: Mutex::new(Vec::new()),
        });

        let router = Router::new()
            .route("/repos/{owner}/{repo}", get(repository))
            .route("/repos/{owner}/{repo}/contents/{file}", get(contents))
            .with_state(state.clone());

        MockServer {
            base: spawn(router).await,
            state,
        }
    }
}

/// Serve `router` on an ephemeral port and return its base URL
pub async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// A deployment target: `/ok` answers 200, `/down` answers 503
pub async fn spawn_site() -> String {
    let router = Router::new()
        .route("/ok", get(|| async { "up" }))
        .route("/down", get(|| async { StatusCode::SERVICE_UNAVAILABLE }));
    spawn(router).await
}

fn record(state: &MockState, uri: &Uri, headers: &HeaderMap) {
    let value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    };
    state.hits.lock().unwrap().push(Hit {
        path: uri.path().to_string(),
        accept: value(header::ACCEPT),
        user_agent: value(header::USER_AGENT),
    });
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({"message": "Not Found"}))).into_response()
}

async fn repository(
    State(state): State<Arc<MockState>>,
    Path((owner, repo)): Path<(String, String)>,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    record(&state, &uri, &headers);
    match state.repos.get(&format!("{}/{}", owner, repo)) {
        Some(metadata) => Json(metadata.clone()).into_response(),
        None => not_found(),
    }
}

async fn contents(
    State(state): State<Arc<MockState>>,
    Path((owner, repo, file)): Path<(String, String, String)>,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    record(&state, &uri, &headers);
    match state.files.get(&format!("{}/{}/{}", owner, repo, file)) {
        Some(content) => Json(json!({
            "name": file,
            "encoding": "base64",
            "content": content,
        }))
        .into_response(),
        None => not_found(),
    }
}
