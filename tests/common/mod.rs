//! Shared fixtures: in-memory stores and request helpers.
#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, Response},
    Router,
};
use bookmarks_api::{app, AppError, AppState, Bookmark, BookmarkPatch, BookmarkStore, NewBookmark, Settings};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// BTreeMap-backed store with a monotonically increasing id.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<MemoryInner>,
}

#[derive(Default)]
struct MemoryInner {
    rows: BTreeMap<i64, Bookmark>,
    last_id: i64,
}

impl MemoryStore {
    pub fn with_rows(rows: Vec<Bookmark>) -> Self {
        let last_id = rows.iter().map(|b| b.id).max().unwrap_or(0);
        MemoryStore {
            inner: Mutex::new(MemoryInner {
                rows: rows.into_iter().map(|b| (b.id, b)).collect(),
                last_id,
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().rows.len()
    }

    pub fn get(&self, id: i64) -> Option<Bookmark> {
        self.inner.lock().unwrap().rows.get(&id).cloned()
    }
}

#[async_trait]
impl BookmarkStore for MemoryStore {
    async fn list_all(&self) -> Result<Vec<Bookmark>, AppError> {
        Ok(self.inner.lock().unwrap().rows.values().cloned().collect())
    }

    async fn create(&self, new: &NewBookmark) -> Result<Bookmark, AppError> {
        let mut inner = self.inner.lock().unwrap();
        inner.last_id += 1;
        let row = Bookmark {
            id: inner.last_id,
            title: new.title.clone(),
            url: new.url.clone(),
            description: new.description.clone(),
            rating: new.rating,
        };
        inner.rows.insert(row.id, row.clone());
        Ok(row)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Bookmark>, AppError> {
        Ok(self.get(id))
    }

    async fn update(&self, id: i64, patch: &BookmarkPatch) -> Result<u64, AppError> {
        let mut inner = self.inner.lock().unwrap();
        match inner.rows.get_mut(&id) {
            Some(row) => {
                *row = apply_patch(patch, row);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i64) -> Result<u64, AppError> {
        Ok(self.inner.lock().unwrap().rows.remove(&id).map_or(0, |_| 1))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Merge a patch onto a stored row the way the UPDATE statement does.
pub fn apply_patch(patch: &BookmarkPatch, existing: &Bookmark) -> Bookmark {
    Bookmark {
        id: existing.id,
        title: patch.title.clone().unwrap_or_else(|| existing.title.clone()),
        url: patch.url.clone().unwrap_or_else(|| existing.url.clone()),
        description: patch.description.clone().or_else(|| existing.description.clone()),
        rating: patch.rating.unwrap_or(existing.rating),
    }
}

/// Every call fails the way an unreachable database would.
pub struct FailingStore;

fn down() -> AppError {
    AppError::Storage("connection refused (10.1.2.3:5432)".into())
}

#[async_trait]
impl BookmarkStore for FailingStore {
    async fn list_all(&self) -> Result<Vec<Bookmark>, AppError> {
        Err(down())
    }
    async fn create(&self, _new: &NewBookmark) -> Result<Bookmark, AppError> {
        Err(down())
    }
    async fn get_by_id(&self, _id: i64) -> Result<Option<Bookmark>, AppError> {
        Err(down())
    }
    async fn update(&self, _id: i64, _patch: &BookmarkPatch) -> Result<u64, AppError> {
        Err(down())
    }
    async fn delete(&self, _id: i64) -> Result<u64, AppError> {
        Err(down())
    }
    async fn ping(&self) -> Result<(), AppError> {
        Err(down())
    }
}

pub fn bookmark(id: i64, title: &str, url: &str, description: &str, rating: f64) -> Bookmark {
    Bookmark {
        id,
        title: title.into(),
        url: url.into(),
        description: Some(description.into()),
        rating,
    }
}

pub fn make_bookmarks() -> Vec<Bookmark> {
    vec![
        bookmark(1, "google", "google.com", "google search engine", 4.2),
        bookmark(2, "duckduckgo", "duckduckgo.com", "duckduckgo search engine", 5.0),
        bookmark(3, "yahoo", "yahoo.com", "yahoo search engine", 3.0),
    ]
}

/// (stored, expected after escaping)
pub fn malicious_bookmark() -> (Bookmark, Bookmark) {
    let stored = bookmark(
        911,
        r#"Bad script <script>alert("xss");</script>"#,
        "https://www.nonsense.com",
        r#"bad img <img src="https://www.nonsense.floofer" onerror="alert(document.cookie);"> But not <strong>all</strong> bad."#,
        5.0,
    );
    let expected = bookmark(
        911,
        r#"Bad script &lt;script&gt;alert("xss");&lt;/script&gt;"#,
        "https://www.nonsense.com",
        r#"bad img &lt;img src="https://www.nonsense.floofer" onerror="alert(document.cookie);"&gt; But not &lt;strong&gt;all&lt;/strong&gt; bad."#,
        5.0,
    );
    (stored, expected)
}

pub fn router(store: Arc<dyn BookmarkStore>, settings: &Settings) -> Router {
    app(AppState::new(store), settings)
}

pub struct TestResponse {
    pub status: u16,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("response body is JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("response body is UTF-8")
    }

    pub fn header(&self, name: header::HeaderName) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

pub async fn send(router: &Router, method: &str, uri: &str, body: Option<serde_json::Value>) -> TestResponse {
    send_with(router, method, uri, body, None).await
}

/// Send a body verbatim, JSON or not.
pub async fn send_raw(router: &Router, method: &str, uri: &str, body: &str) -> TestResponse {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    collect(router.clone().oneshot(req).await.unwrap()).await
}

async fn collect(resp: Response<Body>) -> TestResponse {
    let status = resp.status().as_u16();
    let headers = resp.headers().clone();
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap().to_vec();
    TestResponse { status, headers, body }
}

pub async fn send_with(
    router: &Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
    token: Option<&str>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let req = match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    collect(router.clone().oneshot(req).await.unwrap()).await
}
