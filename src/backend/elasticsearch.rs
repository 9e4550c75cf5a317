// file: src/backend/elasticsearch.rs
// description: Elasticsearch backend speaking the REST API over reqwest
// reference: https://www.elastic.co/guide/en/elasticsearch/reference/current/rest-apis.html

use crate::backend::SearchBackend;
use crate::config::ElasticsearchConfig;
use crate::error::{BenchError, Result};
use crate::models::SearchResult;
use crate::utils::Validator;
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;
use tracing::{debug, info, warn};

const NAME: &str = "elasticsearch";
const ALREADY_EXISTS: &str = "resource_already_exists_exception";

#[derive(Debug, Serialize)]
struct IndexedDocument<'a> {
    content: &'a str,
    title: &'a str,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    hits: HitsEnvelope,
}

#[derive(Debug, Deserialize)]
struct HitsEnvelope {
    #[serde(default)]
    hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
struct Hit {
    #[serde(rename = "_id", default)]
    id: Option<String>,
    #[serde(rename = "_source", default)]
    source: Option<HitSource>,
}

#[derive(Debug, Deserialize)]
struct HitSource {
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorCause,
}

#[derive(Debug, Deserialize)]
struct ErrorCause {
    #[serde(rename = "type")]
    kind: String,
}

pub struct ElasticsearchBackend {
    client: Client,
    addresses: Vec<String>,
    next_node: AtomicUsize,
    config: ElasticsearchConfig,
}

impl ElasticsearchBackend {
    pub fn new(config: ElasticsearchConfig) -> Result<Self> {
        if config.addresses.is_empty() {
            return Err(BenchError::Config(
                "Elasticsearch needs at least one address".to_string(),
            ));
        }
        for address in &config.addresses {
            Validator::validate_url(address)?;
        }
        Validator::validate_index_name(&config.index_name)?;

        let client = Client::builder()
            .build()
            .map_err(|e| BenchError::Config(format!("Failed to build HTTP client: {}", e)))?;

        let addresses = config
            .addresses
            .iter()
            .map(|a| a.trim_end_matches('/').to_string())
            .collect();

        Ok(Self {
            client,
            addresses,
            next_node: AtomicUsize::new(0),
            config,
        })
    }

    /// Round-robin over the configured nodes, one node per request.
    fn node(&self) -> &str {
        let idx = self.next_node.fetch_add(1, Ordering::Relaxed) % self.addresses.len();
        &self.addresses[idx]
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.node(), path);
        debug!("{} {}", method, url);

        let builder = self.client.request(method, url);
        match &self.config.username {
            Some(username) => builder.basic_auth(username, self.config.password.as_deref()),
            None => builder,
        }
    }

    fn index_path(&self, suffix: &str) -> String {
        if suffix.is_empty() {
            self.config.index_name.clone()
        } else {
            format!("{}/{}", self.config.index_name, suffix)
        }
    }
}

fn index_mapping() -> Value {
    json!({
        "mappings": {
            "properties": {
                "content": { "type": "text" },
                "title": { "type": "text" }
            }
        }
    })
}

fn search_body(query: &str, limit: usize) -> Value {
    json!({
        "size": limit,
        "query": {
            "multi_match": {
                "query": query,
                "fields": ["content", "title"]
            }
        }
    })
}

fn is_already_exists(status: StatusCode, body: &str) -> bool {
    status == StatusCode::BAD_REQUEST
        && serde_json::from_str::<ErrorResponse>(body)
            .map(|e| e.error.kind == ALREADY_EXISTS)
            .unwrap_or(false)
}

/// Titles in hit order, capped at `limit`. Hits without a title are skipped.
fn extract_titles(response: SearchResponse, limit: usize) -> Vec<String> {
    response
        .hits
        .hits
        .into_iter()
        .filter_map(|hit| {
            let title = hit.source.and_then(|s| s.title);
            if title.is_none() {
                warn!("Search hit {:?} has no title field, skipping", hit.id);
            }
            title
        })
        .take(limit)
        .collect()
}

async fn failure_text(response: Response) -> String {
    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|e| format!("unreadable body: {}", e));
    format!("status {}: {}", status, body)
}

#[async_trait]
impl SearchBackend for ElasticsearchBackend {
    fn name(&self) -> &str {
        NAME
    }

    async fn setup(&self) -> Result<()> {
        info!("Creating index {}", self.config.index_name);

        let response = self
            .request(Method::PUT, &self.index_path(""))
            .json(&index_mapping())
            .send()
            .await
            .map_err(|e| BenchError::setup(NAME, e))?;

        let status = response.status();
        if status.is_success() {
            info!("Index {} created", self.config.index_name);
            return Ok(());
        }

        let body = response.text().await.map_err(|e| BenchError::setup(NAME, e))?;
        if is_already_exists(status, &body) {
            info!("Index {} already exists", self.config.index_name);
            return Ok(());
        }

        Err(BenchError::setup(NAME, format!("status {}: {}", status, body)))
    }

    async fn index_document(&self, content: &str, title: &str) -> Result<()> {
        let mut request = self
            .request(Method::POST, &self.index_path("_doc"))
            .json(&IndexedDocument { content, title });
        if self.config.refresh_on_index {
            request = request.query(&[("refresh", "wait_for")]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| BenchError::index(NAME, e))?;

        if !response.status().is_success() {
            return Err(BenchError::index(NAME, failure_text(response).await));
        }

        debug!("Indexed document: {}", title);
        Ok(())
    }

    async fn search(&self, query: &str, limit: usize) -> Result<SearchResult> {
        let start = Instant::now();

        let response = self
            .request(Method::POST, &self.index_path("_search"))
            .json(&search_body(query, limit))
            .send()
            .await
            .map_err(|e| BenchError::search(NAME, e))?;

        if !response.status().is_success() {
            return Err(BenchError::search(NAME, failure_text(response).await));
        }

        let decoded: SearchResponse = response
            .json()
            .await
            .map_err(|e| BenchError::search(NAME, format!("Failed to decode response: {}", e)))?;

        let titles = extract_titles(decoded, limit);
        let elapsed = start.elapsed();
        debug!("Query {:?} returned {} hits in {:?}", query, titles.len(), elapsed);
        Ok(SearchResult::new(titles, elapsed))
    }
}
