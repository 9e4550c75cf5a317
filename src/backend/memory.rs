// file: src/backend/memory.rs
// description: in-process term-matching backend for dry runs and tests

use crate::backend::SearchBackend;
use crate::error::Result;
use crate::models::{Document, SearchResult};
use async_trait::async_trait;
use std::collections::HashSet;
use std::time::Instant;
use tokio::sync::RwLock;
use tracing::debug;

const NAME: &str = "memory";

/// Matches lowercase alphanumeric terms. A document hits when it shares at
/// least one term with the query; more shared terms rank first, ties keep
/// insertion order.
#[derive(Default)]
pub struct InMemoryBackend {
    documents: RwLock<Vec<Document>>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

fn terms(text: &str) -> HashSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

#[async_trait]
impl SearchBackend for InMemoryBackend {
    fn name(&self) -> &str {
        NAME
    }

    async fn setup(&self) -> Result<()> {
        Ok(())
    }

    async fn index_document(&self, content: &str, title: &str) -> Result<()> {
        self.documents
            .write()
            .await
            .push(Document::new(title, content));
        Ok(())
    }

    async fn search(&self, query: &str, limit: usize) -> Result<SearchResult> {
        let start = Instant::now();
        let wanted = terms(query);
        let documents = self.documents.read().await;

        let mut scored: Vec<(usize, &Document)> = documents
            .iter()
            .filter_map(|doc| {
                let mut present = terms(&doc.content);
                present.extend(terms(&doc.title));
                let score = wanted.intersection(&present).count();
                (score > 0).then_some((score, doc))
            })
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        let titles = scored
            .into_iter()
            .take(limit)
            .map(|(_, doc)| doc.title.clone())
            .collect::<Vec<_>>();

        debug!("Query {:?} matched {} documents", query, titles.len());
        Ok(SearchResult::new(titles, start.elapsed()))
    }
}
