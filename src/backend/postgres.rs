// file: src/backend/postgres.rs
// description: PostgreSQL tsvector/tsquery backend over a sqlx connection pool
// reference: https://docs.rs/sqlx

use crate::backend::SearchBackend;
use crate::config::{PostgresConfig, QueryParser};
use crate::error::{BenchError, Result};
use crate::models::SearchResult;
use async_trait::async_trait;
use futures::TryStreamExt;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::time::Instant;
use tracing::{debug, info};

const NAME: &str = "postgres";

pub struct PostgresBackend {
    pool: PgPool,
    statements: Statements,
    config: PostgresConfig,
}

/// SQL text for each operation, rendered once from the configured names.
#[derive(Debug, Clone)]
struct Statements {
    create_table: String,
    create_index: String,
    insert: String,
    search: String,
}

impl Statements {
    fn render(table: &str, index: &str, parser: QueryParser) -> Self {
        Self {
            create_table: format!(
                "CREATE TABLE IF NOT EXISTS {table} (\
                 id SERIAL PRIMARY KEY, \
                 content TEXT, \
                 title TEXT, \
                 search_vector tsvector)"
            ),
            create_index: format!(
                "CREATE INDEX IF NOT EXISTS {index} ON {table} USING GIN(search_vector)"
            ),
            insert: format!(
                "INSERT INTO {table} (content, title, search_vector) \
                 VALUES ($1, $2, to_tsvector($3::regconfig, $1 || ' ' || $2))"
            ),
            search: format!(
                "SELECT title FROM {table} \
                 WHERE search_vector @@ {parser}($1::regconfig, $2) \
                 LIMIT $3",
                parser = parser.function_name()
            ),
        }
    }
}

impl PostgresBackend {
    /// Builds a lazily connected pool; an unreachable server only shows up on first use.
    pub fn new(config: PostgresConfig) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect_lazy(&config.connection_string)
            .map_err(|e| BenchError::Config(format!("Invalid PostgreSQL connection string: {}", e)))?;

        let statements =
            Statements::render(&config.table_name, &config.index_name, config.query_parser);

        Ok(Self {
            pool,
            statements,
            config,
        })
    }
}

#[async_trait]
impl SearchBackend for PostgresBackend {
    fn name(&self) -> &str {
        NAME
    }

    async fn setup(&self) -> Result<()> {
        info!("Ensuring table {} exists", self.config.table_name);
        sqlx::query(&self.statements.create_table)
            .execute(&self.pool)
            .await
            .map_err(|e| BenchError::setup(NAME, e))?;

        info!("Ensuring full-text index {} exists", self.config.index_name);
        sqlx::query(&self.statements.create_index)
            .execute(&self.pool)
            .await
            .map_err(|e| BenchError::setup(NAME, e))?;

        Ok(())
    }

    async fn index_document(&self, content: &str, title: &str) -> Result<()> {
        sqlx::query(&self.statements.insert)
            .bind(content)
            .bind(title)
            .bind(self.config.text_search_config.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| BenchError::index(NAME, e))?;

        debug!("Inserted document: {}", title);
        Ok(())
    }

    async fn search(&self, query: &str, limit: usize) -> Result<SearchResult> {
        let start = Instant::now();
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);

        let mut rows = sqlx::query_scalar::<_, Option<String>>(&self.statements.search)
            .bind(self.config.text_search_config.as_str())
            .bind(query)
            .bind(limit)
            .fetch(&self.pool);

        let mut titles = Vec::new();
        while let Some(title) = rows.try_next().await.map_err(|e| BenchError::search(NAME, e))? {
            // NULL titles are possible when rows were inserted outside this tool
            if let Some(title) = title {
                titles.push(title);
            }
        }

        let elapsed = start.elapsed();
        debug!("Query {:?} returned {} rows in {:?}", query, titles.len(), elapsed);
        Ok(SearchResult::new(titles, elapsed))
    }

    async fn close(&self) {
        self.pool.close().await;
        debug!("PostgreSQL pool closed");
    }
}
