//! Where the table gets its rows from.

use async_trait::async_trait;

use crate::db::DbPool;
use crate::error::AppError;
use crate::models::Laporan;

/// Path of the listing endpoint, relative to the server root.
pub const LAPORAN_ENDPOINT: &str = "/api/laporan";

/// Failure to obtain rows for the table.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Transport or body decoding failure
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    /// In-process store failure
    #[error(transparent)]
    Store(#[from] AppError),
}

/// Provider of the full, ordered laporan collection.
#[async_trait]
pub trait ReportSource: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<Laporan>, FetchError>;
}

/// Fetches rows from a running server over HTTP.
#[derive(Clone)]
pub struct HttpReportSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpReportSource {
    /// Create a source for the server at `base_url` (e.g. `http://localhost:8080`).
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), LAPORAN_ENDPOINT),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ReportSource for HttpReportSource {
    async fn fetch_all(&self) -> Result<Vec<Laporan>, FetchError> {
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        Ok(response.json::<Vec<Laporan>>().await?)
    }
}

/// Reads rows straight from the database, for pages rendered by this server.
#[derive(Clone)]
pub struct StoreReportSource {
    pool: DbPool,
}

impl StoreReportSource {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportSource for StoreReportSource {
    async fn fetch_all(&self) -> Result<Vec<Laporan>, FetchError> {
        Ok(self.pool.list_laporan().await?)
    }
}
