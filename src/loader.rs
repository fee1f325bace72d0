//! Remote CSV fetching and dataset construction.
//!
//! One load runs rename -> row exclusion -> derived columns -> projection
//! and either yields the full presented frame or fails with
//! [`DashboardError::DataUnavailable`]. There is no retry; the panel
//! surfaces the failure.

use std::io::Cursor;
use std::time::Duration;

use polars::prelude::*;

use crate::dataset::DatasetSpec;
use crate::error::DashboardError;

/// Request timeout in seconds for dataset downloads.
const FETCH_TIMEOUT_SECS: u64 = 30;

/// How the loader obtains raw CSV text. The cache injects an HTTP
/// implementation; tests supply canned payloads.
pub trait Fetch {
    fn fetch_csv(&self, url: &str) -> Result<String, DashboardError>;
}

/// Blocking HTTP fetcher. The fetch is the only blocking operation in
/// the app; once a request starts it runs to completion or timeout.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");
        Self { client }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetch for HttpFetcher {
    fn fetch_csv(&self, url: &str) -> Result<String, DashboardError> {
        log::debug!("fetching {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| DashboardError::unavailable(format!("request to {} failed: {}", url, e)))?;
        if !response.status().is_success() {
            return Err(DashboardError::unavailable(format!(
                "request to {} returned status {}",
                url,
                response.status()
            )));
        }
        response
            .text()
            .map_err(|e| DashboardError::unavailable(format!("reading body of {} failed: {}", url, e)))
    }
}

/// Fetch and build one dataset per its spec. The returned frame is
/// immutable for the rest of the session; only the cache holds it.
pub fn load_dataset(spec: &DatasetSpec, fetcher: &dyn Fetch) -> Result<DataFrame, DashboardError> {
    let body = fetcher.fetch_csv(spec.url)?;
    let mut df = parse_csv(&body).map_err(|e| {
        DashboardError::unavailable(format!("{}: malformed payload: {}", spec.title, e))
    })?;

    for (source, target) in spec.renames {
        df.rename(source, target).map_err(|e| {
            DashboardError::unavailable(format!("{}: missing source column: {}", spec.title, e))
        })?;
    }

    let mut lf = df.lazy();
    if let Some(rule) = &spec.exclude {
        // pandas-style `!=`: rows with a null in the excluded column stay.
        lf = lf.filter(col(rule.column).neq(lit(rule.value)).or(col(rule.column).is_null()));
    }
    for derived in spec.derived {
        // cast first: an entirely-null source column infers as String
        // and arithmetic on it would fail the whole load
        lf = lf.with_column(
            (col(derived.source).cast(DataType::Float64) * lit(derived.scale))
                .alias(derived.name),
        );
    }
    lf = lf.select(spec.projection.iter().map(|c| col(c)).collect::<Vec<_>>());

    lf.collect()
        .map_err(|e| DashboardError::unavailable(format!("{}: {}", spec.title, e)))
}

fn parse_csv(body: &str) -> PolarsResult<DataFrame> {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(10_000))
        .into_reader_with_file_handle(Cursor::new(body.as_bytes()))
        .finish()
}
