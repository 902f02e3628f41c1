use std::time::Instant;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{info, warn};

use crate::modules::listing::{
    domain::{entities::RawListing, repositories::ListingSource},
    infrastructure::external::CommonHttpHandler,
};
use crate::shared::{
    config::AppConfig,
    errors::{AppError, AppResult},
    utils::LogContext,
};

const SOURCE_NAME: &str = "Supabase";
const USER_AGENT: &str = "carmarket/0.1";

/// Reads listing rows from a Supabase (PostgREST) table
pub struct SupabaseListingSource {
    client: Client,
    base_url: String,
    api_key: String,
    table: String,
}

impl SupabaseListingSource {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let client = CommonHttpHandler::create_http_client(config.http_timeout, USER_AGENT)?;

        Ok(Self {
            client,
            base_url: config.store_url.trim_end_matches('/').to_string(),
            api_key: config.store_key.clone(),
            table: config.table.clone(),
        })
    }

    /// Newest-first select of every column, capped at `limit` rows
    pub fn request_url(&self, limit: usize) -> String {
        format!(
            "{}/rest/v1/{}?select=*&order=created_date.desc&limit={}",
            self.base_url,
            urlencoding::encode(&self.table),
            limit
        )
    }

    fn into_records(rows: Vec<Value>) -> Vec<RawListing> {
        let total = rows.len();
        let records: Vec<RawListing> = rows.into_iter().filter_map(RawListing::from_value).collect();

        if records.len() < total {
            warn!(
                "{}: skipped {} rows that were not JSON objects",
                SOURCE_NAME,
                total - records.len()
            );
        }
        records
    }
}

#[async_trait]
impl ListingSource for SupabaseListingSource {
    async fn fetch_recent(&self, limit: usize) -> AppResult<Vec<RawListing>> {
        let url = self.request_url(limit);
        let endpoint = format!("/rest/v1/{}", self.table);
        LogContext::api_call(SOURCE_NAME, &endpoint, "request", None);
        let started = Instant::now();

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        LogContext::api_call(
            SOURCE_NAME,
            &endpoint,
            status.as_str(),
            Some(started.elapsed().as_millis() as u64),
        );
        CommonHttpHandler::handle_response_status(status, SOURCE_NAME)?;

        let rows = response
            .json::<Vec<Value>>()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse {} response: {}", SOURCE_NAME, e)))?;

        let records = Self::into_records(rows);
        info!("{}: fetched {} listing rows", SOURCE_NAME, records.len());
        Ok(records)
    }
}
