use crate::Result;
use crate::config::Config;
use crate::error::Error;
use crate::model::catalog::Catalog;
use crate::model::data::{AckRecord, Acknowledgment, AreaInfo, CatalogRecord, OneOrMany};
use crate::model::payload::SubmissionPayload;
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, Response};
use serde_json::Value;
use std::future::Future;
use std::time::Duration;

/// The four automation workflows the wizard talks to.
#[async_trait]
pub trait LeadServices: Send + Sync {
    async fn load_catalog(&self) -> Result<Catalog>;

    /// `Ok(None)` when the resolver answered but had nothing usable.
    async fn resolve_area(&self, zip: &str) -> Result<Option<AreaInfo>>;

    async fn available_time_blocks(&self) -> Result<Vec<String>>;

    async fn submit(&self, payload: &SubmissionPayload<'_>) -> Result<Acknowledgment>;
}

pub struct WebhookClient {
    http: Client,
    config: Config,
}

impl WebhookClient {
    pub fn new(config: Config) -> WebhookClient {
        WebhookClient {
            http: Client::new(),
            config,
        }
    }
}

async fn with_timeout<T>(
    service: &'static str,
    limit: Duration,
    call: impl Future<Output = Result<T>>,
) -> Result<T> {
    tokio::time::timeout(limit, call)
        .await
        .map_err(|_| Error::Timeout {
            service,
            secs: limit.as_secs(),
        })?
}

async fn ok_text(response: Response) -> Result<String> {
    let status = response.status();
    if !status.is_success() {
        return Err(Error::Status(status));
    }
    let text = response.text().await?;
    if text.trim().is_empty() {
        return Err(Error::EmptyResponse);
    }
    Ok(text)
}

/// Values (not keys) of the first object, keeping only strings.
fn time_blocks_from(text: &str) -> Vec<String> {
    let data: Value = match serde_json::from_str(text) {
        Ok(data) => data,
        Err(e) => {
            warn!("availability body is not JSON: {}", e);
            return vec![];
        }
    };
    let first = match data {
        Value::Array(items) => items.into_iter().next(),
        other => Some(other),
    };
    match first {
        Some(Value::Object(map)) => map
            .into_iter()
            .filter_map(|(_, v)| match v {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => vec![],
    }
}

#[async_trait]
impl LeadServices for WebhookClient {
    async fn load_catalog(&self) -> Result<Catalog> {
        let call = async {
            let response = self.http.get(&self.config.INIT_WEBHOOK_URL).send().await?;
            let text = ok_text(response).await?;
            let record = serde_json::from_str::<OneOrMany<CatalogRecord>>(&text)?
                .into_first()
                .ok_or(Error::EmptyResponse)?;
            Ok::<_, Error>(Catalog::from_record(record))
        };
        with_timeout("catalog", self.config.catalog_timeout(), call).await
    }

    async fn resolve_area(&self, zip: &str) -> Result<Option<AreaInfo>> {
        let call = async {
            let response = self
                .http
                .post(&self.config.AREA_WEBHOOK_URL)
                .json(&serde_json::json!({ "zip": zip }))
                .send()
                .await?;
            if !response.status().is_success() {
                debug!("area lookup for {} answered {}", zip, response.status());
                return Ok::<_, Error>(None);
            }
            let text = response.text().await?;
            if text.trim().is_empty() {
                return Ok(None);
            }
            match serde_json::from_str::<OneOrMany<AreaInfo>>(&text) {
                Ok(data) => Ok(data.into_first()),
                Err(e) => {
                    warn!("area lookup body is not valid JSON: {} ({:?})", e, text);
                    Ok(None)
                }
            }
        };
        with_timeout("area resolver", self.config.area_timeout(), call).await
    }

    async fn available_time_blocks(&self) -> Result<Vec<String>> {
        let call = async {
            let response = self.http.get(&self.config.DATES_WEBHOOK_URL).send().await?;
            let text = ok_text(response).await?;
            Ok::<_, Error>(time_blocks_from(&text))
        };
        with_timeout("availability", self.config.dates_timeout(), call).await
    }

    async fn submit(&self, payload: &SubmissionPayload<'_>) -> Result<Acknowledgment> {
        let call = async {
            let response = self
                .http
                .post(&self.config.SUBMIT_WEBHOOK_URL)
                .json(payload)
                .send()
                .await?;
            let text = ok_text(response).await?;
            let record = match serde_json::from_str::<OneOrMany<AckRecord>>(&text) {
                Ok(data) => data.into_first().unwrap_or_default(),
                Err(e) => {
                    debug!("submission body is not valid JSON: {}", e);
                    AckRecord::default()
                }
            };
            record.into_acknowledgment()
        };
        with_timeout("submission", self.config.submit_timeout(), call).await
    }
}
