use crate::core::{ConfigProvider, DrawResult, ResultsSource};
use crate::utils::error::{FetchError, PlayWheError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

pub const DEFAULT_API_BASE: &str = "http://api.playwhesmarter.com";

/// Reads the latest draws from `GET <base>/results?limit=N`.
#[derive(Debug, Clone)]
pub struct ResultsClient {
    client: Client,
    base_url: Url,
    callback: Option<String>,
}

impl ResultsClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            client: Client::new(),
            base_url: parse_base(base_url)?,
            callback: None,
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(seconds) = config.timeout_seconds() {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = builder.build().map_err(FetchError::Transport)?;

        Ok(Self {
            client,
            base_url: parse_base(config.api_base_url())?,
            callback: config.jsonp_callback().map(str::to_string),
        })
    }

    /// Ask for a JSONP response wrapped in `callback(...)`.
    pub fn with_callback(mut self, callback: impl Into<String>) -> Self {
        self.callback = Some(callback.into());
        self
    }

    pub fn results_url(&self, limit: usize) -> Result<Url> {
        let mut url = self
            .base_url
            .join("results")
            .map_err(|e| PlayWheError::ConfigError {
                message: format!("cannot build results URL from {}: {}", self.base_url, e),
            })?;
        {
            let mut query = url.query_pairs_mut();
            if let Some(callback) = &self.callback {
                query.append_pair("callback", callback);
            }
            query.append_pair("limit", &limit.to_string());
        }
        Ok(url)
    }

    pub async fn fetch_latest(&self, limit: usize) -> Result<Vec<DrawResult>> {
        let url = self.results_url(limit)?;
        tracing::debug!("Requesting latest results from: {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(FetchError::Transport)?;

        tracing::debug!("Results API response status: {}", response.status());
        if !response.status().is_success() {
            return Err(FetchError::Status {
                status: response.status().as_u16(),
                url: url.to_string(),
            }
            .into());
        }

        let body = response.text().await.map_err(FetchError::Transport)?;
        let results = decode_results(&body, self.callback.as_deref())?;
        tracing::debug!("Decoded {} draw results", results.len());

        Ok(results)
    }
}

#[async_trait]
impl ResultsSource for ResultsClient {
    async fn fetch_latest(&self, limit: usize) -> Result<Vec<DrawResult>> {
        ResultsClient::fetch_latest(self, limit).await
    }
}

fn parse_base(base_url: &str) -> Result<Url> {
    // A base without a trailing slash would lose its last path segment on join.
    let normalized = if base_url.ends_with('/') {
        base_url.to_string()
    } else {
        format!("{}/", base_url)
    };

    let url = Url::parse(&normalized).map_err(|e| PlayWheError::InvalidConfigValueError {
        field: "api.base_url".to_string(),
        value: base_url.to_string(),
        reason: format!("Invalid URL format: {}", e),
    })?;

    // Joining "results" onto the base would silently drop its query.
    if url.query().is_some() {
        return Err(PlayWheError::InvalidConfigValueError {
            field: "api.base_url".to_string(),
            value: base_url.to_string(),
            reason: "Base URL must not carry a query string".to_string(),
        });
    }

    Ok(url)
}

/// Accepts a bare JSON array, or `callback([...])` when a callback is set.
pub fn decode_results(body: &str, callback: Option<&str>) -> Result<Vec<DrawResult>> {
    let trimmed = body.trim();
    let json = match callback {
        Some(name) if !trimmed.starts_with('[') => unwrap_jsonp(trimmed, name)?,
        _ => trimmed,
    };

    let results: Vec<DrawResult> = serde_json::from_str(json).map_err(FetchError::Decode)?;
    Ok(results)
}

fn unwrap_jsonp<'a>(body: &'a str, callback: &str) -> Result<&'a str> {
    let missing = || FetchError::Callback {
        expected: callback.to_string(),
    };

    let inner = body
        .strip_prefix(callback)
        .map(str::trim_start)
        .and_then(|rest| rest.strip_prefix('('))
        .ok_or_else(missing)?;
    let inner = inner.trim_end();
    let inner = inner.strip_suffix(';').unwrap_or(inner).trim_end();
    let inner = inner.strip_suffix(')').ok_or_else(missing)?;

    Ok(inner)
}
