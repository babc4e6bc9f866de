use crate::core::render::OutputFormat;
use crate::domain::model::DrawResult;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Anything that can hand back the most recent draws, newest first.
#[async_trait]
pub trait ResultsSource: Send + Sync {
    async fn fetch_latest(&self, limit: usize) -> Result<Vec<DrawResult>>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn limit(&self) -> usize;
    fn timeout_seconds(&self) -> Option<u64>;
    fn jsonp_callback(&self) -> Option<&str>;
    fn clock_time(&self) -> bool;
    fn output_format(&self) -> OutputFormat;
}
