use crate::core::formatter::format_results;
use crate::core::{DrawResult, FormattedResult, ResultsSource};
use crate::utils::error::Result;

/// Holds the draws currently on display and refreshes them from a source.
pub struct ResultsBoard<S: ResultsSource> {
    source: S,
    results: Vec<DrawResult>,
}

impl<S: ResultsSource> ResultsBoard<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            results: Vec::new(),
        }
    }

    /// Replaces the board with the latest `limit` draws.
    ///
    /// On failure the previous draws stay in place and the error is
    /// returned unchanged.
    pub async fn refresh(&mut self, limit: usize) -> Result<usize> {
        match self.source.fetch_latest(limit).await {
            Ok(results) => {
                tracing::debug!("Board refreshed with {} draws", results.len());
                self.results = results;
                Ok(self.results.len())
            }
            Err(e) => {
                tracing::warn!(
                    "Refresh failed, keeping {} previous draws: {}",
                    self.results.len(),
                    e
                );
                Err(e)
            }
        }
    }

    pub fn results(&self) -> &[DrawResult] {
        &self.results
    }

    pub fn formatted(&self, as_clock_time: bool) -> Result<Vec<FormattedResult>> {
        format_results(&self.results, as_clock_time)
    }
}
