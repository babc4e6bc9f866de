pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::http::ResultsClient;
pub use crate::config::Settings;
pub use crate::core::board::ResultsBoard;
pub use crate::core::navigation::{is_active, NavigationSection};
pub use crate::core::{DrawResult, FormattedResult, Mark, Period};
pub use crate::utils::error::{FetchError, PlayWheError, Result};
