pub mod board;
pub mod formatter;
pub mod navigation;
pub mod render;

pub use crate::domain::model::{DrawResult, FormattedResult, Mark, Period};
pub use crate::domain::ports::{ConfigProvider, ResultsSource};
pub use crate::utils::error::Result;
