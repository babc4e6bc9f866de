use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::core::render::OutputFormat;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "playwhe")]
#[command(about = "Show the latest Play Whe results")]
pub struct CliConfig {
    /// TOML file with [api] and [display] settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Base URL of the results API
    #[arg(long)]
    pub api_base: Option<String>,

    /// Number of most recent draws to show
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Request a JSONP response wrapped in this callback
    #[arg(long)]
    pub callback: Option<String>,

    /// Show draw times (10:30 AM) instead of period names (Morning)
    #[arg(long, conflicts_with = "no_clock_time")]
    pub clock_time: bool,

    /// Show period names even when the config file asks for clock time
    #[arg(long)]
    pub no_clock_time: bool,

    /// Output format: text, json or csv
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Print "active" if the named nav section matches --nav-path, then exit
    #[arg(long, requires = "nav_path")]
    pub nav_section: Option<String>,

    #[arg(long, requires = "nav_section")]
    pub nav_path: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl CliConfig {
    /// Defaults, then the config file, then command-line flags.
    pub fn resolve(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from: {}", path.display());
                Settings::from_toml(&TomlConfig::from_file(path)?)?
            }
            None => Settings::default(),
        };

        if let Some(api_base) = &self.api_base {
            settings.api_base_url = api_base.clone();
        }
        if let Some(limit) = self.limit {
            settings.limit = limit;
        }
        if self.timeout_seconds.is_some() {
            settings.timeout_seconds = self.timeout_seconds;
        }
        if let Some(callback) = &self.callback {
            settings.jsonp_callback = Some(callback.clone());
        }
        if self.clock_time {
            settings.clock_time = true;
        } else if self.no_clock_time {
            settings.clock_time = false;
        }
        if let Some(format) = self.format {
            settings.output_format = format;
        }

        Ok(settings)
    }
}
