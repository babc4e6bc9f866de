use clap::Parser;
use playwhe_smarter::core::navigation::is_active_by_name;
use playwhe_smarter::core::render::render;
use playwhe_smarter::core::ConfigProvider;
use playwhe_smarter::utils::{logger, validation::Validate};
use playwhe_smarter::{CliConfig, PlayWheError, ResultsBoard, ResultsClient, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    if let (Some(section), Some(path)) = (&cli.nav_section, &cli.nav_path) {
        let class = if is_active_by_name(section, path) { "active" } else { "" };
        println!("{}", class);
        return Ok(());
    }

    let settings = match cli.resolve().and_then(|settings| {
        settings.validate()?;
        Ok(settings)
    }) {
        Ok(settings) => settings,
        Err(e) => exit_with(e),
    };
    tracing::debug!("Effective settings: {:?}", settings);

    if let Err(e) = run(&settings).await {
        exit_with(e);
    }

    Ok(())
}

async fn run(settings: &Settings) -> playwhe_smarter::Result<()> {
    let client = ResultsClient::from_config(settings)?;
    let mut board = ResultsBoard::new(client);

    tracing::info!(
        "Fetching {} latest results from {}",
        settings.limit(),
        settings.api_base_url()
    );
    let count = board.refresh(settings.limit()).await?;
    tracing::info!("Fetched {} results", count);

    let formatted = board.formatted(settings.clock_time())?;
    let output = render(&formatted, settings.output_format())?;
    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}

fn exit_with(e: PlayWheError) -> ! {
    tracing::error!("{} (Category: {:?})", e, e.category());
    tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("error: {}", e.user_friendly_message());
    eprintln!("hint: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
