use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use order_viewer::config::parse_base_url;
use order_viewer::view::terminal::write_page;
use order_viewer::{build_result_page, AppConfig, AppError, HttpOrderClient, PageState, SearchPage};

#[derive(Parser)]
#[command(name = "order_viewer")]
#[command(version, about = "Look up an order by uid and print it")]
struct Cli {
    /// Order service base URL (overrides ORDER_API_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Render dates in UTC instead of the local time zone
    #[arg(long, global = true)]
    utc: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate an order uid, then open its result page
    Search { raw: String },
    /// Open a result page location, e.g. "/result.html?order_uid=..."
    Open { location: String },
    /// Query the order service health endpoint
    Health,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    match run(Cli::parse()).await {
        Ok(code) => code,
        Err(e) => {
            if let AppError::Fetch(fetch) = &e {
                log::error!("{}", fetch.detail());
            }
            eprintln!("{}", e);
            ExitCode::from(e.exit_status())
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode, AppError> {
    let mut config = AppConfig::from_env()?;
    if let Some(raw) = &cli.base_url {
        config.api_base_url = parse_base_url(raw)?;
    }
    if cli.utc {
        config.display_utc = true;
    }

    match cli.command {
        Command::Search { raw } => {
            let location = SearchPage.submit(&raw)?;
            writeln!(io::stdout().lock(), "{}", location)?;
            open(&config, &location).await
        }
        Command::Open { location } => open(&config, &location).await,
        Command::Health => health(&config).await,
    }
}

async fn open(config: &AppConfig, location: &str) -> Result<ExitCode, AppError> {
    log::info!("Opening {} against {}", location, config.api_base_url);

    let mut page = build_result_page(config);
    let state = page.open(location).await;
    write_page(page.surface(), &mut io::stdout().lock())?;

    Ok(match state {
        PageState::Result => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    })
}

async fn health(config: &AppConfig) -> Result<ExitCode, AppError> {
    let client = HttpOrderClient::new(config.api_base_url.clone());
    log::info!("Checking health of {}", client.base_url());
    let status = client.health().await?;

    let mut out = io::stdout().lock();
    writeln!(out, "status: {}", status.status)?;
    if let Some(service) = &status.service {
        writeln!(out, "service: {}", service)?;
    }
    if let Some(timestamp) = &status.timestamp {
        writeln!(out, "timestamp: {}", timestamp)?;
    }
    Ok(ExitCode::SUCCESS)
}
