//! enade-dash CLI entry point

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use enade_dash::api::ApiClient;
use enade_dash::commands;
use enade_dash::{ui, App, Config};
use std::fs::OpenOptions;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "enade-dash", version)]
#[command(about = "Terminal dashboard for ENADE course evaluation results", long_about = None)]
struct Cli {
    /// Config file (default: ~/.enade-dash/config.yml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Backend base URL, overrides the config file
    #[arg(long, global = true)]
    base_url: Option<String>,
    /// Request timeout in seconds, overrides the config file
    #[arg(long, global = true)]
    timeout: Option<u64>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive terminal dashboard
    Dashboard,
    /// Fetch once and print every widget as text
    Report {
        #[arg(long)]
        area: Option<String>,
    },
    /// List course areas
    Areas {
        /// Include areas without UNIFOR courses
        #[arg(long)]
        all: bool,
    },
    /// Show dimensions and their questions
    Metadata,
    /// Show the UNIFOR course of an area
    Course { area: String },
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }
    config.validate()?;
    Ok(config)
}

/// Logs go to a file while the dashboard owns the terminal
fn init_logger(config: &Config, dashboard: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    if dashboard {
        let path = config.log_path();
        if let Some(dir) = path.parent() {
            let _ = std::fs::create_dir_all(dir);
        }
        match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(_) => {
                builder.target(env_logger::Target::Pipe(Box::new(std::io::sink())));
            }
        }
    }

    builder.init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let command = cli.command.unwrap_or(Commands::Dashboard);

    init_logger(&config, matches!(command, Commands::Dashboard));
    log::info!("📊 enade-dash v{}", env!("CARGO_PKG_VERSION"));
    log::debug!("Backend: {}", config.endpoint_url(""));

    match command {
        Commands::Dashboard => {
            let app = App::new(config)?;
            ui::run(app).await?;
        }
        Commands::Report { area } => {
            let text = commands::report(&config, area.as_deref()).await?;
            print!("{}", text);
        }
        Commands::Areas { all } => {
            let client = ApiClient::new(&config)?;
            let areas = client.areas().await.context("fetching areas")?;
            print!("{}", commands::format_areas(&areas, all));
        }
        Commands::Metadata => {
            let client = ApiClient::new(&config)?;
            let metadata = client.metadata().await.context("fetching metadata")?;
            print!("{}", commands::format_metadata(&metadata));
        }
        Commands::Course { area } => {
            let client = ApiClient::new(&config)?;
            let detail = client
                .course_detail(&area)
                .await
                .with_context(|| format!("fetching course detail for {}", area))?;
            print!("{}", commands::format_course(&detail));
        }
    }

    Ok(())
}
