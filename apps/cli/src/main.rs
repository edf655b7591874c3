use std::sync::Arc;

use anyhow::{anyhow, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use vitae::api::HttpResumeApi;
use vitae::cli::Args;
use vitae::config::Config;
use vitae::export::Exporter;
use vitae::ui::WizardUi;
use vitae::wizard::screen::Screen;
use vitae::wizard::session::Session;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_env()?;

    // Logs go to stderr; stdout belongs to the wizard.
    let level = match args.verbose {
        0 => config.rust_log.clone(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), level))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting vitae v{}", env!("CARGO_PKG_VERSION"));
    info!("API base: {}", config.api_base);

    let screen = Screen::from_route(&args.start_at).ok_or_else(|| {
        anyhow!(
            "unknown route {:?} (expected /, /perguntas, /respostas or /gerar)",
            args.start_at
        )
    })?;

    let api = Arc::new(HttpResumeApi::new(config.api_base));
    let ui = WizardUi::new(api, Exporter::new(args.export_dir));
    ui.run(Session::starting_at(screen)).await
}
