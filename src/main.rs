// Segmented Tabs Demo
// Terminal host for the segmented tab control

// IMPORTS ------------------>> 

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::rc::Rc;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use segmented_components::Platform;
use segmented_tabs::config::LoggingConfigYaml;
use segmented_tabs::config_validation::load_and_validate_config;
use segmented_tabs::core::App;
use segmented_tabs::ui::{restore_terminal, run_app, setup_terminal, TerminalBell};

//--------------------------------------------------------<<

#[derive(Debug, Parser)]
#[command(version, about = "Segmented tab control demo")]
struct Cli {
    /// Configuration file (defaults to src/config.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Force a platform variant: ios or android
    #[arg(short, long)]
    platform: Option<Platform>,
}

// ┌──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                                 MAIN ENTRY POINT                                                 │
// └──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┘

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load and validate configuration from YAML file
    let app_config = load_and_validate_config(cli.config)?;
    init_logging(&app_config.application.logging);

    let mut app = App::new(&app_config, cli.platform, Rc::new(TerminalBell))?;

    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, &mut app);
    restore_terminal(&mut terminal)?;

    if let Err(e) = &result {
        tracing::error!("Application failed: {:#}", e);
    }
    result
}

/// Log to the configured file; stdout belongs to the TUI. RUST_LOG overrides the level.
fn init_logging(logging: &LoggingConfigYaml) {
    let Some(log_file) = &logging.file else {
        return;
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file.display(), e);
            return;
        }
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.to_lowercase()));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}
