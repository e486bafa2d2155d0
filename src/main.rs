use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use chronokeys::app::App;
use chronokeys::cli::Args;
use chronokeys::config::Config;
use chronokeys::event_loop::run_app;
use chronokeys::logging;
use chronokeys::terminal::TerminalSession;

fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = match args.config.clone() {
        Some(path) => path,
        None => Config::config_path()?,
    };

    if args.init_config {
        Config::write_default(&config_path)?;
        println!("Wrote default config to {}", config_path.display());
        return Ok(());
    }

    // Logging is best-effort: the timer runs without it
    let log_path = args.log_file.clone().or_else(logging::default_log_path);
    let logging_error = log_path.and_then(|path| logging::init(&path, args.log_level()).err());

    let mut config = Config::load_from(&config_path)?;
    if let Some(seconds) = args.duration {
        config.timer.default_duration_secs = seconds;
    }
    if let Some(title) = args.title {
        config.display.title = title;
    }

    info!(
        duration = config.timer.default_duration_secs,
        config = %config_path.display(),
        "starting chronokeys v{}",
        env!("CARGO_PKG_VERSION")
    );

    let mut app = App::new(config);
    let mut session = TerminalSession::start().context("Failed to initialize terminal")?;
    let result = run_app(session.terminal_mut(), &mut app);
    drop(session);

    if let Some(e) = logging_error {
        eprintln!("chronokeys: logging disabled: {e:#}");
    }

    info!("chronokeys exiting");
    result
}
