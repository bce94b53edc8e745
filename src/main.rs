use anyhow::{Context, Result};
use clap::Parser;
use welcome_hello::app::App;
use welcome_hello::cli::Cli;
use welcome_hello::utils::get_log_dir;

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::event::DisableMouseCapture,
            crossterm::event::DisableBracketedPaste
        );
        original_hook(panic_info);
    }));
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging directory
    let log_dir = get_log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {:?}", log_dir))?;
    let log_file = log_dir.join("welcome-hello.log");

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_appender = tracing_appender::rolling::never(&log_dir, "welcome-hello.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    if cli.execute()? {
        return Ok(());
    }

    setup_panic_hook();

    let (config, config_path) = cli.load_config()?;

    // Visible only until the alternate screen takes over
    eprintln!("Logs are being written to: {:?}", log_file);

    let mut app = App::new(config, config_path)?;
    let result = app.run();

    // Flush buffered log lines before exit
    drop(guard);

    result
}
