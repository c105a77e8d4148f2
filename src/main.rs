use anyhow::Result;
use clap::Parser;
use portal::app::App;
use portal::cli::{Cli, CliContext};
use portal::router::Route;
use portal::styles::{init_theme, ThemeType};
use std::process::ExitCode;

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal state before handling panic
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(std::io::stdout(), crossterm::terminal::LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

fn main() -> Result<ExitCode> {
    setup_panic_hook();

    let log_dir = portal::utils::get_log_dir();
    std::fs::create_dir_all(&log_dir)?;

    // Initialize tracing with file logging; the TUI owns stdout
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_appender = tracing_appender::rolling::never(&log_dir, "portal.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    let result = if cli.command.is_some() {
        cli.execute()
            .map(|ok| if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
    } else {
        run_tui(cli).map(|()| ExitCode::SUCCESS)
    };

    drop(guard);
    result
}

fn run_tui(cli: Cli) -> Result<()> {
    let ctx = CliContext::load(cli.api_url)?;

    let theme = if cli.no_colors {
        ThemeType::NoColor
    } else {
        ctx.config.theme
    };
    init_theme(theme);

    eprintln!("Logs are being written to: {:?}", portal::utils::get_log_path());

    let mut app = App::new(ctx.config, ctx.session, Route::from_path(&cli.route))?;
    app.run()
}
