use std::io::stdout;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use tripmind::app::App;
use tripmind::config::load_config;
use tripmind::geocode::{GeocodeClient, spawn_worker};
use tripmind::suggest::FieldId;

/// How long to wait for terminal input before advancing timers
const POLL_INTERVAL: Duration = Duration::from_millis(30);

/// Trip-search form with live location suggestions
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Config file (defaults to ~/.config/tripmind/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Use only the built-in city catalog
    #[arg(long)]
    offline: bool,

    /// Prefill the origin field
    #[arg(long, value_name = "TEXT")]
    origin: Option<String>,

    /// Prefill the destination field
    #[arg(long, value_name = "TEXT")]
    destination: Option<String>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let cli = Cli::parse();

    #[cfg(debug_assertions)]
    init_logger();

    let loaded = load_config(cli.config.as_deref());
    let mut app = App::new(&loaded.config, loaded.warning);

    if let Some(origin) = &cli.origin {
        app.set_field_text(FieldId::Origin, origin);
    }
    if let Some(destination) = &cli.destination {
        app.set_field_text(FieldId::Destination, destination);
    }

    let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel();
    let (response_tx, response_rx) = mpsc::channel();

    let client = if cli.offline {
        None
    } else {
        match GeocodeClient::from_config(&loaded.config.provider) {
            Ok(client) => Some(client),
            Err(e) => {
                log::debug!("Live lookups unavailable: {}", e);
                None
            }
        }
    };
    spawn_worker(client, request_rx, response_tx)?;
    app.suggest.set_channels(request_tx, response_rx);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    execute!(stdout(), EnableMouseCapture)?;

    let result = run(terminal, &mut app);

    // Restore terminal (automatic cleanup)
    let _ = execute!(stdout(), DisableMouseCapture);
    ratatui::restore();

    result?;

    if app.submitted {
        println!("{}", serde_json::to_string(&app.search_payload())?);
    }

    Ok(())
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(POLL_INTERVAL)? {
            app.handle_event(event::read()?, Instant::now());
        }

        app.tick(Instant::now());

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Send debug logs to a file so they do not corrupt the terminal
#[cfg(debug_assertions)]
fn init_logger() {
    use std::io::Write;

    let path = std::env::temp_dir().join("tripmind-debug.log");
    let Ok(file) = std::fs::File::create(&path) else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {:5} {}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}
