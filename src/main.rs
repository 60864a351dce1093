use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use kmg::broker::KafkaClient;
use kmg::config::{Overrides, Settings};
use kmg::events::{Event, EventPump, TerminalKeys};
use kmg::ui::{self, Theme};
use kmg::App;

/// Interval between refreshes. Throughput is reported per tick, so this is
/// also the rate unit.
const TICK_RATE: Duration = Duration::from_secs(1);

#[derive(Parser, Debug)]
#[command(name = "kmg")]
#[command(about = "Live terminal dashboard of Kafka topic offsets and throughput")]
struct Args {
    /// Kafka brokers, separate multiple with ','
    /// [default: 127.0.0.1:9092,kafka:9092]
    #[arg(short = 'b', long = "kafka-brokers")]
    brokers: Option<String>,

    /// Config file (TOML, YAML or JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Append logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let settings = Settings::load(
        args.config.as_deref(),
        Overrides {
            brokers: args.brokers,
            log_file: args.log_file,
        },
    )
    .context("loading configuration")?;

    kmg::logging::init(settings.log_file.as_deref(), &settings.log_filter)?;

    let result = run(&settings);
    if let Err(ref e) = result {
        tracing::error!(error = %format!("{:#}", e), "dashboard stopped");
    }
    result
}

fn run(settings: &Settings) -> Result<()> {
    let mut builder = KafkaClient::builder()
        .brokers(settings.broker_list())
        .client_id(settings.client_id.clone())
        .connect_timeout(settings.connect_timeout());
    if let Some(timeout) = settings.request_timeout() {
        builder = builder.request_timeout(timeout);
    }
    let client = builder.connect().context("connecting to kafka")?;

    // Detect the background before raw mode takes over the terminal.
    let theme = Theme::auto_detect();
    let app = App::new(Box::new(client), theme);

    run_tui(app)
}

/// Run the TUI until quit or a fatal refresh error.
fn run_tui(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let mut events = EventPump::new(TerminalKeys, TICK_RATE);

    while app.is_running() {
        let event = events.next_event()?;
        app.handle(event)?;

        if event == Event::Tick {
            terminal.draw(|frame| ui::render(frame, app))?;
        }
    }

    Ok(())
}
