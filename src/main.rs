mod app;
mod config;
mod event;
mod game;
mod ui;

use std::fs::File;
use std::io;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use app::App;
use config::Config;
use event::{Event, EventHandler};

const LOG_FILE: &str = "smashout.log";

/// Raw mode owns the terminal, so when logging is requested via
/// `RUST_LOG` it goes to a file instead of stderr.
fn init_logging() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    if let Ok(file) = File::create(LOG_FILE) {
        env_logger::Builder::from_default_env()
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init();
    }
}

fn main() -> io::Result<()> {
    init_logging();
    let config = Config::load();
    let tick_ms = config.tick_ms;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = App::new(config);
    let event_handler = EventHandler::new(tick_ms);

    // Main loop
    loop {
        terminal.draw(|frame| ui::render(frame, &mut app))?;

        match event_handler.next()? {
            Event::Tick => app.on_tick(),
            Event::Key(key) => app.on_key(key),
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
