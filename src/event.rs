use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, KeyEvent, KeyEventKind};

pub enum Event {
    Key(KeyEvent),
    Tick,
}

/// Multiplexes key presses and fixed-rate simulation ticks onto one
/// channel. A `Tick` is emitted whenever the tick period elapses with
/// no input, so the game advances at a steady pace while key presses
/// are delivered as soon as they arrive.
pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        let (tx, rx) = mpsc::channel();
        let tick_rate = Duration::from_millis(tick_rate_ms);
        thread::spawn(move || pump_events(tx, tick_rate));
        Self { rx }
    }

    pub fn next(&self) -> io::Result<Event> {
        self.rx
            .recv()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
    }
}

/// Runs until the receiving side hangs up. Key releases and repeats
/// are dropped; only presses reach the game.
fn pump_events(tx: mpsc::Sender<Event>, tick_rate: Duration) {
    loop {
        let event = if event::poll(tick_rate).unwrap_or(false) {
            match event::read() {
                Ok(crossterm::event::Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    Event::Key(key)
                }
                _ => continue,
            }
        } else {
            Event::Tick
        };
        if tx.send(event).is_err() {
            return;
        }
    }
}
