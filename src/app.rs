use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::Config;
use crate::game::Breakout;

pub struct App {
    pub should_quit: bool,
    pub game: Breakout,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            should_quit: false,
            game: Breakout::new(config),
        }
    }

    pub fn on_tick(&mut self) {
        self.game.update();
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        // Ctrl+C always quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            _ => self.game.handle_input(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Phase;

    fn app() -> App {
        App::new(Config::default())
    }

    #[test]
    fn quit_keys_set_the_flag() {
        let mut a = app();
        a.on_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(a.should_quit);

        let mut a = app();
        a.on_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(a.should_quit);
    }

    #[test]
    fn game_keys_are_forwarded() {
        let mut a = app();
        a.on_key(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE));
        assert!(!a.should_quit);
        assert_eq!(a.game.phase, Phase::Playing);
    }
}
