use crate::config::AppConfig;
use crate::error::MoveError;
use crate::feedback::SoundPlayer;
use crate::game::{GameState, MoveOutcome, Outcome, WIDTH};
use crate::ui::input_lock::InputLock;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::{Duration, Instant};

pub struct App {
    game_state: GameState,
    selected_column: usize,
    input_lock: InputLock,
    sound: Box<dyn SoundPlayer>,
    should_quit: bool,
    message: Option<String>,
    feedback_hold: Duration,
    tick_rate: Duration,
}

impl App {
    pub fn new(config: &AppConfig, sound: Box<dyn SoundPlayer>) -> Self {
        App {
            game_state: GameState::new(),
            selected_column: WIDTH / 2, // Start in middle
            input_lock: InputLock::new(),
            sound,
            should_quit: false,
            message: None,
            feedback_hold: Duration::from_millis(config.ui.feedback_hold_ms),
            tick_rate: Duration::from_millis(config.ui.tick_rate_ms),
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Poll for input; each pass of the loop is also the timer tick that
    /// releases the input lock once the feedback hold has elapsed.
    fn handle_events(&mut self) -> io::Result<()> {
        self.input_lock.release_if_elapsed(Instant::now());

        if event::poll(self.tick_rate)? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < WIDTH - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.reset();
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        if !self.input_lock.is_ready() {
            // previous move's feedback still in flight
            return;
        }

        match self.game_state.apply_move(self.selected_column) {
            Ok(MoveOutcome::Placed(placed)) => {
                for event in placed.events() {
                    self.sound.play(event);
                }
                match placed.outcome {
                    Some(Outcome::Win(player)) => {
                        self.message = Some(format!(
                            "{} Player won! Press 'r' for a new game.",
                            super::game_view::player_name(player)
                        ));
                    }
                    Some(Outcome::Tie) => {
                        self.message = Some("Tie! Press 'r' for a new game.".to_string());
                    }
                    None => {
                        self.message = None;
                        self.input_lock.engage(Instant::now() + self.feedback_hold);
                    }
                }
            }
            Ok(MoveOutcome::ColumnFull) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game over! Press 'r' for a new game.".to_string());
            }
            Err(MoveError::InvalidColumn(col)) => {
                // unreachable with a bounded selector, but surfaced anyway
                self.message = Some(format!("Column {col} is outside the board!"));
            }
        }
    }

    /// Start a fresh game; the old state is discarded wholesale.
    fn reset(&mut self) {
        self.sound.stop();
        self.game_state = GameState::new();
        self.selected_column = WIDTH / 2;
        self.input_lock = InputLock::new();
        self.message = Some("New game started!".to_string());
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.game_state, self.selected_column, &self.message);
    }
}
