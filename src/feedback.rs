//! Audio/feedback collaborator. The engine only makes [`GameEvent`]s
//! observable; anything that reacts to them implements [`SoundPlayer`] and is
//! injected into the UI, so the core never owns a playback resource.

use std::io::Write;

use crate::game::GameEvent;

/// A playback handle with exactly two operations.
pub trait SoundPlayer {
    fn play(&mut self, event: GameEvent);
    fn stop(&mut self);
}

/// Discards every event.
pub struct Silent;

impl SoundPlayer for Silent {
    fn play(&mut self, _event: GameEvent) {}
    fn stop(&mut self) {}
}

/// Rings the terminal bell for each event. BEL has no duration, so `stop`
/// has nothing to cut short.
pub struct TerminalBell;

impl SoundPlayer for TerminalBell {
    fn play(&mut self, _event: GameEvent) {
        let mut stdout = std::io::stdout();
        let _ = stdout.write_all(b"\x07");
        let _ = stdout.flush();
    }

    fn stop(&mut self) {}
}

/// Pick a player based on the sound configuration.
pub fn from_config(enabled: bool) -> Box<dyn SoundPlayer> {
    if enabled {
        Box::new(TerminalBell)
    } else {
        Box::new(Silent)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Records every call for assertions in tests.
    #[derive(Default)]
    pub struct Recording {
        pub played: Vec<GameEvent>,
        pub stops: usize,
    }

    impl SoundPlayer for Recording {
        fn play(&mut self, event: GameEvent) {
            self.played.push(event);
        }

        fn stop(&mut self) {
            self.stops += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::Recording;
    use super::*;
    use crate::game::{GameEvent, GameState, MoveOutcome, Outcome, Player};

    #[test]
    fn test_recording_player_hears_a_full_game() {
        let mut state = GameState::new();
        let mut player = Recording::default();

        // One wins on the bottom row
        for &column in &[0, 0, 1, 1, 2, 2, 3] {
            match state.apply_move(column).unwrap() {
                MoveOutcome::Placed(placed) => {
                    for event in placed.events() {
                        player.play(event);
                    }
                }
                MoveOutcome::ColumnFull => unreachable!(),
            }
        }

        assert_eq!(player.played.len(), 8); // 7 drops + game end
        assert_eq!(
            player.played.last(),
            Some(&GameEvent::GameEnded(Outcome::Win(Player::One)))
        );
    }
}
