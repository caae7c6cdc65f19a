//! Serializable game records

use serde::{Deserialize, Serialize};

use super::board::{BoardState, Player};
use super::coords::BoardSize;
use crate::Result;

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Outcome of a terminal state, `None` while the game is still running
    pub fn of(state: &BoardState) -> Option<Self> {
        match state.winner() {
            Some(winner) => Some(GameOutcome::Win(winner)),
            None if state.flags().full => Some(GameOutcome::Draw),
            None => None,
        }
    }
}

/// A game played from an empty board, stored as its move list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub size: BoardSize,
    pub moves: Vec<usize>,
    pub outcome: Option<GameOutcome>,
}

impl Game {
    /// Build a record from a state's history.
    ///
    /// Returns `None` if the history does not reach back to an empty board
    /// through known moves, e.g. for a board imported from a grid mid-game.
    pub fn from_state(state: &BoardState) -> Option<Self> {
        let root = state.history().first().copied()?;
        if !root.flags().empty {
            return None;
        }
        Some(Game {
            size: state.size(),
            moves: state.move_history()?,
            outcome: GameOutcome::of(state),
        })
    }

    /// Replay the move list from an empty board
    ///
    /// # Errors
    ///
    /// Returns error if any recorded move is illegal, which indicates
    /// corrupted game data.
    pub fn current_state(&self) -> Result<BoardState> {
        BoardState::empty(self.size).apply_moves(&self.moves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_round_trips_through_state() {
        let state = BoardState::new(3)
            .unwrap()
            .apply_moves(&[5, 2, 3, 7, 9, 6, 1])
            .unwrap();
        let game = Game::from_state(&state).unwrap();
        assert_eq!(game.moves, vec![5, 2, 3, 7, 9, 6, 1]);
        assert_eq!(game.outcome, Some(GameOutcome::Win(Player::X)));
        assert_eq!(game.current_state().unwrap(), state);
    }

    #[test]
    fn imported_mid_game_board_has_no_record() {
        let state = BoardState::from_string("X../.O./...").unwrap();
        assert!(Game::from_state(&state).is_none());
    }

    #[test]
    fn corrupted_record_fails_to_replay() {
        let game = Game {
            size: BoardSize::new(3).unwrap(),
            moves: vec![1, 4, 2, 5, 3, 9],
            outcome: Some(GameOutcome::Win(Player::X)),
        };
        assert_eq!(game.current_state(), Err(crate::Error::GameAlreadyOver));
    }

    #[test]
    fn json_shape() {
        let state = BoardState::new(4).unwrap().apply_move(6).unwrap();
        let game = Game::from_state(&state).unwrap();
        let json = serde_json::to_value(&game).unwrap();
        assert_eq!(json["size"], 4);
        assert_eq!(json["moves"], serde_json::json!([6]));
        assert!(json["outcome"].is_null());
    }
}
