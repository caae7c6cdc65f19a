//! Shared helpers for the integration tests.

#![allow(dead_code)]

use nrow::{BoardState, Player};

/// Play `moves` on an empty board of the given size.
pub fn play(size: usize, moves: &[usize]) -> BoardState {
    BoardState::new(size)
        .and_then(|board| board.apply_moves(moves))
        .unwrap_or_else(|e| panic!("moves {moves:?} on {size}x{size} failed: {e}"))
}

/// Terminal outcome counts, gathered by walking every game below `state`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LeafCount {
    pub x_wins: u64,
    pub o_wins: u64,
    pub draws: u64,
}

pub fn count_leaves(state: &BoardState) -> LeafCount {
    fn walk(state: &BoardState, count: &mut LeafCount) {
        if state.game_over() {
            match state.winner() {
                Some(Player::X) => count.x_wins += 1,
                Some(Player::O) => count.o_wins += 1,
                None => count.draws += 1,
            }
            return;
        }
        for position in 1..=state.size().cell_count() {
            if let Ok(next) = state.apply_move(position) {
                walk(&next, count);
            }
        }
    }

    let mut count = LeafCount::default();
    if !state.game_over() {
        walk(state, &mut count);
    }
    count
}
