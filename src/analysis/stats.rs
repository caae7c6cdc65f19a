//! Exhaustive game-tree statistics
//!
//! Every legal continuation is played out to a terminal state. Results are
//! aggregated bottom-up: win counts are summed, and each player's win depth
//! is the shallowest child depth plus one. Shared subtrees reached through
//! different move orders are recomputed independently.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

use crate::{
    Result,
    tictactoe::{BoardState, Player},
};

/// Outcome counts for every game that continues through one move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MoveStats {
    pub wins_x: u64,
    pub wins_o: u64,
    /// Terminal states reached with a full board and no winner
    pub draws: u64,
    /// Plies until X's shallowest win, `None` if X never wins below this move
    pub depth_x: Option<u32>,
    pub depth_o: Option<u32>,
}

impl MoveStats {
    /// Stats for a state that ends the game
    fn terminal(state: &BoardState) -> Self {
        match state.winner() {
            Some(Player::X) => MoveStats {
                wins_x: 1,
                depth_x: Some(0),
                ..Default::default()
            },
            Some(Player::O) => MoveStats {
                wins_o: 1,
                depth_o: Some(0),
                ..Default::default()
            },
            None => MoveStats {
                draws: 1,
                ..Default::default()
            },
        }
    }

    pub fn wins(&self, player: Player) -> u64 {
        match player {
            Player::X => self.wins_x,
            Player::O => self.wins_o,
        }
    }

    pub fn depth_to_win(&self, player: Player) -> Option<u32> {
        match player {
            Player::X => self.depth_x,
            Player::O => self.depth_o,
        }
    }

    /// Number of terminal states below this move
    pub fn total_games(&self) -> u64 {
        self.wins_x + self.wins_o + self.draws
    }

    /// Fold a child's stats into this aggregate
    fn absorb(&mut self, child: &MoveStats) {
        self.wins_x += child.wins_x;
        self.wins_o += child.wins_o;
        self.draws += child.draws;
        self.depth_x = shallowest(self.depth_x, child.depth_x.map(|d| d + 1));
        self.depth_o = shallowest(self.depth_o, child.depth_o.map(|d| d + 1));
    }
}

fn shallowest(current: Option<u32>, candidate: Option<u32>) -> Option<u32> {
    match (current, candidate) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

/// Per-move stats for every available move of a position, keyed by move index
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionStats {
    pub moves: BTreeMap<usize, MoveStats>,
}

impl PositionStats {
    pub fn get(&self, position: usize) -> Option<&MoveStats> {
        self.moves.get(&position)
    }

    /// Move indices with stats, ascending
    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.moves.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &MoveStats)> {
        self.moves.iter().map(|(&p, s)| (p, s))
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Combine the per-move stats into a single record for the position
    pub fn aggregate(&self) -> MoveStats {
        let mut total = MoveStats::default();
        for stats in self.moves.values() {
            total.absorb(stats);
        }
        total
    }
}

/// Stats for every available move of `state`.
///
/// A terminal state has no available moves and yields empty stats.
///
/// # Errors
///
/// Propagates move application failures, which cannot occur for moves taken
/// from [`BoardState::legal_moves`].
#[instrument(skip(state), fields(size = %state.size(), turn = state.turn()))]
pub fn get_stats(state: &BoardState) -> Result<PositionStats> {
    let mut stats = PositionStats::default();
    for position in state.legal_moves() {
        let record = move_stats(state, position)?;
        trace!(position, ?record, "root move");
        stats.moves.insert(position, record);
    }
    Ok(stats)
}

/// Stats for all games continuing through `position`.
///
/// If the move ends the game the record describes that single outcome with a
/// win depth of zero; otherwise it aggregates every continuation.
///
/// # Errors
///
/// Fails like [`BoardState::apply_move`] if the move is not legal.
pub fn move_stats(state: &BoardState, position: usize) -> Result<MoveStats> {
    let next = state.apply_move(position)?;
    if next.game_over() {
        return Ok(MoveStats::terminal(&next));
    }

    let mut aggregate = MoveStats::default();
    for child in next.legal_moves() {
        aggregate.absorb(&move_stats(&next, child)?);
    }
    Ok(aggregate)
}
