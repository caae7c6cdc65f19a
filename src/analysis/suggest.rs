//! Move suggestion from exhaustive game-tree stats
//!
//! Candidate moves are tried against four rules in order of preference:
//!
//! 1. The mover can win below this move and the opponent never can
//! 2. The best weighted balance of wins and win depths
//! 3. The opponent never wins below this move
//! 4. The lowest available move index
//!
//! Ties within a rule are broken uniformly at random.

use std::fmt;

use rand::{
    Rng, SeedableRng,
    rngs::StdRng,
    seq::{IndexedRandom, SliceRandom},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::{
    config::AdvisorConfig,
    stats::{MoveStats, PositionStats, get_stats},
};
use crate::{
    Error, Result,
    tictactoe::{BoardSize, BoardState, Player},
};

/// Weight of one net win relative to one ply of win depth
const WIN_WEIGHT: i64 = 5;

/// The rule that produced a suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Random first move on an empty board
    Opening,
    SureWin,
    WeightedWin,
    AvoidLoss,
    Fallback,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tier::Opening => "random opening",
            Tier::SureWin => "sure win",
            Tier::WeightedWin => "weighted win",
            Tier::AvoidLoss => "opponent doesn't win",
            Tier::Fallback => "giving up",
        };
        f.write_str(name)
    }
}

/// A suggested move and the rule that chose it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub position: usize,
    pub tier: Tier,
}

/// Weighted score of a move for `player`.
///
/// Net wins count five times as much as the difference in win depth. When
/// only one side has a win depth the depth term favours that side by the
/// number of cells on the board.
pub fn weight(stats: &MoveStats, player: Player, size: BoardSize) -> i64 {
    let opponent = player.opponent();
    let net_wins = stats.wins(player) as i64 - stats.wins(opponent) as i64;
    let cells = size.cell_count() as i64;
    let depth = match (stats.depth_to_win(player), stats.depth_to_win(opponent)) {
        (Some(mine), Some(theirs)) => i64::from(mine) - i64::from(theirs),
        (Some(_), None) => cells,
        (None, Some(_)) => -cells,
        (None, None) => 0,
    };
    WIN_WEIGHT * net_wins + depth
}

/// Pick a move for `player` from root-level stats.
///
/// Returns `None` only when `stats` is empty.
pub fn choose_move<R: Rng + ?Sized>(
    stats: &PositionStats,
    player: Player,
    size: BoardSize,
    rng: &mut R,
) -> Option<Suggestion> {
    let opponent = player.opponent();
    let mut candidates: Vec<(usize, &MoveStats)> = stats.iter().collect();
    candidates.shuffle(rng);

    let sure_win = candidates.iter().find(|(_, s)| {
        s.depth_to_win(player).is_some() && s.depth_to_win(opponent).is_none()
    });
    if let Some(&(position, _)) = sure_win {
        debug!(position, "sure winner");
        return Some(Suggestion {
            position,
            tier: Tier::SureWin,
        });
    }

    let weighted: Vec<(usize, i64)> = stats
        .iter()
        .filter(|(_, s)| s.wins(player) > 0)
        .map(|(position, s)| (position, weight(s, player, size)))
        .collect();
    if let Some(best) = weighted.iter().map(|&(_, w)| w).max() {
        let top: Vec<usize> = weighted
            .iter()
            .filter(|&&(_, w)| w == best)
            .map(|&(position, _)| position)
            .collect();
        if let Some(&position) = top.choose(rng) {
            debug!(position, weight = best, tied = top.len(), "weighted winner");
            return Some(Suggestion {
                position,
                tier: Tier::WeightedWin,
            });
        }
    }

    let safe = candidates
        .iter()
        .find(|(_, s)| s.depth_to_win(opponent).is_none());
    if let Some(&(position, _)) = safe {
        debug!(position, "other player doesn't win");
        return Some(Suggestion {
            position,
            tier: Tier::AvoidLoss,
        });
    }

    let position = stats.positions().next()?;
    debug!(position, "giving up");
    Some(Suggestion {
        position,
        tier: Tier::Fallback,
    })
}

/// Suggest a move for whoever moves next in `state`.
///
/// The opening move on an empty board is uniformly random; every later move
/// runs a full game-tree search, whose cost grows exponentially with the
/// number of empty cells.
///
/// # Errors
///
/// Returns [`Error::GameAlreadyOver`] for a terminal state.
#[instrument(skip(state, rng), fields(size = %state.size(), turn = state.turn()))]
pub fn suggest_move<R: Rng + ?Sized>(state: &BoardState, rng: &mut R) -> Result<Suggestion> {
    if state.game_over() {
        return Err(Error::GameAlreadyOver);
    }

    if state.turn() == 0 {
        let position = rng.random_range(1..=state.size().cell_count());
        debug!(position, "random opening");
        return Ok(Suggestion {
            position,
            tier: Tier::Opening,
        });
    }

    let stats = get_stats(state)?;
    choose_move(&stats, state.next_player(), state.size(), rng).ok_or(Error::GameAlreadyOver)
}

/// Suggest a move index using the thread-local RNG.
///
/// # Errors
///
/// Returns [`Error::GameAlreadyOver`] for a terminal state.
pub fn next_suggested_move(state: &BoardState) -> Result<usize> {
    suggest_move(state, &mut rand::rng()).map(|s| s.position)
}

/// A move suggester with its own, optionally seeded, random source
pub struct Advisor {
    rng: StdRng,
}

impl fmt::Debug for Advisor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Advisor").finish_non_exhaustive()
    }
}

impl Advisor {
    pub fn new(config: &AdvisorConfig) -> Self {
        Self {
            rng: Self::rng_from(config.seed),
        }
    }

    fn rng_from(seed: Option<u64>) -> StdRng {
        match seed {
            Some(value) => StdRng::seed_from_u64(value),
            None => StdRng::seed_from_u64(rand::random::<u64>()),
        }
    }

    /// Suggest a move along with the rule that picked it
    pub fn suggest(&mut self, state: &BoardState) -> Result<Suggestion> {
        suggest_move(state, &mut self.rng)
    }

    pub fn next_suggested_move(&mut self, state: &BoardState) -> Result<usize> {
        self.suggest(state).map(|s| s.position)
    }
}

impl Default for Advisor {
    fn default() -> Self {
        Self::new(&AdvisorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three() -> BoardSize {
        BoardSize::new(3).unwrap()
    }

    fn seeded() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn stats_of(entries: &[(usize, MoveStats)]) -> PositionStats {
        PositionStats {
            moves: entries.iter().copied().collect(),
        }
    }

    #[test]
    fn sure_win_is_preferred_over_better_weight() {
        let stats = stats_of(&[
            (
                2,
                MoveStats {
                    wins_x: 1,
                    depth_x: Some(4),
                    draws: 3,
                    ..Default::default()
                },
            ),
            (
                6,
                MoveStats {
                    wins_x: 50,
                    wins_o: 1,
                    depth_x: Some(0),
                    depth_o: Some(1),
                    ..Default::default()
                },
            ),
        ]);
        let choice = choose_move(&stats, Player::X, three(), &mut seeded()).unwrap();
        assert_eq!(
            choice,
            Suggestion {
                position: 2,
                tier: Tier::SureWin
            }
        );
    }

    #[test]
    fn highest_weight_wins_tier_two() {
        let stats = stats_of(&[
            (
                1,
                MoveStats {
                    wins_o: 3,
                    wins_x: 1,
                    depth_o: Some(2),
                    depth_x: Some(1),
                    ..Default::default()
                },
            ),
            (
                4,
                MoveStats {
                    wins_o: 2,
                    wins_x: 1,
                    depth_o: Some(1),
                    depth_x: Some(1),
                    ..Default::default()
                },
            ),
            (
                7,
                MoveStats {
                    wins_x: 9,
                    depth_x: Some(1),
                    draws: 2,
                    ..Default::default()
                },
            ),
        ]);
        // Move 7 is a sure win for X, but we are choosing for O.
        assert_eq!(weight(stats.get(1).unwrap(), Player::O, three()), 11);
        assert_eq!(weight(stats.get(4).unwrap(), Player::O, three()), 5);
        let choice = choose_move(&stats, Player::O, three(), &mut seeded()).unwrap();
        assert_eq!(choice.position, 1);
        assert_eq!(choice.tier, Tier::WeightedWin);
    }

    #[test]
    fn weighted_ties_pick_among_the_maximum() {
        let tied = MoveStats {
            wins_x: 2,
            wins_o: 1,
            depth_x: Some(1),
            depth_o: Some(1),
            ..Default::default()
        };
        let worse = MoveStats {
            wins_x: 1,
            wins_o: 1,
            depth_x: Some(1),
            depth_o: Some(1),
            ..Default::default()
        };
        let stats = stats_of(&[(3, tied), (5, worse), (8, tied)]);
        let mut rng = seeded();
        for _ in 0..50 {
            let choice = choose_move(&stats, Player::X, three(), &mut rng).unwrap();
            assert!(choice.position == 3 || choice.position == 8);
        }
    }

    #[test]
    fn avoid_loss_when_no_wins_left() {
        let stats = stats_of(&[
            (
                2,
                MoveStats {
                    wins_o: 1,
                    depth_o: Some(0),
                    ..Default::default()
                },
            ),
            (
                9,
                MoveStats {
                    draws: 2,
                    ..Default::default()
                },
            ),
        ]);
        let choice = choose_move(&stats, Player::X, three(), &mut seeded()).unwrap();
        assert_eq!(
            choice,
            Suggestion {
                position: 9,
                tier: Tier::AvoidLoss
            }
        );
    }

    #[test]
    fn fallback_is_lowest_index() {
        let losing = MoveStats {
            wins_o: 1,
            depth_o: Some(0),
            ..Default::default()
        };
        let stats = stats_of(&[(8, losing), (3, losing), (6, losing)]);
        let choice = choose_move(&stats, Player::X, three(), &mut seeded()).unwrap();
        assert_eq!(
            choice,
            Suggestion {
                position: 3,
                tier: Tier::Fallback
            }
        );
    }

    #[test]
    fn empty_stats_have_no_choice() {
        let stats = PositionStats::default();
        assert!(choose_move(&stats, Player::X, three(), &mut seeded()).is_none());
    }

    #[test]
    fn one_sided_depth_favours_its_owner() {
        let stats = MoveStats {
            wins_x: 1,
            depth_x: Some(2),
            ..Default::default()
        };
        assert_eq!(weight(&stats, Player::X, three()), 5 + 9);
        assert_eq!(weight(&stats, Player::O, three()), -5 - 9);
    }

    #[test]
    fn opening_is_random_but_on_the_board() {
        let state = BoardState::new(4).unwrap();
        let mut rng = seeded();
        for _ in 0..100 {
            let s = suggest_move(&state, &mut rng).unwrap();
            assert_eq!(s.tier, Tier::Opening);
            assert!((1..=16).contains(&s.position));
        }
    }

    #[test]
    fn terminal_state_is_rejected() {
        let state = BoardState::from_string("XXX/OO./...").unwrap();
        assert_eq!(
            suggest_move(&state, &mut seeded()),
            Err(Error::GameAlreadyOver)
        );
    }

    #[test]
    fn seeded_advisors_agree() {
        let state = BoardState::new(3).unwrap().apply_moves(&[5, 1]).unwrap();
        let config = AdvisorConfig::new().with_seed(99);
        let a = Advisor::new(&config).suggest(&state).unwrap();
        let b = Advisor::new(&config).suggest(&state).unwrap();
        assert_eq!(a, b);
    }
}
