//! Subcommands of the `nrow` binary

pub mod play;
pub mod self_play;
pub mod stats;
pub mod suggest;

/// Empty cells above which a full search is likely to run for a long time
pub(crate) const SLOW_SEARCH_EMPTY_CELLS: usize = 11;

pub(crate) fn warn_if_slow(state: &crate::tictactoe::BoardState) {
    let empty = state.size().cell_count() - state.turn();
    if empty > SLOW_SEARCH_EMPTY_CELLS {
        tracing::warn!(
            empty,
            "exhaustive search over this many empty cells may not finish in reasonable time"
        );
    }
}
