//! Terminal rendering of boards and whole games

use super::{BoardState, Coord};

const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const REVERSE: &str = "\x1b[7m";
const RESET: &str = "\x1b[0m";

/// How a board should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Drop the padding rows and columns around each cell
    pub compact: bool,
    /// Emit ANSI attributes (dim move numbers, bold marks, reversed winning cells)
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            compact: false,
            color: true,
        }
    }
}

impl RenderOptions {
    pub fn plain() -> Self {
        Self {
            compact: false,
            color: false,
        }
    }

    pub fn with_compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

/// Draw a board as a boxed grid.
///
/// Empty cells show their move index so a player can see what to type.
pub fn render_board(state: &BoardState, options: RenderOptions) -> String {
    let n = state.size().get();
    // Move indices reach two digits from 4x4 up.
    let digits = if n == 3 { 1 } else { 2 };
    let width = if options.compact { digits } else { digits + 2 };
    let pad = if options.compact { "" } else { " " };

    let hsep = format!("+{}", format!("{}+", "-".repeat(width)).repeat(n));
    let hblank = format!("|{}", format!("{}|", " ".repeat(width)).repeat(n));

    let mut out = String::new();
    for y in 0..n {
        out.push_str(&hsep);
        out.push('\n');
        if !options.compact {
            out.push_str(&hblank);
            out.push('\n');
        }

        out.push('|');
        for x in 0..n {
            let coord = Coord::new(x, y);
            let (text, attrs) = match state.cell(coord).player() {
                Some(player) if state.flags().is_win_position(coord) => {
                    (player.to_string(), format!("{REVERSE}{BOLD}"))
                }
                Some(player) => (player.to_string(), BOLD.to_string()),
                None => (coord.to_position(state.size()).to_string(), DIM.to_string()),
            };
            let cell = format!("{pad}{text:>digits$}{pad}");
            if options.color {
                out.push_str(&format!("{attrs}{cell}{RESET}|"));
            } else {
                out.push_str(&cell);
                out.push('|');
            }
        }
        out.push('\n');

        if !options.compact {
            out.push_str(&hblank);
            out.push('\n');
        }
    }
    out.push_str(&hsep);
    out.push('\n');
    out
}

/// Draw every state from the start of the game up to `state`
pub fn render_game(state: &BoardState, options: RenderOptions) -> String {
    let mut out = String::new();
    for (i, step) in state.history().into_iter().enumerate() {
        if i > 0 && !options.compact {
            out.push('\n');
        }
        if step.turn() == 0 {
            out.push_str("Start\n");
        } else {
            out.push_str(&format!("Turn {}\n", step.turn()));
        }
        out.push_str(&render_board(step, options));
    }
    out
}
