//! Output formatting and progress spinners for CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    analysis::{MoveStats, PositionStats},
    tictactoe::{BoardState, GameOutcome},
};

/// Create a spinner for search tasks, hidden when `enabled` is false
pub fn create_spinner(message: &str, enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg} [{elapsed}]")
    {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Format a number with thousands separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

fn format_depth(depth: Option<u32>) -> String {
    depth.map_or_else(|| "-".to_string(), |d| d.to_string())
}

/// Print the classification of a board
pub fn print_flags(state: &BoardState) {
    let flags = state.flags();
    print_kv("Size", &state.size().to_string());
    print_kv("Turn", &state.turn().to_string());
    if let Some(position) = state.last_position() {
        print_kv("Last move", &position.to_string());
    }
    let status = match GameOutcome::of(state) {
        Some(GameOutcome::Win(player)) => format!("{player} wins"),
        Some(GameOutcome::Draw) => "stalemate".to_string(),
        None => format!("{} to move", state.next_player()),
    };
    print_kv("Status", &status);
    if let Some(line) = flags.win_line {
        print_kv("Winning line", &line.to_string());
        let cells: Vec<String> = flags
            .win_positions
            .iter()
            .map(|c| c.to_position(state.size()).to_string())
            .collect();
        print_kv("Winning cells", &cells.join(", "));
    }
}

fn print_stats_row(label: &str, stats: &MoveStats) {
    println!(
        "  {:>6} {:>12} {:>12} {:>12} {:>8} {:>8}",
        label,
        format_number(stats.wins_x),
        format_number(stats.wins_o),
        format_number(stats.draws),
        format_depth(stats.depth_x),
        format_depth(stats.depth_o),
    );
}

/// Print per-move stats followed by the position total
pub fn print_stats_table(stats: &PositionStats) {
    println!(
        "  {:>6} {:>12} {:>12} {:>12} {:>8} {:>8}",
        "Move", "X wins", "O wins", "Draws", "X depth", "O depth"
    );
    println!("  {}", "-".repeat(63));
    for (position, move_stats) in stats.iter() {
        print_stats_row(&position.to_string(), move_stats);
    }
    println!("  {}", "-".repeat(63));
    print_stats_row("Total", &stats.aggregate());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_separators() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_000), "1,000");
        assert_eq!(format_number(255_168), "255,168");
        assert_eq!(format_number(1_234_567), "1,234,567");
    }

    #[test]
    fn missing_depth_is_a_dash() {
        assert_eq!(format_depth(None), "-");
        assert_eq!(format_depth(Some(3)), "3");
    }
}
