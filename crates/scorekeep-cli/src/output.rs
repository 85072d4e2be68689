//! Console output formatting with colored display

use std::fmt::Write as _;

use owo_colors::{OwoColorize, Stream, Style};
use scorekeep::RankedEntry;

const RANK_HEADER: &str = "RANK";
const PLAYER_HEADER: &str = "PLAYER";
const SCORE_HEADER: &str = "SCORE";

/// Format rankings as a bordered table, one row per player.
///
/// When `colored` is set, styling is applied only if stdout supports color,
/// so piped output stays plain. File output passes `false`.
pub fn format_rankings(rankings: &[RankedEntry], colored: bool) -> String {
    let mut output = String::new();

    let id_width = rankings
        .iter()
        .map(|entry| entry.player_id.chars().count())
        .max()
        .unwrap_or(0)
        .max(PLAYER_HEADER.len());
    let border = "━".repeat(id_width + 20);
    let border = if colored {
        border
            .if_supports_color(Stream::Stdout, |text| text.dimmed())
            .to_string()
    } else {
        border
    };

    let _ = writeln!(output, "{}", border);
    let _ = writeln!(
        output,
        "  {:>4}  {:<width$}  {:>8}",
        RANK_HEADER,
        PLAYER_HEADER,
        SCORE_HEADER,
        width = id_width
    );
    let _ = writeln!(output, "{}", border);

    if rankings.is_empty() {
        let _ = writeln!(output, "  (no players)");
    }

    for (index, entry) in rankings.iter().enumerate() {
        let rank = index + 1;
        let player = format!("{:<width$}", entry.player_id, width = id_width);
        let score = format!("{:>8}", entry.score);
        let (player, score) = match (colored, rank) {
            (true, 1) => (
                player
                    .if_supports_color(Stream::Stdout, |text| text.bold())
                    .to_string(),
                score
                    .if_supports_color(Stream::Stdout, |text| {
                        text.style(Style::new().green().bold())
                    })
                    .to_string(),
            ),
            (true, _) => (
                player,
                score
                    .if_supports_color(Stream::Stdout, |text| text.cyan())
                    .to_string(),
            ),
            (false, _) => (player, score),
        };
        let _ = writeln!(output, "  {:>4}  {}  {}", rank, player, score);
    }

    let _ = write!(output, "{}", border);

    output
}
