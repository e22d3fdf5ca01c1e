//! Plain-text bracket overview: every round, the bronze match, the final, and placements.

use crate::models::Tournament;

pub fn bracket_overview(tournament: &Tournament) -> String {
    let mut lines = Vec::new();
    for (idx, round) in tournament.rounds.iter().enumerate() {
        lines.push(format!("Round {}", idx + 1));
        lines.extend(round.matches.iter().map(|m| format!("  {}", m)));
    }
    if let Some(bronze) = &tournament.bronze_match {
        lines.push("Third place".to_string());
        lines.push(format!("  {}", bronze));
    }
    if let Some(final_match) = &tournament.final_match {
        lines.push("Final".to_string());
        lines.push(format!("  {}", final_match));
    }
    if !tournament.podium.is_empty() {
        lines.push("Placements".to_string());
        lines.extend(
            tournament
                .podium
                .iter()
                .enumerate()
                .map(|(i, p)| format!("  {}. {}", i + 1, p.name)),
        );
    }
    lines.join("\n")
}
