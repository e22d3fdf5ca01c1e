//! Knockout rounds: winner selection and advancing to the next round.

use crate::logic::bracket::next_round;
use crate::logic::finals::{award_single_final, split_semi_finals};
use crate::models::{
    Match, MatchId, ParticipantId, Round, Slot, Stage, Tournament, TournamentError,
};

/// Set the winner of a match in the current round (Matches only).
///
/// Picking the winner a match already has is a no-op. A bye can never be picked.
pub fn pick_winner(
    tournament: &mut Tournament,
    match_id: MatchId,
    participant_id: ParticipantId,
) -> Result<(), TournamentError> {
    if tournament.stage != Stage::Matches {
        return Err(TournamentError::InvalidState);
    }
    let m = tournament
        .current_round_mut()
        .ok_or(TournamentError::InvalidState)?
        .get_match_mut(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    assign_winner(m, participant_id)
}

/// Assign `participant_id` as the winner of `m`. Shared by knockout and special matches.
pub(crate) fn assign_winner(
    m: &mut Match,
    participant_id: ParticipantId,
) -> Result<(), TournamentError> {
    let player = m
        .slot_of(participant_id)
        .and_then(Slot::participant)
        .cloned()
        .ok_or(TournamentError::NotInMatch(participant_id))?;
    match m.winner_id() {
        Some(current) if current == participant_id => Ok(()),
        Some(_) => Err(TournamentError::WinnerAlreadyPicked),
        None => {
            log::debug!("{}: winner {}", m, player.name);
            m.winner = Some(player);
            Ok(())
        }
    }
}

/// Close the current round (Matches only); every match must have a winner.
///
/// - more than 2 matches: winners are paired into a new round.
/// - exactly 2 matches: semifinal split into bronze match and final (stage Bronze).
/// - a single match (two participants): that match is the final (stage Award).
pub fn process_round_results(tournament: &mut Tournament) -> Result<(), TournamentError> {
    if tournament.stage != Stage::Matches {
        return Err(TournamentError::InvalidState);
    }
    let current = tournament.current_matches();
    if current.is_empty() {
        return Err(TournamentError::InvalidState);
    }
    if !current.iter().all(Match::is_decided) {
        return Err(TournamentError::IncompleteResults);
    }

    match current.len() {
        1 => award_single_final(tournament),
        2 => split_semi_finals(tournament),
        _ => {
            let next = next_round(current);
            log::info!(
                "Round {} finished, round {} has {} matches",
                tournament.round_number(),
                tournament.round_number() + 1,
                next.len()
            );
            tournament.rounds.push(Round::new(next));
            Ok(())
        }
    }
}
