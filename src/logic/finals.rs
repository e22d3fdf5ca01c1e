//! Final stages: semifinal split, bronze match, final, and podium.

use crate::logic::bracket::resolve_byes;
use crate::logic::knockout::assign_winner;
use crate::models::{
    Match, Participant, ParticipantId, SpecialMatch, Stage, Tournament, TournamentError,
};
use chrono::Utc;

/// Turn the two decided semifinals into a bronze match (losers) and a final (winners).
///
/// With three participants one semifinal was against a bye, so the bye lands in the bronze
/// match and the remaining player takes third place without playing.
pub(crate) fn split_semi_finals(tournament: &mut Tournament) -> Result<(), TournamentError> {
    let (mut bronze, final_match) = {
        let [first, second] = tournament.current_matches() else {
            return Err(TournamentError::InvalidState);
        };
        let loser = |m: &Match| m.loser().cloned().ok_or(TournamentError::IncompleteResults);
        let winner = |m: &Match| m.winner.clone().ok_or(TournamentError::IncompleteResults);
        (
            Match::new(loser(first)?, loser(second)?),
            Match::new(winner(first)?, winner(second)?),
        )
    };
    resolve_byes(std::slice::from_mut(&mut bronze));

    log::info!("Semifinals finished. Bronze: {}. Final: {}", bronze, final_match);
    tournament.bronze_match = Some(bronze);
    tournament.final_match = Some(final_match);
    tournament.stage = Stage::Bronze;
    Ok(())
}

/// Two participants: the only first-round match was the final.
pub(crate) fn award_single_final(tournament: &mut Tournament) -> Result<(), TournamentError> {
    let final_match = match tournament.current_matches() {
        [only] if only.is_decided() => only.clone(),
        [_] => return Err(TournamentError::IncompleteResults),
        _ => return Err(TournamentError::InvalidState),
    };
    tournament.podium = podium(&final_match, None);
    tournament.final_match = Some(final_match);
    complete(tournament);
    Ok(())
}

/// Set the winner of the bronze match (Bronze only) or the final (Final only).
pub fn pick_special_winner(
    tournament: &mut Tournament,
    kind: SpecialMatch,
    participant_id: ParticipantId,
) -> Result<(), TournamentError> {
    let (expected, m) = match kind {
        SpecialMatch::Bronze => (Stage::Bronze, tournament.bronze_match.as_mut()),
        SpecialMatch::Final => (Stage::Final, tournament.final_match.as_mut()),
    };
    if tournament.stage != expected {
        return Err(TournamentError::InvalidState);
    }
    let m = m.ok_or(TournamentError::InvalidState)?;
    assign_winner(m, participant_id)
}

/// Bronze match decided: move on to the final.
pub fn process_bronze_result(tournament: &mut Tournament) -> Result<(), TournamentError> {
    if tournament.stage != Stage::Bronze {
        return Err(TournamentError::InvalidState);
    }
    let bronze = tournament
        .bronze_match
        .as_ref()
        .ok_or(TournamentError::InvalidState)?;
    if !bronze.is_decided() {
        return Err(TournamentError::IncompleteResults);
    }
    tournament.stage = Stage::Final;
    Ok(())
}

/// Final decided: set the podium and complete the tournament.
pub fn process_final_result(tournament: &mut Tournament) -> Result<(), TournamentError> {
    if tournament.stage != Stage::Final {
        return Err(TournamentError::InvalidState);
    }
    let final_match = tournament
        .final_match
        .as_ref()
        .ok_or(TournamentError::InvalidState)?;
    if !final_match.is_decided() {
        return Err(TournamentError::IncompleteResults);
    }
    let third = tournament.bronze_match.as_ref().and_then(|m| m.winner.clone());
    tournament.podium = podium(final_match, third);
    complete(tournament);
    Ok(())
}

/// 1st = final winner, 2nd = the other finalist, 3rd = bronze winner (if any).
fn podium(final_match: &Match, third: Option<Participant>) -> Vec<Participant> {
    let first = final_match.winner.clone();
    let second = final_match
        .loser()
        .and_then(|slot| slot.participant())
        .cloned();
    [first, second, third].into_iter().flatten().collect()
}

fn complete(tournament: &mut Tournament) {
    let names: Vec<&str> = tournament.podium.iter().map(|p| p.name.as_str()).collect();
    log::info!("Tournament completed. Podium: {}", names.join(", "));
    tournament.stage = Stage::Award;
    tournament.completed_at = Some(Utc::now());
}
