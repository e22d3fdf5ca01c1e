//! Entry phase: start tournament (transition from Entry to Matches).

use crate::logic::bracket::{resolve_byes, seed_first_round, RandomOrder, SeedOrder};
use crate::models::{Round, Stage, Tournament, TournamentError, MIN_PARTICIPANTS};
use chrono::Utc;

/// Start the tournament with a random seeding.
pub fn start_tournament(tournament: &mut Tournament) -> Result<(), TournamentError> {
    start_tournament_with(tournament, &mut RandomOrder::thread())
}

/// Start the tournament seeding through `order`: build round 1, let bye matches advance
/// immediately, and move to Matches.
pub fn start_tournament_with<O: SeedOrder + ?Sized>(
    tournament: &mut Tournament,
    order: &mut O,
) -> Result<(), TournamentError> {
    if tournament.stage != Stage::Entry {
        return Err(TournamentError::InvalidState);
    }
    if tournament.participants.len() < MIN_PARTICIPANTS {
        return Err(TournamentError::NotEnoughParticipants {
            required: MIN_PARTICIPANTS,
        });
    }
    let mut matches = seed_first_round(&tournament.participants, order);
    let byes = resolve_byes(&mut matches);

    log::info!(
        "Tournament started: {} participants, {} matches, {} byes",
        tournament.participants.len(),
        matches.len(),
        byes
    );
    tournament.rounds = vec![Round::new(matches)];
    tournament.stage = Stage::Matches;
    tournament.started_at = Some(Utc::now());
    Ok(())
}
