//! Bracket builder: first-round seeding with byes and winner-to-next-round pairing.
//!
//! These functions are pure apart from the injected [`SeedOrder`]; they never touch a
//! [`Tournament`](crate::models::Tournament).

use crate::models::{Match, Participant, MIN_PARTICIPANTS};
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;

/// Decides the order in which participants are seeded into the first round.
pub trait SeedOrder {
    fn arrange(&mut self, participants: &mut [Participant]);
}

/// Uniform random seeding (Fisher-Yates shuffle) driven by any `Rng`.
pub struct RandomOrder<R>(pub R);

impl RandomOrder<ThreadRng> {
    pub fn thread() -> Self {
        Self(rand::thread_rng())
    }
}

impl<R: Rng> SeedOrder for RandomOrder<R> {
    fn arrange(&mut self, participants: &mut [Participant]) {
        participants.shuffle(&mut self.0);
    }
}

/// Keeps entry order. Useful for tests and for manually seeded brackets.
#[derive(Clone, Copy, Debug, Default)]
pub struct EntryOrder;

impl SeedOrder for EntryOrder {
    fn arrange(&mut self, _participants: &mut [Participant]) {}
}

/// Build the first round.
///
/// 1. Arrange participants through `order`.
/// 2. Pad up to the next power of two with byes.
/// 3. Byes go to the earliest matches: each of the first `byes` participants meets a bye,
///    the rest are paired two at a time.
///
/// Bye matches are returned undecided. Returns no matches for fewer than two participants.
pub fn seed_first_round<O: SeedOrder + ?Sized>(participants: &[Participant], order: &mut O) -> Vec<Match> {
    if participants.len() < MIN_PARTICIPANTS {
        return Vec::new();
    }
    let mut arranged = participants.to_vec();
    order.arrange(&mut arranged);

    let target = arranged.len().next_power_of_two();
    let mut byes = target - arranged.len();
    let mut matches = Vec::with_capacity(target / 2);

    let mut remaining = arranged.into_iter();
    while let Some(first) = remaining.next() {
        if byes > 0 {
            byes -= 1;
            matches.push(Match::against_bye(first));
            continue;
        }
        match remaining.next() {
            Some(second) => matches.push(Match::new(first, second)),
            // Unreachable with a power-of-two target, kept so nobody is dropped.
            None => matches.push(Match::against_bye(first)),
        }
    }
    matches
}

/// Pair the winners of a completed round: (0,1), (2,3), ...
///
/// An odd winner out meets a bye and is already set as that match's winner.
/// Returns no matches if any match is still undecided.
pub fn next_round(completed: &[Match]) -> Vec<Match> {
    if !completed.iter().all(Match::is_decided) {
        return Vec::new();
    }
    let winners: Vec<Participant> = completed.iter().filter_map(|m| m.winner.clone()).collect();

    let pairs = winners.chunks_exact(2);
    let carried = pairs.remainder().first().cloned();
    let mut matches: Vec<Match> = pairs
        .map(|pair| Match::new(pair[0].clone(), pair[1].clone()))
        .collect();

    if let Some(player) = carried {
        let mut walkover = Match::against_bye(player.clone());
        walkover.winner = Some(player);
        matches.push(walkover);
    }
    matches
}

/// Set the real participant as winner of every undecided match against a bye.
/// Returns how many matches were resolved.
pub fn resolve_byes(matches: &mut [Match]) -> usize {
    let mut resolved = 0;
    for m in matches.iter_mut().filter(|m| !m.is_decided()) {
        if let Some(player) = m.walkover_participant().cloned() {
            log::debug!("{} advances on a bye", player.name);
            m.winner = Some(player);
            resolved += 1;
        }
    }
    resolved
}
