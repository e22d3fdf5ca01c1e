//! Integration tests for the tournament stages: entry, knockout rounds, bronze, final, award.

use table_tennis_knockout::{
    bracket_overview, finish_round, pick_special_winner, pick_winner, start_tournament,
    start_tournament_with, EntryOrder, ParticipantId, SpecialMatch, Stage, Tournament,
    TournamentError,
};

fn tournament_with(names: &[&str]) -> (Tournament, Vec<ParticipantId>) {
    let mut t = Tournament::new();
    let ids = names
        .iter()
        .map(|n| t.add_participant(*n).unwrap())
        .collect();
    (t, ids)
}

fn started(names: &[&str]) -> (Tournament, Vec<ParticipantId>) {
    let (mut t, ids) = tournament_with(names);
    start_tournament_with(&mut t, &mut EntryOrder).unwrap();
    (t, ids)
}

/// Let player 1 win every undecided match of the current round.
fn player_1_wins_all(t: &mut Tournament) {
    let picks: Vec<_> = t
        .current_matches()
        .iter()
        .filter(|m| !m.is_decided())
        .map(|m| (m.id, m.player_1.id().unwrap()))
        .collect();
    for (match_id, participant_id) in picks {
        pick_winner(t, match_id, participant_id).unwrap();
    }
}

#[test]
fn add_participant_trims_and_rejects_duplicates() {
    let mut t = Tournament::new();
    t.add_participant("  Anna ").unwrap();
    assert_eq!(t.participants[0].name, "Anna");
    assert_eq!(
        t.add_participant("Anna"),
        Err(TournamentError::DuplicateParticipantName)
    );
    assert_eq!(t.add_participant("   "), Err(TournamentError::EmptyName));
    // Exact match only.
    t.add_participant("anna").unwrap();
    assert_eq!(t.participants.len(), 2);
}

#[test]
fn remove_participant_by_id() {
    let (mut t, ids) = tournament_with(&["A", "B", "C"]);
    t.remove_participant(ids[1]).unwrap();
    let names: Vec<_> = t.participants.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["A", "C"]);
    assert_eq!(
        t.remove_participant(ids[1]),
        Err(TournamentError::ParticipantNotFound(ids[1]))
    );
}

#[test]
fn start_requires_two_participants() {
    let (mut t, _) = tournament_with(&["Solo"]);
    assert!(matches!(
        start_tournament(&mut t),
        Err(TournamentError::NotEnoughParticipants { required: 2 })
    ));
    assert_eq!(t.stage, Stage::Entry);
    assert!(t.rounds.is_empty());
}

#[test]
fn entry_is_closed_after_start() {
    let (mut t, ids) = started(&["A", "B", "C", "D"]);
    assert_eq!(t.add_participant("E"), Err(TournamentError::InvalidState));
    assert_eq!(t.remove_participant(ids[0]), Err(TournamentError::InvalidState));
    assert_eq!(start_tournament(&mut t), Err(TournamentError::InvalidState));
}

#[test]
fn four_participants_end_to_end() {
    let (mut t, ids) = started(&["A", "B", "C", "D"]);
    let [a, b, c, d] = [ids[0], ids[1], ids[2], ids[3]];
    assert_eq!(t.stage, Stage::Matches);
    assert_eq!(t.round_number(), 1);
    assert!(t.started_at.is_some());

    let round_1: Vec<_> = t.current_matches().to_vec();
    assert_eq!(round_1.len(), 2);
    assert!(round_1[0].player_1.holds(a) && round_1[0].player_2.holds(b));
    assert!(round_1[1].player_1.holds(c) && round_1[1].player_2.holds(d));

    pick_winner(&mut t, round_1[0].id, a).unwrap();
    pick_winner(&mut t, round_1[1].id, c).unwrap();
    finish_round(&mut t).unwrap();

    assert_eq!(t.stage, Stage::Bronze);
    let bronze = t.bronze_match.clone().unwrap();
    let final_match = t.final_match.clone().unwrap();
    assert!(bronze.player_1.holds(b) && bronze.player_2.holds(d));
    assert!(final_match.player_1.holds(a) && final_match.player_2.holds(c));
    assert!(bronze.winner.is_none() && final_match.winner.is_none());

    pick_special_winner(&mut t, SpecialMatch::Bronze, b).unwrap();
    finish_round(&mut t).unwrap();
    assert_eq!(t.stage, Stage::Final);

    pick_special_winner(&mut t, SpecialMatch::Final, a).unwrap();
    finish_round(&mut t).unwrap();
    assert_eq!(t.stage, Stage::Award);
    assert!(t.completed_at.is_some());

    let podium: Vec<_> = t.podium.iter().map(|p| p.id).collect();
    assert_eq!(podium, [a, c, b]);

    // History keeps round 1 with its winners.
    assert_eq!(t.rounds.len(), 1);
    assert_eq!(t.rounds[0].matches[0].winner_id(), Some(a));
}

#[test]
fn three_participants_bye_goes_to_bronze() {
    let (mut t, ids) = started(&["A", "B", "C"]);
    let [a, b, c] = [ids[0], ids[1], ids[2]];

    let round_1 = t.current_matches().to_vec();
    assert_eq!(round_1.len(), 2);
    assert_eq!(round_1.iter().filter(|m| m.player_2.is_bye()).count(), 1);
    assert!(round_1[0].player_1.holds(a) && round_1[0].player_2.is_bye());
    // First-round byes advance without a pick.
    assert_eq!(round_1[0].winner_id(), Some(a));
    assert!(round_1[1].winner.is_none());

    pick_winner(&mut t, round_1[1].id, b).unwrap();
    finish_round(&mut t).unwrap();
    assert_eq!(t.stage, Stage::Bronze);

    let bronze = t.bronze_match.clone().unwrap();
    assert!(bronze.player_1.is_bye());
    assert_eq!(bronze.winner_id(), Some(c));

    finish_round(&mut t).unwrap();
    pick_special_winner(&mut t, SpecialMatch::Final, b).unwrap();
    finish_round(&mut t).unwrap();

    let podium: Vec<_> = t.podium.iter().map(|p| p.id).collect();
    assert_eq!(podium, [b, a, c]);
}

#[test]
fn two_participants_play_the_final_directly() {
    let (mut t, ids) = started(&["A", "B"]);
    let m = t.current_matches()[0].clone();
    pick_winner(&mut t, m.id, ids[1]).unwrap();
    finish_round(&mut t).unwrap();

    assert_eq!(t.stage, Stage::Award);
    assert!(t.bronze_match.is_none());
    assert_eq!(t.final_match.as_ref().and_then(|m| m.winner_id()), Some(ids[1]));
    let podium: Vec<_> = t.podium.iter().map(|p| p.id).collect();
    assert_eq!(podium, [ids[1], ids[0]]);
}

#[test]
fn rounds_halve_until_semifinal_split() {
    let names: Vec<String> = (0..16).map(|i| format!("P{i}")).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let (mut t, _) = started(&refs);

    for expected in [8, 4, 2] {
        assert_eq!(t.current_matches().len(), expected);
        player_1_wins_all(&mut t);
        finish_round(&mut t).unwrap();
    }
    assert_eq!(t.round_number(), 3);
    assert_eq!(t.stage, Stage::Bronze);
}

#[test]
fn five_participants_byes_resolve_and_bracket_completes() {
    let (mut t, ids) = started(&["A", "B", "C", "D", "E"]);
    let round_1 = t.current_matches().to_vec();
    assert_eq!(round_1.len(), 4);
    assert_eq!(round_1.iter().filter(|m| m.is_decided()).count(), 3);

    player_1_wins_all(&mut t);
    finish_round(&mut t).unwrap();
    assert_eq!(t.stage, Stage::Matches);
    assert_eq!(t.round_number(), 2);
    let round_2 = t.current_matches().to_vec();
    assert_eq!(round_2.len(), 2);
    assert!(round_2.iter().all(|m| !m.has_bye()));
    assert!(round_2[0].involves(ids[0]) && round_2[0].involves(ids[1]));
    assert!(round_2[1].involves(ids[2]) && round_2[1].involves(ids[3]));

    player_1_wins_all(&mut t);
    finish_round(&mut t).unwrap();
    assert_eq!(t.stage, Stage::Bronze);
}

#[test]
fn pick_winner_is_idempotent_and_final() {
    let (mut t, ids) = started(&["A", "B", "C", "D"]);
    let match_id = t.current_matches()[0].id;

    pick_winner(&mut t, match_id, ids[0]).unwrap();
    let before = t.snapshot();
    pick_winner(&mut t, match_id, ids[0]).unwrap();
    assert_eq!(t.snapshot().rounds, before.rounds);

    assert_eq!(
        pick_winner(&mut t, match_id, ids[1]),
        Err(TournamentError::WinnerAlreadyPicked)
    );
    assert_eq!(t.current_matches()[0].winner_id(), Some(ids[0]));
}

#[test]
fn pick_winner_rejects_outsiders_and_unknown_matches() {
    let (mut t, ids) = started(&["A", "B", "C", "D"]);
    let match_id = t.current_matches()[0].id;
    assert_eq!(
        pick_winner(&mut t, match_id, ids[2]),
        Err(TournamentError::NotInMatch(ids[2]))
    );
    let unknown = uuid::Uuid::new_v4();
    assert_eq!(
        pick_winner(&mut t, unknown, ids[0]),
        Err(TournamentError::MatchNotFound(unknown))
    );
}

#[test]
fn finish_round_needs_all_winners() {
    let (mut t, ids) = started(&["A", "B", "C", "D"]);
    let match_id = t.current_matches()[0].id;
    pick_winner(&mut t, match_id, ids[0]).unwrap();

    assert_eq!(finish_round(&mut t), Err(TournamentError::IncompleteResults));
    assert_eq!(t.stage, Stage::Matches);
    assert!(t.bronze_match.is_none());
}

#[test]
fn special_matches_follow_stage_order() {
    let (mut t, ids) = started(&["A", "B", "C", "D"]);
    assert_eq!(
        pick_special_winner(&mut t, SpecialMatch::Bronze, ids[1]),
        Err(TournamentError::InvalidState)
    );
    player_1_wins_all(&mut t);
    finish_round(&mut t).unwrap();

    // Bronze stage: final cannot be decided yet and bronze must be decided to move on.
    assert_eq!(
        pick_special_winner(&mut t, SpecialMatch::Final, ids[0]),
        Err(TournamentError::InvalidState)
    );
    assert_eq!(finish_round(&mut t), Err(TournamentError::IncompleteResults));
    assert_eq!(
        pick_special_winner(&mut t, SpecialMatch::Bronze, ids[0]),
        Err(TournamentError::NotInMatch(ids[0]))
    );
    let semifinal = t.rounds[0].matches[0].id;
    assert_eq!(
        pick_winner(&mut t, semifinal, ids[0]),
        Err(TournamentError::InvalidState)
    );
}

#[test]
fn reset_from_award_clears_everything() {
    let (mut t, _) = started(&["A", "B"]);
    player_1_wins_all(&mut t);
    finish_round(&mut t).unwrap();
    assert_eq!(t.stage, Stage::Award);
    assert_eq!(finish_round(&mut t), Err(TournamentError::InvalidState));

    t.reset_all();
    let s = t.snapshot();
    assert_eq!(s.stage, Stage::Entry);
    assert!(s.participants.is_empty());
    assert!(s.rounds.is_empty());
    assert!(s.current_matches.is_empty());
    assert_eq!(s.round_number, 0);
    assert!(s.bronze_match.is_none() && s.final_match.is_none());
    assert!(s.podium.is_empty());
    assert!(s.started_at.is_none() && s.completed_at.is_none());
}

#[test]
fn restart_keeps_participants() {
    let (mut t, ids) = started(&["A", "B", "C"]);
    t.restart_tournament().unwrap();
    assert_eq!(t.stage, Stage::Entry);
    assert!(t.rounds.is_empty());
    let kept: Vec<_> = t.participants.iter().map(|p| p.id).collect();
    assert_eq!(kept, ids);
    assert_eq!(t.restart_tournament(), Err(TournamentError::InvalidState));
}

#[test]
fn overview_lists_rounds_and_placements() {
    let (mut t, _) = started(&["A", "B", "C", "D"]);
    player_1_wins_all(&mut t);
    finish_round(&mut t).unwrap();

    let overview = bracket_overview(&t);
    assert!(overview.starts_with("Round 1\n  A vs. B -> A\n  C vs. D -> C"));
    assert!(overview.contains("Third place\n  B vs. D"));
    assert!(overview.contains("Final\n  A vs. C"));
    assert!(!overview.contains("Placements"));
}

#[test]
fn snapshot_serializes_slots_with_kind_tag() {
    let (t, _) = started(&["A", "B", "C"]);
    let json = serde_json::to_value(t.snapshot()).unwrap();
    assert_eq!(json["stage"], "matches");
    assert_eq!(json["round_number"], 1);
    assert_eq!(json["current_matches"][0]["player_2"]["kind"], "bye");
    assert_eq!(json["current_matches"][0]["player_1"]["kind"], "player");
    assert_eq!(json["current_matches"][0]["player_1"]["name"], "A");
}
