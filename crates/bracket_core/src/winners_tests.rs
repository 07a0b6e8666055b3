use super::*;
use crate::types::{Match, MatchRef};

/// Lay out the winner side for `n` players named by their seed rank.
fn layout(n: usize, starting_round: u32) -> (WinnerBracket, Vec<Match<usize>>) {
    let field = Field::new(n).unwrap();
    let mut draft = Draft::default();
    let bracket = build_winner_bracket(&field, starting_round, &mut draft);
    let players: Vec<usize> = (1..=n).collect();
    (bracket, draft.finish(&players))
}

fn find(matches: &[Match<usize>], round: u32, number: u32) -> &Match<usize> {
    matches
        .iter()
        .find(|m| m.round == round && m.match_number == number)
        .unwrap()
}

#[test]
fn test_four_players_pair_by_seed() {
    let (bracket, matches) = layout(4, 1);
    assert!(bracket.play_in.is_none());
    assert_eq!(bracket.rounds.len(), 2);

    let m1 = find(&matches, 1, 1);
    let m2 = find(&matches, 1, 2);
    assert_eq!((m1.player1, m1.player2), (Some(1), Some(4)));
    assert_eq!((m2.player1, m2.player2), (Some(2), Some(3)));
    assert_eq!(m1.win_advance, Some(MatchRef::new(2, 1)));
    assert_eq!(m2.win_advance, Some(MatchRef::new(2, 1)));

    // The final is linked by the championship linker, not here
    assert_eq!(find(&matches, 2, 1).win_advance, None);
}

#[test]
fn test_round_sizes_halve() {
    let (bracket, _) = layout(32, 1);
    let sizes: Vec<u32> = bracket.rounds.iter().map(|r| r.matches).collect();
    assert_eq!(sizes, vec![16, 8, 4, 2, 1]);
}

#[test]
fn test_win_links_use_ceil_half() {
    let (_, matches) = layout(16, 1);
    for m in matches.iter().filter(|m| m.round == 1) {
        let target = m.win_advance.unwrap();
        assert_eq!(target.round, 2);
        assert_eq!(target.match_number, m.match_number.div_ceil(2));
    }
}

#[test]
fn test_five_players_single_play_in() {
    let (bracket, matches) = layout(5, 1);
    let play_in = bracket.play_in.unwrap();
    assert_eq!(play_in.number, 1);
    assert_eq!(play_in.matches, 1);

    // Seed 5 plays seed 4 for seed 4's slot against seed 1
    let pi = find(&matches, 1, 1);
    assert_eq!((pi.player1, pi.player2), (Some(5), Some(4)));
    assert_eq!(pi.win_advance, Some(MatchRef::new(2, 1)));

    let top = find(&matches, 2, 1);
    assert_eq!((top.player1, top.player2), (Some(1), None));
    let bottom = find(&matches, 2, 2);
    assert_eq!((bottom.player1, bottom.player2), (Some(2), Some(3)));
}

#[test]
fn test_large_remainder_empties_whole_matches() {
    let (_, matches) = layout(7, 1);

    let play_ins: Vec<_> = matches.iter().filter(|m| m.round == 1).collect();
    assert_eq!(play_ins.len(), 3);
    assert_eq!((play_ins[1].player1, play_ins[1].player2), (Some(6), Some(3)));
    assert_eq!((play_ins[2].player1, play_ins[2].player2), (Some(7), Some(2)));

    // Seeds 2 and 3 both left for play-ins, so match 2 is fed by two links
    let m2 = find(&matches, 2, 2);
    assert_eq!(m2.seeded_players(), 0);
    let feeders = matches
        .iter()
        .filter(|m| m.win_advance == Some(MatchRef::new(2, 2)))
        .count();
    assert_eq!(feeders, 2);
}

#[test]
fn test_first_full_round_always_has_two_entrants() {
    for n in 2..=64 {
        let (bracket, matches) = layout(n, 1);
        let first = bracket.first_full();
        for m in matches.iter().filter(|m| m.round == first.number) {
            let linked = matches
                .iter()
                .filter(|x| x.win_advance == Some(m.reference()))
                .count();
            assert_eq!(m.seeded_players() + linked, 2, "{n} players, match {}", m.match_number);
        }
    }
}

#[test]
fn test_starting_round_offsets_everything() {
    let (bracket, matches) = layout(6, 4);
    assert_eq!(bracket.play_in.unwrap().number, 4);
    assert_eq!(bracket.first_full().number, 5);
    assert_eq!(bracket.final_round().number, 6);
    assert!(matches.iter().all(|m| m.round >= 4));
    assert_eq!(find(&matches, 4, 2).win_advance, Some(MatchRef::new(5, 2)));
}
