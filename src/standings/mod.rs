use std::cmp::Ordering;
use std::collections::HashMap;

use log::debug;

use crate::domain::{Match, Player, PlayerId, StandingRow};

#[derive(Debug, Default, Clone, Copy)]
struct Record {
    wins: u32,
    matches: u32,
}

/// Aggregates raw matches into one row per registered player, best record first.
///
/// Every player gets a row, including players who have not played yet.
/// Ties on wins are broken by ascending player id so identical data always
/// yields identical standings. Matches naming unknown players are ignored.
pub fn compute_standings(players: &[Player], matches: &[Match]) -> Vec<StandingRow> {
    let records = count_records(matches);

    let mut standings: Vec<StandingRow> = players
        .iter()
        .map(|player| {
            let record = records.get(&player.id).copied().unwrap_or_default();
            StandingRow {
                id: player.id,
                name: player.name.clone(),
                wins: record.wins,
                matches: record.matches,
            }
        })
        .collect();

    standings.sort_by(rank_order);
    debug!(
        "Computed standings for {} players from {} matches",
        standings.len(),
        matches.len()
    );
    standings
}

fn count_records(matches: &[Match]) -> HashMap<PlayerId, Record> {
    let mut records: HashMap<PlayerId, Record> = HashMap::new();

    for game in matches {
        let winner = records.entry(game.winner).or_default();
        winner.wins += 1;
        winner.matches += 1;

        if game.loser != game.winner {
            records.entry(game.loser).or_default().matches += 1;
        }
    }

    records
}

/// Wins descending, then player id ascending
pub fn rank_order(a: &StandingRow, b: &StandingRow) -> Ordering {
    b.wins.cmp(&a.wins).then_with(|| a.id.cmp(&b.id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players(names: &[&str]) -> Vec<Player> {
        names
            .iter()
            .enumerate()
            .map(|(idx, name)| Player {
                id: idx as PlayerId + 1,
                name: name.to_string(),
                created_at: None,
            })
            .collect()
    }

    fn game(id: i32, winner: PlayerId, loser: PlayerId) -> Match {
        Match {
            id,
            winner,
            loser,
            created_at: None,
        }
    }

    #[test]
    fn test_no_matches_gives_zero_records() {
        let roster = players(&["Ann", "Bob", "Cid", "Dee"]);

        let standings = compute_standings(&roster, &[]);

        assert_eq!(standings.len(), 4);
        assert!(standings.iter().all(|row| row.wins == 0 && row.matches == 0));
        let ids: Vec<_> = standings.iter().map(|row| row.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_winners_rank_first_with_id_tie_break() {
        let roster = players(&["P1", "P2", "P3", "P4"]);
        let results = vec![game(1, 1, 2), game(2, 3, 4)];

        let standings = compute_standings(&roster, &results);

        let ids: Vec<_> = standings.iter().map(|row| row.id).collect();
        assert_eq!(ids, vec![1, 3, 2, 4]);
        assert_eq!((standings[0].wins, standings[0].matches), (1, 1));
        assert_eq!((standings[2].wins, standings[2].matches), (0, 1));
        assert_eq!(standings[2].losses(), 1);
    }

    #[test]
    fn test_record_invariants_hold() {
        let roster = players(&["A", "B", "C", "D", "E", "F"]);
        let results = vec![
            game(1, 1, 2),
            game(2, 3, 4),
            game(3, 5, 6),
            game(4, 1, 3),
            game(5, 6, 2),
            game(6, 4, 5),
            game(7, 1, 6),
        ];

        let standings = compute_standings(&roster, &results);

        assert!(standings.iter().all(|row| row.matches >= row.wins));
        let total_wins: u32 = standings.iter().map(|row| row.wins).sum();
        assert_eq!(total_wins as usize, results.len());
        let total_appearances: u32 = standings.iter().map(|row| row.matches).sum();
        assert_eq!(total_appearances as usize, results.len() * 2);
        assert_eq!(standings[0].id, 1);
        assert_eq!(standings[0].wins, 3);
        assert!(standings.windows(2).all(|pair| pair[0].wins >= pair[1].wins));
    }

    #[test]
    fn test_repeated_computation_is_identical() {
        let roster = players(&["A", "B", "C", "D"]);
        let results = vec![game(1, 4, 1), game(2, 2, 3)];

        let first = compute_standings(&roster, &results);
        let second = compute_standings(&roster, &results);

        assert_eq!(first, second);
    }

    #[test]
    fn test_matches_for_unknown_players_are_ignored() {
        let roster = players(&["A", "B"]);
        let results = vec![game(1, 1, 99)];

        let standings = compute_standings(&roster, &results);

        assert_eq!(standings.len(), 2);
        assert_eq!((standings[0].id, standings[0].wins), (1, 1));
    }
}
