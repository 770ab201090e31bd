use colored::Colorize;

use crate::domain::{Pairing, StandingRow};
use crate::errors::Result;

pub fn standings_table(standings: &[StandingRow]) -> String {
    let mut out = format!(
        "{}\n",
        format!(
            "{:>4}  {:>6}  {:<24} {:>5} {:>6} {:>7}",
            "Rank", "Id", "Name", "Wins", "Losses", "Matches"
        )
        .bold()
    );

    for (idx, row) in standings.iter().enumerate() {
        out.push_str(&format!(
            "{:>4}  {:>6}  {:<24} {:>5} {:>6} {:>7}\n",
            idx + 1,
            row.id,
            row.name,
            row.wins,
            row.losses(),
            row.matches
        ));
    }

    out
}

pub fn pairings_table(pairings: &[Pairing]) -> String {
    let mut out = format!(
        "{}\n",
        format!("{:>5}  {:<30}  {:<30}", "Board", "Player", "Opponent").bold()
    );

    for (idx, pairing) in pairings.iter().enumerate() {
        out.push_str(&format!(
            "{:>5}  {:<30}  {:<30}\n",
            idx + 1,
            format!("#{} {}", pairing.id1, pairing.name1),
            format!("#{} {}", pairing.id2, pairing.name2)
        ));
    }

    out
}

pub fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
