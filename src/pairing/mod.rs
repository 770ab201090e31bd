use log::{debug, warn};

use crate::domain::{Pairing, StandingRow};
use crate::errors::{Result, TournamentError};

/// Pairs each player with their neighbour in the standings: first with
/// second, third with fourth and so on. Output follows standings order.
///
/// Byes are not supported, so an odd number of rows is an error rather than
/// a silently unpaired player.
pub fn generate_pairings(standings: &[StandingRow]) -> Result<Vec<Pairing>> {
    if standings.len() % 2 != 0 {
        warn!(
            "Refusing to pair {} players: an even number is required",
            standings.len()
        );
        return Err(TournamentError::InvalidState(format!(
            "cannot pair an odd number of players ({})",
            standings.len()
        )));
    }

    let pairings: Vec<Pairing> = standings
        .chunks_exact(2)
        .map(|pair| Pairing::between(&pair[0], &pair[1]))
        .collect();

    debug!("Generated {} pairings", pairings.len());
    Ok(pairings)
}
