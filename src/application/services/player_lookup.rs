//! Player lookup by slot number or name.

use thiserror::Error;

use crate::domain::entities::Player;

/// Player lookup error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum LookupError {
    #[error("no connected player matches '{query}'")]
    NotFound { query: String },

    #[error("'{query}' matches several players: {candidates}")]
    Ambiguous { query: String, candidates: String },
}

/// Resolves a capture target from a `status` listing.
///
/// A numeric query is tried as a client slot first. Otherwise names are
/// compared with color codes stripped, case-insensitively; an exact match
/// wins, then a substring match as long as it is unique.
///
/// # Errors
/// Returns an error when nothing matches or a partial name matches more
/// than one player.
pub fn find_player(players: &[Player], query: &str) -> Result<Player, LookupError> {
    if let Ok(cid) = query.parse::<u8>()
        && let Some(player) = players.iter().find(|p| p.cid().as_u8() == cid)
    {
        return Ok(player.clone());
    }

    let needle = query.to_lowercase();

    if let Some(player) = players
        .iter()
        .find(|p| p.clean_name().to_lowercase() == needle)
    {
        return Ok(player.clone());
    }

    let matches: Vec<&Player> = players
        .iter()
        .filter(|p| p.clean_name().to_lowercase().contains(&needle))
        .collect();

    match matches.as_slice() {
        [] => Err(LookupError::NotFound {
            query: query.to_string(),
        }),
        [player] => Ok((*player).clone()),
        many => Err(LookupError::Ambiguous {
            query: query.to_string(),
            candidates: many
                .iter()
                .map(|p| p.clean_name())
                .collect::<Vec<_>>()
                .join(", "),
        }),
    }
}
