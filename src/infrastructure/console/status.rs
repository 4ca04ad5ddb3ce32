//! Parsers for CoD4 console responses.

use regex::Regex;

use crate::domain::entities::{Player, strip_color_codes};
use crate::domain::errors::ConsoleError;

/// Parses the player table out of a `status` response.
///
/// The table looks like:
///
/// ```text
/// map: mp_crash
/// num score ping guid   name            lastmsg address               qport rate
/// --- ----- ---- ------ --------------- ------- --------------------- ----- -----
///   0     0    0 0      bot0^7                0 bot                       0 16384
///   4    10   42 123456 Alice^7              50 1.2.3.4:28960          1234 25000
/// ```
///
/// Names may contain spaces, so rows are split from both ends: the first
/// four tokens are num/score/ping/guid, the last four lastmsg/address/
/// qport/rate, and whatever sits between is the name. A row whose address
/// column reads `bot` is a server-side bot.
///
/// # Errors
/// Returns a protocol error when the response carries no player table.
pub fn parse_status(raw: &str) -> Result<Vec<Player>, ConsoleError> {
    let mut players = Vec::new();
    let mut in_table = false;

    for line in raw.lines() {
        let trimmed = line.trim();
        if !in_table {
            if trimmed.starts_with("num ") {
                in_table = true;
            }
            continue;
        }
        if trimmed.is_empty() || trimmed.starts_with("---") {
            continue;
        }
        if let Some(player) = parse_row(trimmed) {
            players.push(player);
        }
    }

    if !in_table {
        return Err(ConsoleError::protocol(
            "status response carries no player table",
        ));
    }

    Ok(players)
}

fn parse_row(line: &str) -> Option<Player> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 9 {
        return None;
    }

    let cid: u8 = tokens[0].parse().ok()?;
    let address = tokens[tokens.len() - 3];
    let name = tokens[4..tokens.len() - 4].join(" ");
    if name.is_empty() {
        return None;
    }

    Some(Player::new(cid, name, address == "bot"))
}

/// Extracts a cvar value from the server's `"<name>" is: "<value>"` reply.
///
/// # Errors
/// Returns a protocol error when the reply does not carry the cvar.
pub fn parse_cvar(name: &str, raw: &str) -> Result<String, ConsoleError> {
    let pattern = format!(r#""{}" is:\s*"([^"]*)""#, regex::escape(name));
    let re = Regex::new(&pattern).map_err(|e| ConsoleError::protocol(e.to_string()))?;

    re.captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|value| strip_color_codes(value.as_str()).trim().to_string())
        .ok_or_else(|| ConsoleError::protocol(format!("no value for cvar {name} in reply")))
}
