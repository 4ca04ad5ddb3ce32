//! Connected player entity.

use serde::{Deserialize, Serialize};

/// Client slot number assigned by the server (0..=63 on CoD4X).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientId(pub u8);

impl ClientId {
    /// Returns the raw slot number.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for ClientId {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

/// A player currently connected to the server.
///
/// Built from a `status` response row; `name` is the raw in-game name and
/// may still carry `^digit` color codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    cid: ClientId,
    name: String,
    bot: bool,
}

impl Player {
    /// Creates a new player.
    #[must_use]
    pub fn new(cid: impl Into<ClientId>, name: impl Into<String>, bot: bool) -> Self {
        Self {
            cid: cid.into(),
            name: name.into(),
            bot,
        }
    }

    /// Returns the client slot number.
    #[must_use]
    pub const fn cid(&self) -> ClientId {
        self.cid
    }

    /// Returns the raw in-game name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns whether this client is a server-side bot.
    #[must_use]
    pub const fn is_bot(&self) -> bool {
        self.bot
    }

    /// Returns the name with color codes stripped, suitable for display.
    #[must_use]
    pub fn clean_name(&self) -> String {
        super::capture::strip_color_codes(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_creation() {
        let player = Player::new(4_u8, "Alice", false);

        assert_eq!(player.cid().as_u8(), 4);
        assert_eq!(player.name(), "Alice");
        assert!(!player.is_bot());
    }

    #[test]
    fn test_clean_name_strips_colors() {
        let player = Player::new(2_u8, "^1Al^4ice^7", false);
        assert_eq!(player.clean_name(), "Alice");
    }
}
