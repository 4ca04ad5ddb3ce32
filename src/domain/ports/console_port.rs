//! Game console port definition.

use async_trait::async_trait;

use crate::domain::entities::Player;
use crate::domain::errors::ConsoleError;

/// Port for the game server's remote console.
#[async_trait]
pub trait ConsolePort: Send + Sync {
    /// Sends a console command and returns the server's reply text.
    async fn send_command(&self, command: &str) -> Result<String, ConsoleError>;

    /// Returns the players currently connected.
    async fn status(&self) -> Result<Vec<Player>, ConsoleError>;

    /// Reads a server cvar value.
    async fn cvar(&self, name: &str) -> Result<String, ConsoleError>;
}

#[cfg(test)]
#[allow(dead_code)]
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};

    /// Mock console that records every command sent.
    pub struct MockConsole {
        pub commands: Arc<Mutex<Vec<String>>>,
        fail: AtomicBool,
    }

    impl MockConsole {
        pub fn new() -> Self {
            Self {
                commands: Arc::new(Mutex::new(Vec::new())),
                fail: AtomicBool::new(false),
            }
        }

        pub fn set_fail(&self, value: bool) {
            self.fail.store(value, Ordering::SeqCst);
        }

        pub fn sent_commands(&self) -> Vec<String> {
            self.commands.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ConsolePort for MockConsole {
        async fn send_command(&self, command: &str) -> Result<String, ConsoleError> {
            if self.fail.load(Ordering::SeqCst) {
                return Err(ConsoleError::Timeout { timeout_ms: 0 });
            }
            self.commands.lock().unwrap().push(command.to_string());
            Ok(String::new())
        }

        async fn status(&self) -> Result<Vec<Player>, ConsoleError> {
            Ok(Vec::new())
        }

        async fn cvar(&self, _name: &str) -> Result<String, ConsoleError> {
            Ok("Test Server".to_string())
        }
    }
}
