//! Quake-style UDP RCON client for CoD4X servers.

use std::time::Duration;

use async_trait::async_trait;
use tokio::net::UdpSocket;
use tokio::time::timeout;
use tracing::{debug, trace};

use crate::domain::entities::Player;
use crate::domain::errors::ConsoleError;
use crate::domain::ports::ConsolePort;

/// Out-of-band packet header shared by request and response.
const OOB_HEADER: &[u8] = b"\xff\xff\xff\xff";
/// Response payload prefix.
const PRINT_HEADER: &[u8] = b"\xff\xff\xff\xffprint\n";
/// Largest datagram the server sends.
const MAX_PACKET: usize = 16_384;
/// How long to wait for continuation datagrams after the first reply.
const FOLLOWUP_TIMEOUT: Duration = Duration::from_millis(150);

/// Default bound on waiting for the first reply datagram.
pub const DEFAULT_REPLY_TIMEOUT: Duration = Duration::from_secs(2);

/// RCON console client.
///
/// Every command opens a fresh ephemeral socket; the protocol is
/// stateless and the server keys nothing on the source port.
pub struct RconConsole {
    address: String,
    password: String,
    reply_timeout: Duration,
}

impl RconConsole {
    /// Creates a console client for `address` (`host:port`).
    #[must_use]
    pub fn new(address: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            password: password.into(),
            reply_timeout: DEFAULT_REPLY_TIMEOUT,
        }
    }

    /// Overrides the reply timeout.
    #[must_use]
    pub const fn with_timeout(mut self, reply_timeout: Duration) -> Self {
        self.reply_timeout = reply_timeout;
        self
    }

    fn build_packet(&self, command: &str) -> Vec<u8> {
        let mut packet =
            Vec::with_capacity(OOB_HEADER.len() + 6 + self.password.len() + command.len());
        packet.extend_from_slice(OOB_HEADER);
        packet.extend_from_slice(b"rcon ");
        packet.extend_from_slice(self.password.as_bytes());
        packet.push(b' ');
        packet.extend_from_slice(command.as_bytes());
        packet
    }

    fn strip_header(datagram: &[u8]) -> Result<String, ConsoleError> {
        datagram
            .strip_prefix(PRINT_HEADER)
            .map(|payload| String::from_utf8_lossy(payload).into_owned())
            .ok_or_else(|| ConsoleError::protocol("reply is not an out-of-band print packet"))
    }
}

#[async_trait]
impl ConsolePort for RconConsole {
    async fn send_command(&self, command: &str) -> Result<String, ConsoleError> {
        let socket = UdpSocket::bind("0.0.0.0:0").await?;
        socket.connect(self.address.as_str()).await?;

        trace!(command, server = %self.address, "Sending rcon command");
        socket.send(&self.build_packet(command)).await?;

        let mut buf = vec![0u8; MAX_PACKET];
        let n = timeout(self.reply_timeout, socket.recv(&mut buf))
            .await
            .map_err(|_| ConsoleError::Timeout {
                timeout_ms: u64::try_from(self.reply_timeout.as_millis()).unwrap_or(u64::MAX),
            })??;
        let mut reply = Self::strip_header(&buf[..n])?;

        // Long replies (status on a full server) span several datagrams.
        while let Ok(more) = timeout(FOLLOWUP_TIMEOUT, socket.recv(&mut buf)).await {
            let n = more?;
            reply.push_str(&Self::strip_header(&buf[..n])?);
        }

        debug!(command, bytes = reply.len(), "Received rcon reply");
        Ok(reply)
    }

    async fn status(&self) -> Result<Vec<Player>, ConsoleError> {
        let reply = self.send_command("status").await?;
        super::status::parse_status(&reply)
    }

    async fn cvar(&self, name: &str) -> Result<String, ConsoleError> {
        let reply = self.send_command(name).await?;
        super::status::parse_cvar(name, &reply)
    }
}
