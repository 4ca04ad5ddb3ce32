//! Capture orchestration service.

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::domain::entities::{CaptureRequest, CaptureStatus, ClientId, Player};
use crate::domain::errors::CaptureError;
use crate::domain::ports::{
    ConsolePort, FeedbackPort, ImageHostPort, WatchOutcome, WatcherPort, WebhookPort,
};

/// Drives a capture request from trigger to Discord link.
///
/// One background task runs per request; the dispatcher that calls
/// [`CaptureService::request`] gets its acknowledgement back as soon as the
/// capture command has been sent. At most one capture per client is in
/// flight at any time.
pub struct CaptureService {
    console: Arc<dyn ConsolePort>,
    watcher: Arc<dyn WatcherPort>,
    image_host: Arc<dyn ImageHostPort>,
    webhook: Arc<dyn WebhookPort>,
    feedback: Arc<dyn FeedbackPort>,
    server_label: String,
    in_flight: Arc<Mutex<HashSet<ClientId>>>,
}

/// Releases the in-flight entry when the capture task ends, however it ends.
struct InFlightGuard {
    set: Arc<Mutex<HashSet<ClientId>>>,
    cid: ClientId,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.set.lock().remove(&self.cid);
    }
}

impl CaptureService {
    /// Creates a new capture service.
    #[must_use]
    pub fn new(
        console: Arc<dyn ConsolePort>,
        watcher: Arc<dyn WatcherPort>,
        image_host: Arc<dyn ImageHostPort>,
        webhook: Arc<dyn WebhookPort>,
        feedback: Arc<dyn FeedbackPort>,
        server_label: impl Into<String>,
    ) -> Self {
        Self {
            console,
            watcher,
            image_host,
            webhook,
            feedback,
            server_label: server_label.into(),
            in_flight: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// Returns whether a capture for the given client is currently running.
    #[must_use]
    pub fn is_in_flight(&self, cid: ClientId) -> bool {
        self.in_flight.lock().contains(&cid)
    }

    /// Claims the client's in-flight slot, or reports it already taken.
    ///
    /// Check and insert happen under one lock acquisition so two requests
    /// for the same client cannot both pass the guard.
    fn try_claim(&self, cid: ClientId) -> Option<InFlightGuard> {
        let mut set = self.in_flight.lock();
        if !set.insert(cid) {
            return None;
        }
        Some(InFlightGuard {
            set: Arc::clone(&self.in_flight),
            cid,
        })
    }

    /// Starts a capture of `target` on behalf of `requester`.
    ///
    /// Sends the capture command and spawns the watch/upload/notify task,
    /// returning its handle. The requester gets exactly one feedback
    /// message once the task reaches a terminal state.
    ///
    /// # Errors
    /// Returns an error without any side effect if a capture of this client
    /// is already in flight, if the client is a bot, or if the capture
    /// command could not be sent.
    pub async fn request(
        &self,
        target: Player,
        requester: impl Into<String>,
    ) -> Result<JoinHandle<()>, CaptureError> {
        let requester = requester.into();
        let name = target.clean_name();

        let Some(guard) = self.try_claim(target.cid()) else {
            debug!(name = %name, "Rejected duplicate capture request");
            return Err(CaptureError::already_in_progress(name));
        };

        if target.is_bot() {
            debug!(name = %name, "Refusing to capture a bot client");
            return Err(CaptureError::bot_target(name));
        }

        let mut request = CaptureRequest::new(target, requester);

        debug!(name = %name, cid = %request.player().cid(), token = request.token(), "Getting screenshot");
        self.console
            .send_command(&format!(
                "getss {} {}",
                request.player().cid(),
                request.token()
            ))
            .await?;

        request.set_status(CaptureStatus::Watching);

        let watcher = Arc::clone(&self.watcher);
        let image_host = Arc::clone(&self.image_host);
        let webhook = Arc::clone(&self.webhook);
        let feedback = Arc::clone(&self.feedback);
        let server_label = self.server_label.clone();

        let handle = tokio::spawn(async move {
            let _guard = guard;
            Self::run_to_completion(
                &*watcher,
                &*image_host,
                &*webhook,
                &*feedback,
                &server_label,
                &mut request,
            )
            .await;
        });

        Ok(handle)
    }

    /// Runs the watch/upload/notify pipeline and reports the outcome.
    async fn run_to_completion(
        watcher: &dyn WatcherPort,
        image_host: &dyn ImageHostPort,
        webhook: &dyn WebhookPort,
        feedback: &dyn FeedbackPort,
        server_label: &str,
        request: &mut CaptureRequest,
    ) {
        let name = request.player().clean_name();
        let requester = request.requester().to_string();

        match Self::process(watcher, image_host, webhook, server_label, request).await {
            Ok(url) => {
                info!(name = %name, url = %url, "Screenshot processed and shared");
                feedback.send(
                    &requester,
                    &format!("Screenshot of {name} shared to Discord: {url}"),
                );
            }
            Err(e) => {
                warn!(name = %name, error = %e, status = ?request.status(), "Capture failed");
                feedback.send(&requester, &format!("Screenshot of {name} failed: {e}"));
            }
        }
    }

    async fn process(
        watcher: &dyn WatcherPort,
        image_host: &dyn ImageHostPort,
        webhook: &dyn WebhookPort,
        server_label: &str,
        request: &mut CaptureRequest,
    ) -> Result<String, CaptureError> {
        let file_name = request.file_name();

        let path = match watcher.wait_for(&file_name).await {
            WatchOutcome::Found(path) => {
                request.set_status(CaptureStatus::Found);
                path
            }
            WatchOutcome::TimedOut { waited } => {
                request.set_status(CaptureStatus::TimedOut);
                return Err(CaptureError::Timeout {
                    name: request.player().clean_name(),
                    waited_secs: waited.as_secs(),
                });
            }
        };

        request.set_status(CaptureStatus::Uploading);
        let upload = match image_host.upload(&path).await {
            Ok(upload) => upload,
            Err(e) => {
                request.set_status(CaptureStatus::UploadFailed);
                return Err(e.into());
            }
        };

        request.set_status(CaptureStatus::Notifying);
        if let Err(e) = webhook
            .notify(
                &request.player().clean_name(),
                server_label,
                request.requester(),
                upload.url(),
            )
            .await
        {
            request.set_status(CaptureStatus::NotifyFailed);
            return Err(e.into());
        }

        request.set_status(CaptureStatus::Completed);
        Ok(upload.url().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::{
        MockConsole, MockFeedback, MockImageHost, MockWatcher, MockWebhook,
    };
    use async_trait::async_trait;
    use std::path::PathBuf;
    use tokio::sync::Notify;

    /// Watcher that holds the capture in the Watching state until released.
    struct GatedWatcher {
        gate: Arc<Notify>,
    }

    #[async_trait]
    impl WatcherPort for GatedWatcher {
        async fn wait_for(&self, file_name: &str) -> WatchOutcome {
            self.gate.notified().await;
            WatchOutcome::Found(PathBuf::from(file_name))
        }
    }

    struct Fixture {
        console: Arc<MockConsole>,
        image_host: Arc<MockImageHost>,
        webhook: Arc<MockWebhook>,
        feedback: Arc<MockFeedback>,
    }

    impl Fixture {
        fn new(upload_ok: bool, notify_ok: bool) -> Self {
            Self {
                console: Arc::new(MockConsole::new()),
                image_host: Arc::new(MockImageHost::new(upload_ok)),
                webhook: Arc::new(MockWebhook::new(notify_ok)),
                feedback: Arc::new(MockFeedback::new()),
            }
        }

        fn service(&self, watcher: Arc<dyn WatcherPort>) -> CaptureService {
            CaptureService::new(
                Arc::clone(&self.console) as Arc<dyn ConsolePort>,
                watcher,
                Arc::clone(&self.image_host) as Arc<dyn ImageHostPort>,
                Arc::clone(&self.webhook) as Arc<dyn WebhookPort>,
                Arc::clone(&self.feedback) as Arc<dyn FeedbackPort>,
                "Test Server",
            )
        }
    }

    fn alice() -> Player {
        Player::new(4_u8, "Alice", false)
    }

    #[tokio::test]
    async fn test_successful_capture_reports_completion() {
        let fixture = Fixture::new(true, true);
        let service = fixture.service(Arc::new(MockWatcher::found("shot.jpg")));

        let handle = service.request(alice(), "admin").await.unwrap();
        handle.await.unwrap();

        let messages = fixture.feedback.received();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].0, "admin");
        assert!(messages[0].1.contains("Alice"));
        assert!(messages[0].1.contains("https://i.ibb.co/x.jpg"));

        assert_eq!(fixture.webhook.notify_count(), 1);
        assert!(!service.is_in_flight(ClientId(4)));
    }

    #[tokio::test]
    async fn test_trigger_command_carries_cid_and_token() {
        let fixture = Fixture::new(true, true);
        let service = fixture.service(Arc::new(MockWatcher::found("shot.jpg")));

        let handle = service.request(alice(), "admin").await.unwrap();
        handle.await.unwrap();

        let commands = fixture.console.sent_commands();
        assert_eq!(commands.len(), 1);
        assert!(commands[0].starts_with("getss 4 Alice_"));
    }

    #[tokio::test]
    async fn test_duplicate_request_rejected_without_side_effects() {
        let fixture = Fixture::new(true, true);
        let gate = Arc::new(Notify::new());
        let service = fixture.service(Arc::new(GatedWatcher {
            gate: Arc::clone(&gate),
        }));

        let handle = service.request(alice(), "admin").await.unwrap();
        assert!(service.is_in_flight(ClientId(4)));

        let second = service.request(alice(), "other_admin").await;
        assert!(matches!(
            second,
            Err(CaptureError::AlreadyInProgress { .. })
        ));
        // The rejected request must not have re-sent the capture command.
        assert_eq!(fixture.console.sent_commands().len(), 1);

        gate.notify_one();
        handle.await.unwrap();
        assert!(!service.is_in_flight(ClientId(4)));

        // Once the first request terminated, the client is capturable again.
        let third = service.request(alice(), "admin").await;
        assert!(third.is_ok());
        third.unwrap().await.unwrap();
    }

    #[tokio::test]
    async fn test_bot_target_rejected_before_any_command() {
        let fixture = Fixture::new(true, true);
        let service = fixture.service(Arc::new(MockWatcher::found("shot.jpg")));

        let bot = Player::new(0_u8, "bot0", true);
        let result = service.request(bot, "admin").await;

        assert!(matches!(result, Err(CaptureError::BotTarget { .. })));
        assert!(fixture.console.sent_commands().is_empty());
        assert!(!service.is_in_flight(ClientId(0)));
    }

    #[tokio::test]
    async fn test_timeout_reported_and_released() {
        let fixture = Fixture::new(true, true);
        let service = fixture.service(Arc::new(MockWatcher::timed_out()));

        let handle = service.request(alice(), "admin").await.unwrap();
        handle.await.unwrap();

        let messages = fixture.feedback.received();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].1.contains("failed"));
        assert_eq!(fixture.image_host.upload_count(), 0);
        assert!(!service.is_in_flight(ClientId(4)));
    }

    #[tokio::test]
    async fn test_upload_failure_skips_notify_and_releases() {
        let fixture = Fixture::new(false, true);
        let service = fixture.service(Arc::new(MockWatcher::found("shot.jpg")));

        let handle = service.request(alice(), "admin").await.unwrap();
        handle.await.unwrap();

        let messages = fixture.feedback.received();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].1.contains("failed"));
        assert!(messages[0].1.contains("500"));

        assert_eq!(fixture.webhook.notify_count(), 0);
        assert!(!service.is_in_flight(ClientId(4)));
    }

    #[tokio::test]
    async fn test_notify_failure_reported_and_released() {
        let fixture = Fixture::new(true, false);
        let service = fixture.service(Arc::new(MockWatcher::found("shot.jpg")));

        let handle = service.request(alice(), "admin").await.unwrap();
        handle.await.unwrap();

        let messages = fixture.feedback.received();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].1.contains("failed"));
        assert!(!service.is_in_flight(ClientId(4)));
    }

    #[tokio::test]
    async fn test_failed_trigger_releases_in_flight() {
        let fixture = Fixture::new(true, true);
        fixture.console.set_fail(true);
        let service = fixture.service(Arc::new(MockWatcher::found("shot.jpg")));

        let result = service.request(alice(), "admin").await;
        assert!(matches!(result, Err(CaptureError::Trigger(_))));
        assert!(!service.is_in_flight(ClientId(4)));
    }

    #[tokio::test]
    async fn test_same_name_different_slots_run_concurrently() {
        let fixture = Fixture::new(true, true);
        let service = fixture.service(Arc::new(MockWatcher::found("shot.jpg")));

        let first = service.request(Player::new(1_u8, "Twin", false), "admin").await;
        let second = service.request(Player::new(2_u8, "Twin", false), "admin").await;

        assert!(first.is_ok());
        assert!(second.is_ok());
        first.unwrap().await.unwrap();
        second.unwrap().await.unwrap();
    }
}
