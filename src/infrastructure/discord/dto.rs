use serde::Serialize;

/// Discord webhook message payload.
#[derive(Debug, Serialize)]
pub struct WebhookPayload {
    /// Message text.
    pub content: String,
    /// Name the webhook posts under.
    pub username: String,
    /// Embedded attachments; one image embed per screenshot.
    pub embeds: Vec<Embed>,
}

/// Discord message embed.
#[derive(Debug, Serialize)]
pub struct Embed {
    /// Embedded image reference.
    pub image: EmbedImage,
}

/// Image reference inside an embed.
#[derive(Debug, Serialize)]
pub struct EmbedImage {
    /// Image URL.
    pub url: String,
}

impl WebhookPayload {
    /// Builds the fixed-shape screenshot announcement.
    #[must_use]
    pub fn screenshot(
        target_name: &str,
        server_label: &str,
        requester_name: &str,
        image_url: &str,
        username: &str,
    ) -> Self {
        Self {
            content: format!(
                "Screenshot of {target_name} from {server_label}. - Taken by {requester_name}"
            ),
            username: username.to_string(),
            embeds: vec![Embed {
                image: EmbedImage {
                    url: image_url.to_string(),
                },
            }],
        }
    }
}
