use serde::Deserialize;

/// ImgBB upload response structure.
#[derive(Debug, Deserialize)]
pub struct UploadResponse {
    /// Upload data, present on success.
    pub data: Option<UploadData>,
}

/// Payload of a successful ImgBB upload.
#[derive(Debug, Deserialize)]
pub struct UploadData {
    /// Shareable image URL.
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_success_response() {
        let body = r#"{"data":{"url":"https://i.ibb.co/abc/shot.jpg","id":"abc"},"success":true,"status":200}"#;
        let response: UploadResponse = serde_json::from_str(body).unwrap();

        assert_eq!(
            response.data.and_then(|d| d.url).as_deref(),
            Some("https://i.ibb.co/abc/shot.jpg")
        );
    }

    #[test]
    fn test_parse_response_without_url() {
        let body = r#"{"success":true,"status":200}"#;
        let response: UploadResponse = serde_json::from_str(body).unwrap();

        assert!(response.data.is_none());
    }
}
