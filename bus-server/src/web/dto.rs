//! Data transfer objects for web responses.

use serde::Serialize;

/// Fixed source identifier reported in every webhook response.
pub const RESPONSE_SOURCE: &str = "Alan_BusTool";

/// Webhook response envelope.
///
/// `speech` and `displayText` carry the same rendered status; both are
/// null when the schedule is empty ("no buses scheduled" is a valid
/// state, not an error).
#[derive(Debug, Serialize)]
pub struct WebhookResponse {
    /// Rendered status line, if any
    pub speech: Option<String>,

    /// Same text, for display surfaces
    #[serde(rename = "displayText")]
    pub display_text: Option<String>,

    /// Fixed source identifier
    pub source: &'static str,
}

impl WebhookResponse {
    /// Build the envelope from an optional rendered status.
    pub fn from_status(text: Option<String>) -> Self {
        Self {
            speech: text.clone(),
            display_text: text,
            source: RESPONSE_SOURCE,
        }
    }
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_display_text_key() {
        let response = WebhookResponse::from_status(Some("Realtime:  5 minutes".to_string()));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["speech"], "Realtime:  5 minutes");
        assert_eq!(json["displayText"], "Realtime:  5 minutes");
        assert_eq!(json["source"], "Alan_BusTool");
        // the snake_case name must not leak into the wire format
        assert!(json.get("display_text").is_none());
    }

    #[test]
    fn empty_status_serializes_as_null() {
        let json = serde_json::to_value(WebhookResponse::from_status(None)).unwrap();
        assert!(json["speech"].is_null());
        assert!(json["displayText"].is_null());
        assert_eq!(json["source"], "Alan_BusTool");
    }
}
