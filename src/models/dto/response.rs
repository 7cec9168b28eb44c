use serde::{Deserialize, Serialize};

/// Error body returned by the API on non-success statuses.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

impl ApiErrorBody {
    /// Extracts `detail` from a raw response body, if it is JSON and has one.
    pub fn detail_from(body: &str) -> Option<String> {
        serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.detail)
            .filter(|d| !d.trim().is_empty())
    }
}

/// Generic acknowledgement for endpoints whose response the client ignores.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Ack {
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_from_reads_fastapi_style_error() {
        assert_eq!(
            ApiErrorBody::detail_from(r#"{"detail":"Child not found"}"#).as_deref(),
            Some("Child not found")
        );
    }

    #[test]
    fn detail_from_ignores_non_json_and_blank_detail() {
        assert!(ApiErrorBody::detail_from("Bad Gateway").is_none());
        assert!(ApiErrorBody::detail_from(r#"{"detail":"  "}"#).is_none());
    }

    #[test]
    fn ack_accepts_any_object() {
        let ack: Ack = serde_json::from_str(r#"{"id":1,"score":10}"#).expect("object parses");
        assert_eq!(ack.fields.len(), 2);
    }
}
