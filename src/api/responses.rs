//! API request and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::state::TimerState;

/// Body of POST /duration
///
/// `duration` may be a string or a number; anything else is treated as
/// invalid input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DurationRequest {
    #[serde(default)]
    pub duration: Value,
}

impl DurationRequest {
    /// Raw duration text as typed by the user
    pub fn input_text(&self) -> String {
        match &self.duration {
            Value::String(text) => text.clone(),
            Value::Number(number) => number
                .as_u64()
                .map(|seconds| seconds.to_string())
                .or_else(|| number.as_f64().map(|seconds| seconds.to_string()))
                .unwrap_or_default(),
            _ => String::new(),
        }
    }
}

/// API response structure for timer action endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub timer: TimerState,
}

impl ApiResponse {
    /// Create a new API response
    pub fn new(status: String, message: String, timer: TimerState) -> Self {
        Self {
            status,
            message,
            timestamp: Utc::now(),
            timer,
        }
    }

    /// The action changed the timer
    pub fn applied(message: String, timer: TimerState) -> Self {
        Self::new("applied".to_string(), message, timer)
    }

    /// The action was a no-op in the current state
    pub fn ignored(message: String, timer: TimerState) -> Self {
        Self::new("ignored".to_string(), message, timer)
    }
}

/// Status response with server information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub timer: TimerState,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn duration_request_accepts_text_and_numbers() {
        let text: DurationRequest = serde_json::from_value(json!({ "duration": " 90 " })).unwrap();
        assert_eq!(text.input_text(), " 90 ");

        let number: DurationRequest = serde_json::from_value(json!({ "duration": 45 })).unwrap();
        assert_eq!(number.input_text(), "45");

        let float: DurationRequest = serde_json::from_value(json!({ "duration": 90.0 })).unwrap();
        assert_eq!(crate::timer::parse_duration(&float.input_text()), Some(90));

        let fraction: DurationRequest = serde_json::from_value(json!({ "duration": 2.5 })).unwrap();
        assert_eq!(crate::timer::parse_duration(&fraction.input_text()), None);

        let missing: DurationRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(missing.input_text(), "");

        let other: DurationRequest = serde_json::from_value(json!({ "duration": [1] })).unwrap();
        assert_eq!(other.input_text(), "");
    }
}
