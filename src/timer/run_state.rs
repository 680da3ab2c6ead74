//! Run state of the countdown

use serde::{Deserialize, Serialize};

/// Three-valued run status of the timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunState {
    #[default]
    Idle,
    Running,
    Paused,
}

impl RunState {
    /// Check if the timer is counting down
    pub fn is_running(&self) -> bool {
        matches!(self, RunState::Running)
    }

    /// Check if the timer is paused
    pub fn is_paused(&self) -> bool {
        matches!(self, RunState::Paused)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RunState::Idle => "idle",
            RunState::Running => "running",
            RunState::Paused => "paused",
        }
    }
}

impl std::fmt::Display for RunState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&RunState::Paused).unwrap();
        assert_eq!(json, "\"paused\"");
        assert_eq!(RunState::default(), RunState::Idle);
        assert_eq!(RunState::Running.to_string(), "running");
    }
}
