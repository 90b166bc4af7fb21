use serde_json::Value;

/// Job commands, all sent to `api/job`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OctoCmd {
    Start,
    /// pauses a running job, resumes a paused one
    PauseToggle,
    Cancel,
}

impl OctoCmd {
    pub fn url(&self) -> &'static str {
        match self {
            OctoCmd::Start | OctoCmd::PauseToggle | OctoCmd::Cancel => "api/job",
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            OctoCmd::Start => "Starting a new job",
            OctoCmd::PauseToggle => "Pausing/Resuming job",
            OctoCmd::Cancel => "Stopping job",
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            OctoCmd::Start => serde_json::json!({
                "command": "start",
            }),
            OctoCmd::PauseToggle => serde_json::json!({
                "command": "pause",
                "action": "toggle",
            }),
            OctoCmd::Cancel => serde_json::json!({
                "command": "cancel",
            }),
        }
    }
}
