use serde::{Deserialize, Serialize};

use crate::errors::GateError;

/// Routing outcome for a single image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Open,
    Unknown,
}

impl Command {
    pub fn as_str(self) -> &'static str {
        match self {
            Command::Open => "open",
            Command::Unknown => "unknown",
        }
    }

    pub fn parse(s: &str) -> Result<Self, GateError> {
        match s {
            "open" => Ok(Command::Open),
            "unknown" => Ok(Command::Unknown),
            other => Err(GateError::UnrecognizedCommand(other.to_string())),
        }
    }
}

/// The message published by the face router and consumed by the downstream
/// functions. `command` stays a plain string on the wire so consumers can
/// report the offending value when it is not one they recognize.
///
/// Invariant: `username` is non-empty iff `command` is `"open"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingResult {
    pub username: String,
    pub command: String,
    pub s3key: String,
}

impl RoutingResult {
    pub fn open(username: &str, s3key: String) -> Self {
        Self {
            username: username.to_string(),
            command: Command::Open.as_str().to_string(),
            s3key,
        }
    }

    pub fn unknown(s3key: String) -> Self {
        Self {
            username: String::new(),
            command: Command::Unknown.as_str().to_string(),
            s3key,
        }
    }

    pub fn command(&self) -> Result<Command, GateError> {
        Command::parse(&self.command)
    }
}
