//! Inbound research requests.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Shape of the text the agent should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Three to four sentences.
    #[serde(rename = "summary")]
    Summary,
    /// At most five `*` bullets.
    #[serde(rename = "bullet points")]
    BulletPoints,
    /// Under 150 words.
    #[serde(rename = "short report")]
    ShortReport,
}

impl OutputFormat {
    /// Wire name of the format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::BulletPoints => "bullet points",
            Self::ShortReport => "short report",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "summary" => Ok(Self::Summary),
            "bullet points" => Ok(Self::BulletPoints),
            "short report" => Ok(Self::ShortReport),
            other => Err(CoreError::InvalidOutputFormat(other.to_string())),
        }
    }
}

/// Input of one remote execution: `{topic, output_format}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionRequest {
    pub topic: String,
    pub output_format: OutputFormat,
}

impl ExecutionRequest {
    /// Validate raw request fields.
    pub fn new(topic: impl Into<String>, output_format: &str) -> Result<Self, CoreError> {
        let topic = topic.into();
        if topic.trim().is_empty() {
            return Err(CoreError::EmptyTopic);
        }

        Ok(Self {
            topic,
            output_format: output_format.parse()?,
        })
    }
}
