//! Agent and task definitions registered with the remote platform.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::CoreError;

/// Static description of the agent that executes research tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentDefinition {
    /// Display name of the agent.
    pub name: String,

    /// Model identifier understood by the platform (e.g., "gemini-2.0-flash").
    pub model: String,

    /// Free-form description of the agent's role.
    pub about: String,

    /// Ordered instructions applied to every prompt step.
    pub instructions: Vec<String>,
}

impl AgentDefinition {
    /// Create a new AgentDefinition with no instructions.
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
            about: String::new(),
            instructions: Vec::new(),
        }
    }

    /// Builder method to set the "about" text.
    pub fn with_about(mut self, about: impl Into<String>) -> Self {
        self.about = about.into();
        self
    }

    /// Builder method to append an instruction.
    pub fn with_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instructions.push(instruction.into());
        self
    }
}

/// Declarative task template.
///
/// The step sequence is opaque here: it is loaded from configuration and
/// passed through to the platform unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDefinition {
    spec: Map<String, Value>,
}

impl TaskDefinition {
    /// Wrap a parsed document. Only JSON objects are accepted.
    pub fn from_value(value: Value) -> Result<Self, CoreError> {
        match value {
            Value::Object(spec) => Ok(Self { spec }),
            Value::Null => Err(CoreError::InvalidTaskDefinition(
                "document is empty".to_string(),
            )),
            other => Err(CoreError::InvalidTaskDefinition(format!(
                "expected a mapping at the top level, found {}",
                value_kind(&other)
            ))),
        }
    }

    /// Task name declared in the document, if any.
    pub fn name(&self) -> Option<&str> {
        self.spec.get("name").and_then(Value::as_str)
    }

    /// The raw task document.
    pub fn spec(&self) -> &Map<String, Value> {
        &self.spec
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
