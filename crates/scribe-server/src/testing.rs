//! Scripted in-memory platform used by the server tests.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;
use tokio::time::Instant;

use scribe_core::{
    AgentDefinition, AgentId, ExecutionId, ExecutionRequest, ExecutionSnapshot, ExecutionStatus,
    TaskDefinition, TaskId,
};
use scribe_platform::{ClientError, ExecutionPlatform};

/// One scripted answer to a status fetch.
#[derive(Debug, Clone)]
pub enum Step {
    Status(ExecutionStatus),
    Succeeded(Option<Value>),
    Failed(ExecutionStatus, Option<String>),
    Broken(String),
}

/// Platform whose executions replay a script keyed by topic.
///
/// The last step of a script repeats once the others are consumed.
#[derive(Default)]
pub struct ScriptedPlatform {
    scripts: Mutex<HashMap<String, VecDeque<Step>>>,
    fetches: Mutex<Vec<(ExecutionId, Instant)>>,
    created_tasks: Mutex<Vec<(AgentId, TaskDefinition)>>,
    reject_agent: bool,
    reject_task: bool,
    reject_execution: bool,
    calls: AtomicUsize,
}

impl ScriptedPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_script(self, topic: &str, steps: Vec<Step>) -> Self {
        self.scripts
            .lock()
            .unwrap()
            .insert(topic.to_string(), steps.into());
        self
    }

    pub fn rejecting_agents(mut self) -> Self {
        self.reject_agent = true;
        self
    }

    pub fn rejecting_tasks(mut self) -> Self {
        self.reject_task = true;
        self
    }

    pub fn rejecting_executions(mut self) -> Self {
        self.reject_execution = true;
        self
    }

    /// Total number of platform calls of any kind.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Instants at which `topic`'s execution was fetched.
    pub fn fetch_times(&self, topic: &str) -> Vec<Instant> {
        let id = execution_id_for(topic);
        self.fetches
            .lock()
            .unwrap()
            .iter()
            .filter(|(fetched, _)| *fetched == id)
            .map(|(_, at)| *at)
            .collect()
    }

    pub fn created_tasks(&self) -> Vec<(AgentId, TaskDefinition)> {
        self.created_tasks.lock().unwrap().clone()
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

pub fn execution_id_for(topic: &str) -> ExecutionId {
    ExecutionId::new(format!("exec-{}", topic))
}

fn rejected(what: &str) -> ClientError {
    ClientError::Api {
        status: 400,
        body: format!("{} rejected", what),
    }
}

#[async_trait]
impl ExecutionPlatform for ScriptedPlatform {
    async fn create_agent(&self, _agent: &AgentDefinition) -> Result<AgentId, ClientError> {
        self.record_call();
        if self.reject_agent {
            return Err(rejected("agent"));
        }
        Ok(AgentId::new("agent-1"))
    }

    async fn create_task(
        &self,
        agent_id: &AgentId,
        task: &TaskDefinition,
    ) -> Result<TaskId, ClientError> {
        self.record_call();
        if self.reject_task {
            return Err(rejected("task"));
        }
        self.created_tasks
            .lock()
            .unwrap()
            .push((agent_id.clone(), task.clone()));
        Ok(TaskId::new("task-1"))
    }

    async fn create_execution(
        &self,
        _task_id: &TaskId,
        input: &ExecutionRequest,
    ) -> Result<ExecutionId, ClientError> {
        self.record_call();
        if self.reject_execution {
            return Err(rejected("execution"));
        }
        Ok(execution_id_for(&input.topic))
    }

    async fn get_execution(&self, id: &ExecutionId) -> Result<ExecutionSnapshot, ClientError> {
        self.record_call();
        self.fetches
            .lock()
            .unwrap()
            .push((id.clone(), Instant::now()));

        let topic = id.as_str().trim_start_matches("exec-");
        let step = {
            let mut scripts = self.scripts.lock().unwrap();
            let script = scripts.get_mut(topic).ok_or_else(|| ClientError::Api {
                status: 404,
                body: format!("unknown execution {}", id),
            })?;
            if script.len() > 1 {
                script.pop_front()
            } else {
                script.front().cloned()
            }
        };

        let snapshot = match step {
            Some(Step::Status(status)) => ExecutionSnapshot::new(id.clone(), status),
            Some(Step::Succeeded(output)) => {
                let snapshot = ExecutionSnapshot::new(id.clone(), ExecutionStatus::Succeeded);
                match output {
                    Some(output) => snapshot.with_output(output),
                    None => snapshot,
                }
            }
            Some(Step::Failed(status, error)) => {
                let snapshot = ExecutionSnapshot::new(id.clone(), status);
                match error {
                    Some(error) => snapshot.with_error(error),
                    None => snapshot,
                }
            }
            Some(Step::Broken(reason)) => return Err(ClientError::Decode(reason)),
            None => ExecutionSnapshot::new(id.clone(), ExecutionStatus::Running),
        };
        Ok(snapshot)
    }
}
