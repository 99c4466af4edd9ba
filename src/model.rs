//! Entity definitions: tasks, epics, subtasks.
//!
//! The three kinds share the same base fields. Epics and subtasks compose
//! a [`Task`] rather than subclassing it; [`TaskEntry`] is the closed
//! variant set used wherever the kinds mix (history, mixed listings).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Store-assigned entity identifier. Zero means "not yet assigned".
pub type TaskId = u64;

pub const UNASSIGNED_ID: TaskId = 0;

/// Workflow status of a task or subtask; for epics it is derived.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    New,
    InProgress,
    Done,
}

/// Discriminant tag for the three entity kinds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    Task,
    Epic,
    Subtask,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    pub description: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
}

impl Task {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        status: Status,
    ) -> Self {
        Self::with_id(UNASSIGNED_ID, name, description, status)
    }

    /// Build a task carrying a specific identifier. This is the sanctioned
    /// mutation path: construct a fresh entity with an existing id and pass
    /// it to the store's update operation.
    pub fn with_id(
        id: TaskId,
        name: impl Into<String>,
        description: impl Into<String>,
        status: Status,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            status,
            start_time: None,
            duration_minutes: None,
        }
    }
}

/// A container task owning an ordered list of subtask ids.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Epic {
    #[serde(flatten)]
    pub task: Task,
    pub subtask_ids: Vec<TaskId>,
    // Derived from children; currently never computed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
}

impl Epic {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            task: Task::new(name, description, Status::New),
            subtask_ids: Vec::new(),
            end_time: None,
        }
    }

    pub fn with_id(
        id: TaskId,
        name: impl Into<String>,
        description: impl Into<String>,
        status: Status,
    ) -> Self {
        Self {
            task: Task::with_id(id, name, description, status),
            subtask_ids: Vec::new(),
            end_time: None,
        }
    }

    pub fn id(&self) -> TaskId {
        self.task.id
    }

    pub fn status(&self) -> Status {
        self.task.status
    }
}

/// A task owned by exactly one epic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Subtask {
    #[serde(flatten)]
    pub task: Task,
    pub epic_id: TaskId,
}

impl Subtask {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        status: Status,
        epic_id: TaskId,
    ) -> Self {
        Self {
            task: Task::new(name, description, status),
            epic_id,
        }
    }

    pub fn with_id(
        id: TaskId,
        name: impl Into<String>,
        description: impl Into<String>,
        status: Status,
        epic_id: TaskId,
    ) -> Self {
        Self {
            task: Task::with_id(id, name, description, status),
            epic_id,
        }
    }

    pub fn id(&self) -> TaskId {
        self.task.id
    }

    pub fn status(&self) -> Status {
        self.task.status
    }
}

/// One entity of any kind, discriminated explicitly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TaskEntry {
    Task(Task),
    Epic(Epic),
    Subtask(Subtask),
}

impl TaskEntry {
    pub fn id(&self) -> TaskId {
        match self {
            TaskEntry::Task(task) => task.id,
            TaskEntry::Epic(epic) => epic.id(),
            TaskEntry::Subtask(subtask) => subtask.id(),
        }
    }

    pub fn kind(&self) -> TaskKind {
        match self {
            TaskEntry::Task(_) => TaskKind::Task,
            TaskEntry::Epic(_) => TaskKind::Epic,
            TaskEntry::Subtask(_) => TaskKind::Subtask,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            TaskEntry::Task(task) => &task.name,
            TaskEntry::Epic(epic) => &epic.task.name,
            TaskEntry::Subtask(subtask) => &subtask.task.name,
        }
    }

    pub fn status(&self) -> Status {
        match self {
            TaskEntry::Task(task) => task.status,
            TaskEntry::Epic(epic) => epic.status(),
            TaskEntry::Subtask(subtask) => subtask.status(),
        }
    }
}
