//! The task store: owns the task, epic, and subtask collections.
//!
//! All mutation goes through the store. It assigns identifiers, keeps the
//! epic/subtask relationship consistent (cascading deletes, child lists),
//! recomputes derived epic status after every subtask change, and reports
//! successful by-id fetches to the history tracker.
//!
//! Single-threaded by contract: no operation blocks, and callers wanting
//! cross-thread access must add their own synchronization.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{Error, Result};
use crate::history::{HistoryTracker, RecentHistory};
use crate::model::{Epic, Status, Subtask, Task, TaskEntry, TaskId};
use crate::sequence::IdSequence;

#[derive(Debug)]
pub struct TaskStore {
    tasks: HashMap<TaskId, Task>,
    epics: HashMap<TaskId, Epic>,
    subtasks: HashMap<TaskId, Subtask>,
    ids: IdSequence,
    history: Box<dyn HistoryTracker>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::with_parts(IdSequence::new(), Box::new(RecentHistory::new()))
    }

    /// Build a store around a seeded sequence or a custom history tracker.
    pub fn with_parts(ids: IdSequence, history: Box<dyn HistoryTracker>) -> Self {
        Self {
            tasks: HashMap::new(),
            epics: HashMap::new(),
            subtasks: HashMap::new(),
            ids,
            history,
        }
    }

    /// Insert a plain task. Any identifier on the argument is overwritten
    /// with a fresh one and the status is reset to `New`.
    pub fn create_task(&mut self, mut task: Task) -> TaskId {
        let id = self.ids.next_id();
        task.id = id;
        task.status = Status::New;
        debug!(id, name = %task.name, "task created");
        self.tasks.insert(id, task);
        id
    }

    pub fn create_epic(&mut self, mut epic: Epic) -> TaskId {
        let id = self.ids.next_id();
        epic.task.id = id;
        epic.task.status = Status::New;
        debug!(id, name = %epic.task.name, "epic created");
        self.epics.insert(id, epic);
        id
    }

    /// Insert a subtask under its epic. Fails with [`Error::EpicNotFound`]
    /// before any mutation if the referenced epic does not exist.
    pub fn create_subtask(&mut self, mut subtask: Subtask) -> Result<TaskId> {
        let epic = self
            .epics
            .get_mut(&subtask.epic_id)
            .ok_or(Error::EpicNotFound(subtask.epic_id))?;

        let id = self.ids.next_id();
        subtask.task.id = id;
        subtask.task.status = Status::New;
        epic.subtask_ids.push(id);
        debug!(id, epic_id = subtask.epic_id, name = %subtask.task.name, "subtask created");

        let epic_id = subtask.epic_id;
        self.subtasks.insert(id, subtask);
        self.recalc_epic_status(epic_id);
        Ok(id)
    }

    /// Snapshot of all plain tasks, in no particular order.
    pub fn all_tasks(&self) -> Vec<Task> {
        self.tasks.values().cloned().collect()
    }

    pub fn all_epics(&self) -> Vec<Epic> {
        self.epics.values().cloned().collect()
    }

    pub fn all_subtasks(&self) -> Vec<Subtask> {
        self.subtasks.values().cloned().collect()
    }

    /// Every subtask owned by the given epic; empty when the epic has no
    /// children or does not exist.
    pub fn subtasks_of_epic(&self, epic_id: TaskId) -> Vec<Subtask> {
        self.subtasks
            .values()
            .filter(|subtask| subtask.epic_id == epic_id)
            .cloned()
            .collect()
    }

    /// Fetch a task and report the view to history. Failed lookups leave
    /// history untouched.
    pub fn task_by_id(&mut self, id: TaskId) -> Result<&Task> {
        let task = self.tasks.get(&id).ok_or(Error::TaskNotFound(id))?;
        self.history.record(TaskEntry::Task(task.clone()));
        Ok(task)
    }

    pub fn epic_by_id(&mut self, id: TaskId) -> Result<&Epic> {
        let epic = self.epics.get(&id).ok_or(Error::EpicNotFound(id))?;
        self.history.record(TaskEntry::Epic(epic.clone()));
        Ok(epic)
    }

    pub fn subtask_by_id(&mut self, id: TaskId) -> Result<&Subtask> {
        let subtask = self.subtasks.get(&id).ok_or(Error::SubtaskNotFound(id))?;
        self.history.record(TaskEntry::Subtask(subtask.clone()));
        Ok(subtask)
    }

    /// Overwrite name, description, and status of the stored task with the
    /// argument's. Identifier and kind are kept from the existing record.
    pub fn update_task(&mut self, task: Task) -> Result<()> {
        let existing = self
            .tasks
            .get_mut(&task.id)
            .ok_or(Error::TaskNotFound(task.id))?;
        existing.name = task.name;
        existing.description = task.description;
        existing.status = task.status;
        debug!(id = existing.id, status = ?existing.status, "task updated");
        Ok(())
    }

    /// Update an epic's name, description, and status. Note the status is
    /// only held until the next subtask change recomputes it.
    pub fn update_epic(&mut self, epic: Epic) -> Result<()> {
        let existing = self
            .epics
            .get_mut(&epic.task.id)
            .ok_or(Error::EpicNotFound(epic.task.id))?;
        existing.task.name = epic.task.name;
        existing.task.description = epic.task.description;
        existing.task.status = epic.task.status;
        debug!(id = existing.task.id, "epic updated");
        Ok(())
    }

    /// Update a subtask and recompute its owning epic's status. The owning
    /// epic reference is kept from the existing record.
    pub fn update_subtask(&mut self, subtask: Subtask) -> Result<()> {
        let existing = self
            .subtasks
            .get_mut(&subtask.task.id)
            .ok_or(Error::SubtaskNotFound(subtask.task.id))?;
        existing.task.name = subtask.task.name;
        existing.task.description = subtask.task.description;
        existing.task.status = subtask.task.status;
        let epic_id = existing.epic_id;
        debug!(id = subtask.task.id, epic_id, status = ?subtask.task.status, "subtask updated");

        self.recalc_epic_status(epic_id);
        Ok(())
    }

    /// Delete a task and evict it from history. No-op when absent.
    pub fn remove_task_by_id(&mut self, id: TaskId) {
        if self.tasks.remove(&id).is_some() {
            debug!(id, "task removed");
        }
        self.history.evict(id);
    }

    /// Delete a subtask, unlink it from its epic's child list, and
    /// recompute the epic's status.
    pub fn remove_subtask_by_id(&mut self, id: TaskId) -> Result<()> {
        let subtask = self
            .subtasks
            .remove(&id)
            .ok_or(Error::SubtaskNotFound(id))?;
        if let Some(epic) = self.epics.get_mut(&subtask.epic_id) {
            epic.subtask_ids.retain(|child| *child != id);
        }
        self.history.evict(id);
        debug!(id, epic_id = subtask.epic_id, "subtask removed");

        self.recalc_epic_status(subtask.epic_id);
        Ok(())
    }

    /// Delete an epic and cascade to every subtask it owns. The epic and
    /// all removed subtasks are evicted from history.
    pub fn remove_epic_by_id(&mut self, id: TaskId) -> Result<()> {
        let epic = self.epics.remove(&id).ok_or(Error::EpicNotFound(id))?;
        for child in &epic.subtask_ids {
            self.subtasks.remove(child);
            self.history.evict(*child);
        }
        self.history.evict(id);
        debug!(id, children = epic.subtask_ids.len(), "epic removed");
        Ok(())
    }

    pub fn clear_all_tasks(&mut self) {
        for id in self.tasks.keys() {
            self.history.evict(*id);
        }
        self.tasks.clear();
        debug!("all tasks cleared");
    }

    /// Empty both the epic and subtask collections; subtasks cannot
    /// meaningfully outlive the epics that own them.
    pub fn clear_all_epics(&mut self) {
        for id in self.epics.keys() {
            self.history.evict(*id);
        }
        self.epics.clear();

        for id in self.subtasks.keys() {
            self.history.evict(*id);
        }
        self.subtasks.clear();
        debug!("all epics and subtasks cleared");
    }

    /// Empty the subtask collection. Every remaining epic is reset to
    /// `New` with an empty child list.
    pub fn clear_all_subtasks(&mut self) {
        for id in self.subtasks.keys() {
            self.history.evict(*id);
        }
        self.subtasks.clear();

        for epic in self.epics.values_mut() {
            epic.task.status = Status::New;
            epic.subtask_ids.clear();
        }
        debug!("all subtasks cleared");
    }

    /// Snapshot of recently viewed entities, as the tracker orders them.
    pub fn history(&self) -> Vec<TaskEntry> {
        self.history.list()
    }

    /// Full rescan of the epic's subtasks:
    /// none, or all `New` -> `New`; all `Done` -> `Done`; otherwise
    /// `InProgress`. A rescan is cheap at this scale and cannot drift the
    /// way an incremental counter could.
    fn recalc_epic_status(&mut self, epic_id: TaskId) {
        let mut new_count = 0usize;
        let mut done_count = 0usize;
        let mut total = 0usize;

        for subtask in self.subtasks.values() {
            if subtask.epic_id != epic_id {
                continue;
            }
            match subtask.status() {
                Status::New => new_count += 1,
                Status::InProgress => {}
                Status::Done => done_count += 1,
            }
            total += 1;
        }

        let status = if total == 0 || new_count == total {
            Status::New
        } else if done_count == total {
            Status::Done
        } else {
            Status::InProgress
        };

        if let Some(epic) = self.epics.get_mut(&epic_id) {
            epic.task.status = status;
            debug!(epic_id, status = ?status, subtasks = total, "epic status recomputed");
        }
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}
