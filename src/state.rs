//! # State
//!
//! A [`Task`] never inspects its own lifecycle stage; it delegates every
//! operation to the boxed [`TaskState`] it currently holds, and a legal
//! operation hands back the next state object. Illegal operations come back
//! as a [`StateError`] naming the current stage, so the transition table is
//! enforced in exactly one place:
//!
//! ```text
//! Idle --start--> InProgress --finish--> Closed --reopen--> Idle
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    #[error("cannot {action} a task in the {state} state")]
    InvalidTransition {
        state: &'static str,
        action: &'static str,
    },
}

impl StateError {
    fn rejected(state: &'static str, action: &'static str) -> Self {
        StateError::InvalidTransition { state, action }
    }
}

/// One lifecycle stage. Each method either returns the next stage or
/// rejects the operation.
pub trait TaskState {
    fn name(&self) -> &'static str;

    fn start(&self) -> Result<Box<dyn TaskState>, StateError> {
        Err(StateError::rejected(self.name(), "start"))
    }

    fn finish(&self) -> Result<Box<dyn TaskState>, StateError> {
        Err(StateError::rejected(self.name(), "finish"))
    }

    fn reopen(&self) -> Result<Box<dyn TaskState>, StateError> {
        Err(StateError::rejected(self.name(), "reopen"))
    }
}

/// Fresh tasks (and reopened ones) sit here until work starts.
pub struct Idle;

impl TaskState for Idle {
    fn name(&self) -> &'static str {
        "idle"
    }

    fn start(&self) -> Result<Box<dyn TaskState>, StateError> {
        Ok(Box::new(InProgress))
    }
}

pub struct InProgress;

impl TaskState for InProgress {
    fn name(&self) -> &'static str {
        "in-progress"
    }

    fn finish(&self) -> Result<Box<dyn TaskState>, StateError> {
        Ok(Box::new(Closed))
    }
}

pub struct Closed;

impl TaskState for Closed {
    fn name(&self) -> &'static str {
        "closed"
    }

    fn reopen(&self) -> Result<Box<dyn TaskState>, StateError> {
        Ok(Box::new(Idle))
    }
}

/// The context: holds a state object and forwards operations to it.
pub struct Task {
    pub name: String,
    pub assignee: String,
    state: Box<dyn TaskState>,
}

impl Task {
    /// New tasks start idle.
    pub fn new(name: impl Into<String>, assignee: impl Into<String>) -> Self {
        Task {
            name: name.into(),
            assignee: assignee.into(),
            state: Box::new(Idle),
        }
    }

    pub fn start(&mut self) -> Result<(), StateError> {
        self.state = self.state.start()?;
        Ok(())
    }

    pub fn finish(&mut self) -> Result<(), StateError> {
        self.state = self.state.finish()?;
        Ok(())
    }

    pub fn reopen(&mut self) -> Result<(), StateError> {
        self.state = self.state.reopen()?;
        Ok(())
    }

    pub fn status(&self) -> &'static str {
        self.state.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_lifecycle_walks_the_three_stages() {
        let mut task = Task::new("Fix login bug", "vamsi");
        assert_eq!(task.status(), "idle");

        task.start().unwrap();
        assert_eq!(task.status(), "in-progress");

        task.finish().unwrap();
        assert_eq!(task.status(), "closed");

        task.reopen().unwrap();
        assert_eq!(task.status(), "idle");
    }

    #[test]
    fn idle_task_cannot_be_finished_or_reopened() {
        let mut task = Task::new("Write docs", "krishna");

        let err = task.finish().unwrap_err();
        assert_eq!(
            format!("{}", err),
            "cannot finish a task in the idle state"
        );
        assert!(task.reopen().is_err());
        assert_eq!(task.status(), "idle");
    }

    #[test]
    fn closed_task_rejects_start_until_reopened() {
        let mut task = Task::new("Ship release", "vamsi");
        task.start().unwrap();
        task.finish().unwrap();

        assert!(task.start().is_err());
        task.reopen().unwrap();
        task.start().unwrap();
        assert_eq!(task.status(), "in-progress");
    }

    #[test]
    fn starting_twice_is_rejected_and_state_is_unchanged() {
        let mut task = Task::new("Refactor parser", "krishna");
        task.start().unwrap();

        let err = task.start().unwrap_err();
        assert_eq!(
            err,
            StateError::InvalidTransition {
                state: "in-progress",
                action: "start"
            }
        );
        assert_eq!(task.status(), "in-progress");
    }
}
