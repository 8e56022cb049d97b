use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::task::Task;

/// Which tasks a list view shows. Purely client-side view state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TaskFilter {
    #[default]
    All,
    Completed,
    Pending,
}

impl TaskFilter {
    pub const ALL: [TaskFilter; 3] = [TaskFilter::All, TaskFilter::Completed, TaskFilter::Pending];

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Completed => task.completed,
            TaskFilter::Pending => !task.completed,
        }
    }

    /// Returns the tasks this filter lets through, in their original order.
    pub fn apply<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        tasks.iter().filter(|task| self.matches(task)).collect()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskFilter::All => "All",
            TaskFilter::Completed => "Completed",
            TaskFilter::Pending => "Pending",
        }
    }
}

impl fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown filter '{0}', expected All, Completed or Pending")]
pub struct UnknownFilter(pub String);

impl FromStr for TaskFilter {
    type Err = UnknownFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskFilter::ALL
            .into_iter()
            .find(|filter| filter.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownFilter(s.to_string()))
    }
}
