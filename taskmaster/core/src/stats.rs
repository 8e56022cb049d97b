use crate::task::Task;

/// Summary counts shown next to the task list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// Whole-number percentage, rounded half up
    pub completed_percentage: u32,
    pub pending_percentage: u32,
}

impl TaskStats {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|task| task.completed).count();
        let pending = total - completed;

        Self {
            total,
            completed,
            pending,
            completed_percentage: percentage(completed, total),
            pending_percentage: percentage(pending, total),
        }
    }
}

// Each percentage is rounded on its own, so the pair can sum to 101.
fn percentage(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (part as f64 * 100.0 / total as f64).round() as u32
}
