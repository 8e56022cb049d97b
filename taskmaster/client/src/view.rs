//! Plain-text rendering of the board for the terminal.
use taskmaster_core::{Task, TaskFilter, TaskStats};

use crate::api::TaskApi;
use crate::board::TaskBoard;

const PROGRESS_BAR_WIDTH: u32 = 20;

pub fn render_header() -> String {
    "TaskMaster\nOrganize Your Work & Life\n".to_string()
}

/// The three filters on one line, the active one in brackets.
pub fn render_filter_bar(active: TaskFilter) -> String {
    let filters: Vec<String> = TaskFilter::ALL
        .iter()
        .map(|filter| {
            if *filter == active {
                format!("[{}]", filter)
            } else {
                format!(" {} ", filter)
            }
        })
        .collect();
    format!("{}\n", filters.join(" "))
}

pub fn render_task(task: &Task) -> String {
    let checkbox = if task.completed { "[x]" } else { "[ ]" };
    let mut line = format!("{} {} ({})", checkbox, task.title, task.priority);
    if let Some(deadline) = task.deadline {
        line.push_str(&format!(" due {}", deadline));
    }
    line.push_str(&format!("  id: {}\n", task.id));
    if !task.description.is_empty() {
        line.push_str(&format!("    {}\n", task.description));
    }
    line
}

pub fn render_task_list(tasks: &[&Task]) -> String {
    if tasks.is_empty() {
        return "No tasks to show.\n".to_string();
    }
    tasks.iter().map(|task| render_task(task)).collect()
}

pub fn render_stats(stats: &TaskStats) -> String {
    format!(
        "Total: {}\nCompleted: {:>3} {} {}%\nPending:   {:>3} {} {}%\n",
        stats.total,
        stats.completed,
        progress_bar(stats.completed_percentage),
        stats.completed_percentage,
        stats.pending,
        progress_bar(stats.pending_percentage),
        stats.pending_percentage,
    )
}

/// The whole screen: header, filter bar, visible tasks and statistics.
pub fn render_board<A: TaskApi>(board: &TaskBoard<A>) -> String {
    [
        render_header(),
        render_filter_bar(board.filter()),
        render_task_list(&board.visible_tasks()),
        render_stats(&board.stats()),
    ]
    .join("\n")
}

fn progress_bar(percentage: u32) -> String {
    let filled = (percentage.min(100) * PROGRESS_BAR_WIDTH / 100) as usize;
    let empty = PROGRESS_BAR_WIDTH as usize - filled;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use taskmaster_core::Priority;

    fn task(completed: bool) -> Task {
        Task {
            id: "42".to_string(),
            title: "Buy milk".to_string(),
            description: String::new(),
            priority: Priority::Medium,
            deadline: None,
            completed,
        }
    }

    #[test]
    fn filter_bar_marks_active_filter() {
        assert_eq!(
            render_filter_bar(TaskFilter::Pending),
            " All   Completed  [Pending]\n"
        );
    }

    #[test]
    fn pending_task_renders_empty_checkbox() {
        assert_eq!(render_task(&task(false)), "[ ] Buy milk (Medium)  id: 42\n");
    }

    #[test]
    fn completed_task_renders_details() {
        let task = Task {
            description: "two litres".to_string(),
            priority: Priority::High,
            deadline: NaiveDate::from_ymd_opt(2025, 3, 14),
            ..task(true)
        };

        assert_eq!(
            render_task(&task),
            "[x] Buy milk (High) due 2025-03-14  id: 42\n    two litres\n"
        );
    }

    #[test]
    fn empty_list_says_so() {
        assert_eq!(render_task_list(&[]), "No tasks to show.\n");
    }

    #[test]
    fn stats_render_progress_bars() {
        let stats = TaskStats::from_tasks(&[task(true), task(false), task(false), task(false)]);

        assert_eq!(
            render_stats(&stats),
            "Total: 4\n\
             Completed:   1 [#####---------------] 25%\n\
             Pending:     3 [###############-----] 75%\n"
        );
    }

    #[test]
    fn progress_bar_bounds() {
        assert_eq!(progress_bar(0), format!("[{}]", "-".repeat(20)));
        assert_eq!(progress_bar(100), format!("[{}]", "#".repeat(20)));
    }
}
