use super::formatter::TaskGroup;
use super::messages::Message;
use super::task::TaskList;
use crate::msg_print;
use prettytable::{row, Table};

/// Width of the `=` and `*` rules around the list and the menu.
pub const BANNER_WIDTH: usize = 40;

pub struct View {}

impl View {
    /// Builds the task table. Descriptions are truncated for display only.
    pub fn task_table(tasks: &TaskList) -> Table {
        let mut table = Table::new();

        table.set_titles(row!["ID", "Status", "Task Description"]);
        for task in tasks.format() {
            table.add_row(row![task.id, task.status, task.description]);
        }

        table
    }

    /// Prints the framed task list, or the empty-list placeholder.
    pub fn tasks(tasks: &TaskList) {
        let rule = "=".repeat(BANNER_WIDTH);

        msg_print!(format!("\n{}\n{}\n{}", rule, Message::TaskListTitle, rule));
        if tasks.is_empty() {
            msg_print!(Message::TaskListEmpty);
        } else {
            msg_print!(Self::task_table(tasks).to_string().trim_end());
        }
        msg_print!(rule);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_table_rows() {
        let mut tasks = TaskList::new();
        tasks.add("Buy milk").unwrap();
        tasks.add("Walk dog").unwrap();
        tasks.mark_done(1);

        let table = View::task_table(&tasks);
        assert_eq!(table.len(), 2);

        let rendered = table.to_string();
        assert!(rendered.contains("Task Description"));
        assert!(rendered.contains("✅ Done"));
        assert!(rendered.contains("⏳ Pending"));
        assert!(rendered.contains("Walk dog"));
    }

    #[test]
    fn test_task_table_truncates_description() {
        let mut tasks = TaskList::new();
        tasks.add("Renew the passport before the summer trip").unwrap();

        let rendered = View::task_table(&tasks).to_string();
        assert!(rendered.contains("Renew the passport b"));
        assert!(!rendered.contains("summer"));
    }

    #[test]
    fn test_task_table_empty() {
        let table = View::task_table(&TaskList::new());
        assert_eq!(table.len(), 0);
    }
}
