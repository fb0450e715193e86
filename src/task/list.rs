//! Ordered task list and its save-file text

use std::fmt;

use chrono::NaiveDate;

use super::error::{Result, TaskAction, TaskError};
use super::model::{parse_iso_date, Task, TaskKind};

const LIST_HEADER: &str = "Here are the tasks in your list:";

/// Tasks in insertion order. Positions exposed to users are 1-based.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Task at a 1-based position
    pub fn get(&self, position: usize) -> Option<&Task> {
        position.checked_sub(1).and_then(|i| self.tasks.get(i))
    }

    /// True when a task with the same rendering is already listed
    pub fn contains(&self, task: &Task) -> bool {
        let rendered = task.render();
        self.tasks.iter().any(|t| t.render() == rendered)
    }

    /// Append a task, rejecting render-identical duplicates
    pub fn push(&mut self, task: Task) -> Result<()> {
        if self.contains(&task) {
            return Err(TaskError::DuplicateTask(task.render()));
        }
        self.tasks.push(task);
        Ok(())
    }

    pub fn add_todo(&mut self, title: &str) -> Result<String> {
        let task = Task::todo(title.trim())?;
        self.add(task)
    }

    /// `title /by YYYY-MM-DD`
    pub fn add_deadline(&mut self, input: &str) -> Result<String> {
        let task = parse_dated(TaskKind::Deadline, input)?;
        self.add(task)
    }

    /// `title /at YYYY-MM-DD`
    pub fn add_event(&mut self, input: &str) -> Result<String> {
        let task = parse_dated(TaskKind::Event, input)?;
        self.add(task)
    }

    fn add(&mut self, task: Task) -> Result<String> {
        let rendered = task.render();
        self.push(task)?;
        Ok(format!(
            "Got it. I've added this task:\n\t{}{}",
            rendered,
            self.count_line()
        ))
    }

    pub fn complete(&mut self, position: usize) -> Result<String> {
        let index = self.index_of(position, TaskAction::Complete)?;
        let task = &mut self.tasks[index];
        task.complete();
        Ok(format!("Nice! I've marked this task as done:\n\t{}", task))
    }

    pub fn delete(&mut self, position: usize) -> Result<String> {
        let index = self.index_of(position, TaskAction::Delete)?;
        let removed = self.tasks.remove(index);
        Ok(format!(
            "Noted. I've removed this task:\n\t{}{}",
            removed,
            self.count_line()
        ))
    }

    /// Render the tasks whose title contains `keyword` (case-sensitive)
    pub fn find(&self, keyword: &str) -> Result<String> {
        Ok(self.filtered(|t| t.title().contains(keyword)).render())
    }

    /// Pending dated tasks due before `today`
    pub fn overdue(&self, today: NaiveDate) -> TaskList {
        self.filtered(|t| t.is_overdue(today))
    }

    fn filtered(&self, keep: impl Fn(&Task) -> bool) -> TaskList {
        TaskList {
            tasks: self.tasks.iter().filter(|t| keep(t)).cloned().collect(),
        }
    }

    pub fn render(&self) -> String {
        self.to_string()
    }

    /// The exact save-file contents
    pub fn to_persisted_text(&self) -> String {
        self.tasks.iter().map(Task::to_persisted_line).collect()
    }

    /// Load a save file. Blank lines are skipped; line numbers in errors are 1-based.
    pub fn parse(content: &str) -> Result<Self> {
        let mut tasks = Vec::new();
        for (i, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let task = Task::from_persisted_line(line).map_err(|e| match e {
                TaskError::CorruptRecord { reason, .. } => {
                    TaskError::CorruptRecord { line: i + 1, reason }
                }
                other => other,
            })?;
            tasks.push(task);
        }
        Ok(Self { tasks })
    }

    fn index_of(&self, position: usize, action: TaskAction) -> Result<usize> {
        if position == 0 || position > self.tasks.len() {
            return Err(TaskError::IndexOutOfRange {
                action,
                position,
                size: self.tasks.len(),
            });
        }
        Ok(position - 1)
    }

    fn count_line(&self) -> String {
        format!("\nNow you have {} tasks in the list.", self.tasks.len())
    }
}

impl fmt::Display for TaskList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", LIST_HEADER)?;
        for (i, task) in self.tasks.iter().enumerate() {
            write!(f, "\n{}.{}", i + 1, task)?;
        }
        Ok(())
    }
}

/// Split `input` on the kind's directive into a title and a date
fn parse_dated(kind: TaskKind, input: &str) -> Result<Task> {
    let Some(marker) = kind.marker() else {
        return Task::new(input.trim(), kind, None);
    };

    let (title, date) = input.split_once(marker).ok_or_else(|| {
        TaskError::malformed(format!(
            "A {} must include '{}YYYY-MM-DD'.",
            kind.label(),
            marker
        ))
    })?;

    let date = date.trim();
    let due = parse_iso_date(date).ok_or_else(|| {
        TaskError::malformed(format!(
            "'{}' is not a valid date. Please use YYYY-MM-DD.",
            date
        ))
    })?;

    Task::new(title.trim(), kind, Some(due))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_list() -> TaskList {
        let mut list = TaskList::new();
        list.add_todo("Buy milk").unwrap();
        list.add_deadline("Submit report /by 2024-03-01").unwrap();
        list.add_event("Conference /at 2024-06-10").unwrap();
        list
    }

    #[test]
    fn test_add_todo_reports_count() {
        let mut list = TaskList::new();
        let status = list.add_todo("Read book").unwrap();
        assert_eq!(list.len(), 1);
        assert!(status.contains("Now you have 1 tasks in the list."));
        assert!(status.contains("[T][ ] Read book"));
    }

    #[test]
    fn test_duplicate_todo_rejected() {
        let mut list = TaskList::new();
        list.add_todo("Read book").unwrap();
        let err = list.add_todo("Read book").unwrap_err();
        assert!(matches!(err, TaskError::DuplicateTask(_)));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_duplicate_check_includes_done_state() {
        let mut list = TaskList::new();
        list.add_todo("Read book").unwrap();
        list.complete(1).unwrap();
        list.add_todo("Read book").unwrap();
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_add_deadline_renders_date() {
        let mut list = TaskList::new();
        list.add_deadline("Submit report /by 2024-03-01").unwrap();
        assert_eq!(
            list.get(1).unwrap().render(),
            "[D][ ] Submit report (by: Mar 1 2024)"
        );
    }

    #[test]
    fn test_add_event_uses_at_marker() {
        let mut list = TaskList::new();
        list.add_event("Conference /at 2024-06-10").unwrap();
        assert_eq!(
            list.get(1).unwrap().render(),
            "[E][ ] Conference (by: Jun 10 2024)"
        );

        let err = list.add_event("Conference /by 2024-06-10").unwrap_err();
        assert!(matches!(err, TaskError::MalformedInput(_)));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_add_deadline_malformed() {
        let mut list = TaskList::new();
        assert!(matches!(
            list.add_deadline("Submit report"),
            Err(TaskError::MalformedInput(_))
        ));
        assert!(matches!(
            list.add_deadline("Submit report /by next friday"),
            Err(TaskError::MalformedInput(_))
        ));
        assert!(matches!(
            list.add_deadline("/by 2024-03-01"),
            Err(TaskError::MalformedInput(_))
        ));
        assert!(list.is_empty());
    }

    #[test]
    fn test_add_rejects_loose_dates() {
        let mut list = TaskList::new();
        for input in [
            "x /by 2024-3-1",
            "y /by 24-03-01",
            "z /by 2024-03-01T09:00",
        ] {
            assert!(matches!(
                list.add_deadline(input),
                Err(TaskError::MalformedInput(_))
            ));
        }
        assert!(matches!(
            list.add_event("party /at 2024-12-5"),
            Err(TaskError::MalformedInput(_))
        ));
        assert!(list.is_empty());
    }

    #[test]
    fn test_add_rejects_multiline_titles() {
        let mut list = TaskList::new();
        assert!(matches!(
            list.add_todo("a\nb"),
            Err(TaskError::MalformedInput(_))
        ));
        assert!(matches!(
            list.add_deadline("a\rb /by 2024-03-01"),
            Err(TaskError::MalformedInput(_))
        ));
        assert!(list.is_empty());
        assert_eq!(list.to_persisted_text(), "");
    }

    #[test]
    fn test_every_added_task_survives_reload() {
        let mut list = TaskList::new();
        list.add_todo("pipes | and [brackets]").unwrap();
        list.add_deadline("tabs\tinside /by 2024-03-01").unwrap();
        list.add_event("unicode ✓ title /at 2024-06-10").unwrap();

        let reloaded = TaskList::parse(&list.to_persisted_text()).unwrap();
        assert_eq!(reloaded, list);
        assert_eq!(reloaded.render(), list.render());
    }

    #[test]
    fn test_complete() {
        let mut list = TaskList::new();
        list.add_todo("Read book").unwrap();
        let status = list.complete(1).unwrap();
        assert_eq!(status, "Nice! I've marked this task as done:\n\t[T][x] Read book");
        assert!(list.get(1).unwrap().is_done());

        list.complete(1).unwrap();
        assert!(list.get(1).unwrap().is_done());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_complete_out_of_range() {
        let mut list = sample_list();
        assert!(matches!(
            list.complete(0),
            Err(TaskError::IndexOutOfRange {
                action: TaskAction::Complete,
                ..
            })
        ));
        assert!(list.iter().all(|t| !t.is_done()));
    }

    #[test]
    fn test_delete() {
        let mut list = sample_list();
        let status = list.delete(1).unwrap();
        assert_eq!(
            status,
            "Noted. I've removed this task:\n\t[T][ ] Buy milk\nNow you have 2 tasks in the list."
        );
        assert_eq!(list.get(1).unwrap().title(), "Submit report");
    }

    #[test]
    fn test_delete_out_of_range_leaves_list_unchanged() {
        let mut list = sample_list();
        let before = list.clone();
        let err = list.delete(5).unwrap_err();
        assert_eq!(
            err,
            TaskError::IndexOutOfRange {
                action: TaskAction::Delete,
                position: 5,
                size: 3
            }
        );
        assert_eq!(
            err.to_string(),
            "The task you are trying to delete does not exist."
        );
        assert_eq!(list, before);
    }

    #[test]
    fn test_find_is_case_sensitive_substring() {
        let list = sample_list();
        let found = list.find("port").unwrap();
        assert_eq!(
            found,
            "Here are the tasks in your list:\n1.[D][ ] Submit report (by: Mar 1 2024)"
        );

        let none = list.find("PORT").unwrap();
        assert_eq!(none, "Here are the tasks in your list:");
    }

    #[test]
    fn test_render_numbers_from_one() {
        let list = sample_list();
        assert_eq!(
            list.render(),
            "Here are the tasks in your list:\n\
             1.[T][ ] Buy milk\n\
             2.[D][ ] Submit report (by: Mar 1 2024)\n\
             3.[E][ ] Conference (by: Jun 10 2024)"
        );
        assert_eq!(TaskList::new().render(), "Here are the tasks in your list:");
    }

    #[test]
    fn test_persisted_text() {
        let mut list = sample_list();
        list.complete(2).unwrap();
        assert_eq!(
            list.to_persisted_text(),
            "T0|Buy milk\nD12024-03-01|Submit report\nE02024-06-10|Conference\n"
        );
    }

    #[test]
    fn test_persist_and_reload_is_identical() {
        let mut list = sample_list();
        list.complete(3).unwrap();
        let reloaded = TaskList::parse(&list.to_persisted_text()).unwrap();
        assert_eq!(reloaded.render(), list.render());
        assert_eq!(reloaded, list);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let list = TaskList::parse("T0|Buy milk\n\nD0|Undated\n\n  \n").unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(2).unwrap().render(), "[D][ ] Undated");
    }

    #[test]
    fn test_parse_reports_line_number() {
        let err = TaskList::parse("T0|Buy milk\ngarbage\n").unwrap_err();
        assert!(matches!(err, TaskError::CorruptRecord { line: 2, .. }));
    }

    #[test]
    fn test_overdue() {
        let mut list = sample_list();
        let today = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        assert_eq!(list.overdue(today).len(), 1);
        list.complete(2).unwrap();
        assert!(list.overdue(today).is_empty());
    }
}
