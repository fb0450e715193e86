//! Task data model

use std::fmt;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;

use super::error::{Result, TaskError};

/// Date format used in the save file
pub const PERSISTED_DATE_FORMAT: &str = "%Y-%m-%d";

/// Date format used when rendering a task for display (e.g. `Mar 1 2024`)
pub const DISPLAY_DATE_FORMAT: &str = "%b %-d %Y";

// <kind><done><date?>|<title>; the date segment stops at the first `|`
static PERSISTED_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.)(.)([^|]*)\|(.*)$").expect("persisted line regex"));

static ISO_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("iso date regex"));

/// Parse an exact `YYYY-MM-DD` date. Unpadded fields and short years are rejected.
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    if !ISO_DATE_RE.is_match(s) {
        return None;
    }
    NaiveDate::parse_from_str(s, PERSISTED_DATE_FORMAT).ok()
}

/// Task kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    /// Plain to-do, never dated
    Todo,
    /// Due by a date
    Deadline,
    /// Happens on a date
    Event,
}

impl TaskKind {
    /// One-character tag used in both the rendering and the save file
    pub fn tag(&self) -> char {
        match self {
            Self::Todo => 'T',
            Self::Deadline => 'D',
            Self::Event => 'E',
        }
    }

    /// Parse a tag. Anything unrecognized is a to-do, which keeps old save
    /// files loadable.
    pub fn from_tag(c: char) -> Self {
        match c {
            'D' => Self::Deadline,
            'E' => Self::Event,
            _ => Self::Todo,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Deadline => "deadline",
            Self::Event => "event",
        }
    }

    /// Directive that introduces the date in an add command
    pub fn marker(&self) -> Option<&'static str> {
        match self {
            Self::Todo => None,
            Self::Deadline => Some("/by "),
            Self::Event => Some("/at "),
        }
    }

    pub fn is_dated(&self) -> bool {
        !matches!(self, Self::Todo)
    }
}

/// A single trackable item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    title: String,
    kind: TaskKind,
    done: bool,
    due: Option<NaiveDate>,
}

impl Task {
    /// Create a pending task.
    ///
    /// Deadlines and events need a due date and to-dos must not have one.
    /// Titles are single-line: the save format is one task per line.
    pub fn new(title: impl Into<String>, kind: TaskKind, due: Option<NaiveDate>) -> Result<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(TaskError::malformed(format!(
                "The description of a {} cannot be empty.",
                kind.label()
            )));
        }
        if title.contains(['\n', '\r']) {
            return Err(TaskError::malformed(format!(
                "The description of a {} must fit on one line.",
                kind.label()
            )));
        }
        match (kind.is_dated(), due.is_some()) {
            (true, false) => {
                return Err(TaskError::malformed(format!(
                    "A {} needs a date.",
                    kind.label()
                )))
            }
            (false, true) => {
                return Err(TaskError::malformed(format!(
                    "A {} cannot have a date.",
                    kind.label()
                )))
            }
            _ => {}
        }

        Ok(Self {
            title,
            kind,
            done: false,
            due,
        })
    }

    pub fn todo(title: impl Into<String>) -> Result<Self> {
        Self::new(title, TaskKind::Todo, None)
    }

    pub fn deadline(title: impl Into<String>, by: NaiveDate) -> Result<Self> {
        Self::new(title, TaskKind::Deadline, Some(by))
    }

    pub fn event(title: impl Into<String>, at: NaiveDate) -> Result<Self> {
        Self::new(title, TaskKind::Event, Some(at))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn kind(&self) -> TaskKind {
        self.kind
    }

    pub fn due(&self) -> Option<NaiveDate> {
        self.due
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Mark task as done. Completing twice is a no-op.
    pub fn complete(&mut self) {
        self.done = true;
    }

    /// Pending, dated, and due before `today`
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.done && self.due.is_some_and(|due| due < today)
    }

    /// Human-readable form, e.g. `[D][ ] Submit report (by: Mar 1 2024)`
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Format as a save-file line, newline included
    pub fn to_persisted_line(&self) -> String {
        let due = self
            .due
            .map(|d| d.format(PERSISTED_DATE_FORMAT).to_string())
            .unwrap_or_default();
        format!(
            "{}{}{}|{}\n",
            self.kind.tag(),
            if self.done { 1 } else { 0 },
            due,
            self.title
        )
    }

    /// Parse a save-file line.
    ///
    /// Unknown kind tags load as to-dos and an empty date segment loads as
    /// an undated task. A to-do never keeps a date. Errors carry line 0;
    /// callers that know the line number replace it.
    pub fn from_persisted_line(line: &str) -> Result<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        let corrupt = |reason: &str| TaskError::CorruptRecord {
            line: 0,
            reason: reason.to_string(),
        };

        let caps = PERSISTED_LINE_RE
            .captures(line)
            .ok_or_else(|| corrupt("expected <kind><done><date>|<title>"))?;

        let kind = caps[1].chars().next().map(TaskKind::from_tag).unwrap_or(TaskKind::Todo);
        let done = &caps[2] == "1";
        let date_segment = &caps[3];
        let title = caps[4].to_string();

        let due = if date_segment.is_empty() || !kind.is_dated() {
            None
        } else {
            let date = parse_iso_date(date_segment).ok_or_else(|| {
                corrupt(&format!("invalid date '{}', expected YYYY-MM-DD", date_segment))
            })?;
            Some(date)
        };

        Ok(Self {
            title,
            kind,
            done,
            due,
        })
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}][{}] {}",
            self.kind.tag(),
            if self.done { 'x' } else { ' ' },
            self.title
        )?;
        if let Some(due) = &self.due {
            write!(f, " (by: {})", due.format(DISPLAY_DATE_FORMAT))?;
        }
        Ok(())
    }
}
