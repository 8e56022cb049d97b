use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How urgent a task is. Tasks created without a priority are `Medium`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = TaskValidationError;

    /// Parses a priority name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Priority::ALL
            .into_iter()
            .find(|priority| priority.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TaskValidationError::UnknownPriority(s.to_string()))
    }
}

/// A persisted task as returned by the task store.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Task {
    /// Store-assigned identifier, immutable once created
    #[cfg_attr(feature = "serde", serde(alias = "_id"))]
    pub id: String,
    pub title: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub priority: Priority,
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "deadline::deserialize")
    )]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, format = Date))]
    pub deadline: Option<NaiveDate>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub completed: bool,
}

/// Payload for creating a task. Only the title is required; every other field
/// falls back to its default when omitted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NewTask {
    /// A missing title deserializes as empty so it fails validation instead of parsing
    #[cfg_attr(feature = "serde", serde(default))]
    pub title: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub description: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub priority: Option<Priority>,
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            deserialize_with = "deadline::deserialize",
            skip_serializing_if = "Option::is_none"
        )
    )]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, format = Date))]
    pub deadline: Option<NaiveDate>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub completed: Option<bool>,
}

impl NewTask {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Checks the payload can be stored: the title must contain something other than whitespace.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        validate_title(&self.title)
    }

    /// Builds the stored record for this payload under the given identifier, filling in defaults.
    pub fn into_task(self, id: String) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description.unwrap_or_default(),
            priority: self.priority.unwrap_or_default(),
            deadline: self.deadline,
            completed: self.completed.unwrap_or(false),
        }
    }
}

/// Payload for updating a task. Absent fields are left untouched.
///
/// `deadline` distinguishes between absent (keep), `null` (clear) and a date (set).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TaskPatch {
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub title: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub description: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub priority: Option<Priority>,
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            deserialize_with = "deadline::deserialize_patch",
            skip_serializing_if = "Option::is_none"
        )
    )]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, format = Date))]
    pub deadline: Option<Option<NaiveDate>>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub completed: Option<bool>,
}

impl TaskPatch {
    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &TaskPatch::default()
    }

    /// A title, when present, must not be blank.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        match &self.title {
            Some(title) => validate_title(title),
            None => Ok(()),
        }
    }
}

impl From<Task> for TaskPatch {
    /// Full-record replacement of everything but the identifier.
    fn from(task: Task) -> Self {
        Self {
            title: Some(task.title),
            description: Some(task.description),
            priority: Some(task.priority),
            deadline: Some(task.deadline),
            completed: Some(task.completed),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    #[error("Task title cannot be empty")]
    EmptyTitle,
    #[error("Invalid deadline '{0}', expected YYYY-MM-DD")]
    InvalidDeadline(String),
    #[error("Unknown priority '{0}', expected High, Medium or Low")]
    UnknownPriority(String),
}

fn validate_title(title: &str) -> Result<(), TaskValidationError> {
    if title.trim().is_empty() {
        return Err(TaskValidationError::EmptyTitle);
    }
    Ok(())
}

/// Parses a deadline given either as a calendar date (`2025-03-14`) or as an
/// RFC 3339 timestamp, in which case only its UTC date is kept.
pub fn parse_deadline(text: &str) -> Result<NaiveDate, TaskValidationError> {
    let text = text.trim();
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .or_else(|_| {
            chrono::DateTime::parse_from_rfc3339(text)
                .map(|timestamp| timestamp.with_timezone(&chrono::Utc).date_naive())
        })
        .map_err(|_| TaskValidationError::InvalidDeadline(text.to_string()))
}

#[cfg(feature = "serde")]
mod deadline {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, de};

    /// Empty strings come from blank date inputs and mean "no deadline".
    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(text) => super::parse_deadline(text)
                .map(Some)
                .map_err(de::Error::custom),
        }
    }

    /// Only called when the field is present, so `null` becomes `Some(None)`.
    pub(super) fn deserialize_patch<'de, D>(
        deserializer: D,
    ) -> Result<Option<Option<NaiveDate>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize(deserializer).map(Some)
    }
}
