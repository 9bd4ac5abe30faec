//! Shared record shapes for the curriculum tracker.
//!
//! DESIGN
//! ======
//! These are pure data contracts: students, their per-week progress,
//! checkpoints inside a week, and mind-map nodes. They carry no lifecycle
//! rules. The only enforced invariant is that the two enumerations
//! (`WeekStatus`, `NodeType`) accept exactly their declared wire strings,
//! whether parsed from text, decoded from JSON, or read from Postgres.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

// =============================================================================
// ENUM PARSING
// =============================================================================

/// Returned when a string is not one of an enumeration's wire values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind}: {value:?}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

// =============================================================================
// WEEK STATUS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "week_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum WeekStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl WeekStatus {
    pub const ALL: [Self; 3] = [Self::NotStarted, Self::InProgress, Self::Completed];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for WeekStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeekStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseEnumError { kind: "week status", value: s.to_owned() })
    }
}

// =============================================================================
// NODE TYPE
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "node_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    Concept,
    Exercise,
    Checkpoint,
    Material,
}

impl NodeType {
    pub const ALL: [Self; 4] = [Self::Concept, Self::Exercise, Self::Checkpoint, Self::Material];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Concept => "concept",
            Self::Exercise => "exercise",
            Self::Checkpoint => "checkpoint",
            Self::Material => "material",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseEnumError { kind: "node type", value: s.to_owned() })
    }
}

// =============================================================================
// RECORDS
// =============================================================================

/// A learner enrolled in the curriculum. Mirrors the `students` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Student {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub current_week: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Completion state of one curriculum week for one student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct WeekProgress {
    pub id: Uuid,
    pub student_id: Uuid,
    pub week_number: i32,
    pub status: WeekStatus,
    #[serde(with = "time::serde::rfc3339::option")]
    pub completed_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Sub-task within a week's progress record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Checkpoint {
    pub id: Uuid,
    pub week_progress_id: Uuid,
    pub title: String,
    pub completed: bool,
    #[serde(with = "time::serde::rfc3339::option")]
    pub completed_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Node of the per-week mind map. `parent_id` points at another node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct MapNode {
    pub id: Uuid,
    pub week: i32,
    pub title: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "node_type")]
    pub kind: NodeType,
    pub content: Option<String>,
    pub parent_id: Option<Uuid>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[cfg(test)]
#[path = "domain_test.rs"]
mod tests;
