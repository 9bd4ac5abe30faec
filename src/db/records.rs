//! Typed inserts and reads for the curriculum tables.
//!
//! DESIGN
//! ======
//! One insert per record shape plus the lookups needed to walk from a student
//! down to checkpoints and to load a week's map. Nothing here derives one field
//! from another: status, `completed` and `completed_at` are stored exactly as
//! given.

use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::{Checkpoint, MapNode, NodeType, Student, WeekProgress, WeekStatus};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: Uuid },
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

#[derive(Debug, Clone)]
pub struct NewStudent {
    pub email: String,
    pub name: String,
    pub current_week: i32,
}

#[derive(Debug, Clone)]
pub struct NewWeekProgress {
    pub student_id: Uuid,
    pub week_number: i32,
    pub status: WeekStatus,
    pub completed_at: Option<OffsetDateTime>,
}

#[derive(Debug, Clone)]
pub struct NewCheckpoint {
    pub week_progress_id: Uuid,
    pub title: String,
    pub completed: bool,
    pub completed_at: Option<OffsetDateTime>,
}

#[derive(Debug, Clone)]
pub struct NewMapNode {
    pub week: i32,
    pub title: String,
    pub kind: NodeType,
    pub content: Option<String>,
    pub parent_id: Option<Uuid>,
}

// =============================================================================
// STUDENTS
// =============================================================================

/// Insert a student with a fresh id.
///
/// # Errors
///
/// Returns a database error if the insert fails.
pub async fn insert_student(pool: &PgPool, new: &NewStudent) -> Result<Student, DbError> {
    let row = sqlx::query_as::<_, Student>(
        "INSERT INTO students (id, email, name, current_week)
         VALUES ($1, $2, $3, $4)
         RETURNING id, email, name, current_week, created_at, updated_at",
    )
    .bind(Uuid::new_v4())
    .bind(&new.email)
    .bind(&new.name)
    .bind(new.current_week)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

/// Fetch one student by id.
///
/// # Errors
///
/// Returns `NotFound` if no row matches, or a database error.
pub async fn get_student(pool: &PgPool, id: Uuid) -> Result<Student, DbError> {
    sqlx::query_as::<_, Student>(
        "SELECT id, email, name, current_week, created_at, updated_at
         FROM students WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(DbError::NotFound { entity: "student", id })
}

// =============================================================================
// WEEK PROGRESS
// =============================================================================

/// Insert a week progress record for an existing student.
///
/// # Errors
///
/// Returns a database error if the insert fails (including an unknown
/// `student_id`).
pub async fn insert_week_progress(pool: &PgPool, new: &NewWeekProgress) -> Result<WeekProgress, DbError> {
    let row = sqlx::query_as::<_, WeekProgress>(
        "INSERT INTO week_progress (id, student_id, week_number, status, completed_at)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id, student_id, week_number, status, completed_at, created_at",
    )
    .bind(Uuid::new_v4())
    .bind(new.student_id)
    .bind(new.week_number)
    .bind(new.status)
    .bind(new.completed_at)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

/// All week progress rows for a student, ordered by week.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_week_progress(pool: &PgPool, student_id: Uuid) -> Result<Vec<WeekProgress>, DbError> {
    let rows = sqlx::query_as::<_, WeekProgress>(
        "SELECT id, student_id, week_number, status, completed_at, created_at
         FROM week_progress
         WHERE student_id = $1
         ORDER BY week_number ASC, created_at ASC",
    )
    .bind(student_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

// =============================================================================
// CHECKPOINTS
// =============================================================================

/// Insert a checkpoint under a week progress record.
///
/// # Errors
///
/// Returns a database error if the insert fails.
pub async fn insert_checkpoint(pool: &PgPool, new: &NewCheckpoint) -> Result<Checkpoint, DbError> {
    let row = sqlx::query_as::<_, Checkpoint>(
        "INSERT INTO checkpoints (id, week_progress_id, title, completed, completed_at)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id, week_progress_id, title, completed, completed_at, created_at",
    )
    .bind(Uuid::new_v4())
    .bind(new.week_progress_id)
    .bind(&new.title)
    .bind(new.completed)
    .bind(new.completed_at)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

/// Checkpoints of one week progress record in creation order.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_checkpoints(pool: &PgPool, week_progress_id: Uuid) -> Result<Vec<Checkpoint>, DbError> {
    let rows = sqlx::query_as::<_, Checkpoint>(
        "SELECT id, week_progress_id, title, completed, completed_at, created_at
         FROM checkpoints
         WHERE week_progress_id = $1
         ORDER BY created_at ASC, id ASC",
    )
    .bind(week_progress_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

// =============================================================================
// MAP NODES
// =============================================================================

/// Insert a map node. A `parent_id` must reference an existing node.
///
/// # Errors
///
/// Returns a database error if the insert fails.
pub async fn insert_map_node(pool: &PgPool, new: &NewMapNode) -> Result<MapNode, DbError> {
    let row = sqlx::query_as::<_, MapNode>(
        "INSERT INTO map_nodes (id, week, title, node_type, content, parent_id)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING id, week, title, node_type, content, parent_id, created_at",
    )
    .bind(Uuid::new_v4())
    .bind(new.week)
    .bind(&new.title)
    .bind(new.kind)
    .bind(new.content.as_deref())
    .bind(new.parent_id)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

/// Flat map nodes for a week; feed into [`crate::map::MapTree::build`].
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_map_nodes(pool: &PgPool, week: i32) -> Result<Vec<MapNode>, DbError> {
    let rows = sqlx::query_as::<_, MapNode>(
        "SELECT id, week, title, node_type, content, parent_id, created_at
         FROM map_nodes
         WHERE week = $1
         ORDER BY created_at ASC, id ASC",
    )
    .bind(week)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

#[cfg(test)]
#[path = "records_test.rs"]
mod tests;
