//! Repository for the `tasks` table.

use chrono::Utc;
use fieldops_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::task::{CreateTask, Task};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, code, title, description, status, scheduled_for, \
                        technician_id, created_at, updated_at";

/// Provides CRUD operations for maintenance tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateTask) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (code, title, description, scheduled_for, technician_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(&input.code)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.scheduled_for)
            .bind(input.technician_id)
            .fetch_one(pool)
            .await
    }

    /// Find a task by internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all tasks assigned to a technician, scheduled-first then by
    /// creation order.
    pub async fn list_for_technician(
        pool: &SqlitePool,
        technician_id: DbId,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks
             WHERE technician_id = $1
             ORDER BY scheduled_for IS NULL, scheduled_for, id"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(technician_id)
            .fetch_all(pool)
            .await
    }

    /// Update a task's status. Returns `None` if no row with the given id
    /// exists. `status` is validated by the handler against
    /// [`crate::models::task::VALID_TASK_STATUSES`] and by the CHECK
    /// constraint.
    pub async fn update_status(
        pool: &SqlitePool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET status = $2, updated_at = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(status)
            .bind(Utc::now())
            .fetch_optional(pool)
            .await
    }

    /// Total number of task rows. Used by first-run demo seeding.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tasks")
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }
}
