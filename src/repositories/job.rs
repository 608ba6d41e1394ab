//! Job repository implementation
//!
//! Parameterized SQL for the `jobs` table.

use async_trait::async_trait;
use sqlx::{Pool, Sqlite};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

use super::traits::Repository;
use crate::database::{bind_values, sql_for_partial_update, SqlValue};
use crate::errors::{AppError, AppResult};
use crate::models::{Job, JobFilter, JobUpdate, NewJob};

const JOB_COLUMNS: &str = "id, title, salary, equity, company_handle";

/// Shared, type-erased job repository as held in the web state
pub type DynJobRepository = Arc<
    dyn Repository<Job, i64, CreateRequest = NewJob, UpdateRequest = JobUpdate, Query = JobFilter>,
>;

/// Repository implementation for jobs
#[derive(Clone)]
pub struct JobRepository {
    pool: Pool<Sqlite>,
}

impl JobRepository {
    /// Create a new job repository
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Build the `WHERE` clause and its bind values for the numeric filters
    ///
    /// The title filter is applied by `title_matches` instead: SQLite's
    /// `lower()` and `LIKE` only fold ASCII letters.
    fn where_clause(filter: &JobFilter) -> (String, Vec<SqlValue>) {
        let mut clauses = Vec::new();
        let mut values = Vec::new();

        if let Some(min_salary) = filter.min_salary {
            values.push(SqlValue::from(min_salary));
            clauses.push(format!("salary >= ${}", values.len()));
        }

        // NULL equity compares as unknown and is dropped as well
        if filter.has_equity == Some(true) {
            clauses.push("CAST(equity AS REAL) > 0".to_string());
        }

        if clauses.is_empty() {
            (String::new(), values)
        } else {
            (format!(" WHERE {}", clauses.join(" AND ")), values)
        }
    }
}

/// Case-insensitive substring test; `needle` must already be lowercased
fn title_matches(title: &str, needle: &str) -> bool {
    title.to_lowercase().contains(needle)
}

#[async_trait]
impl Repository<Job, i64> for JobRepository {
    type CreateRequest = NewJob;
    type UpdateRequest = JobUpdate;
    type Query = JobFilter;

    fn resource_name(&self) -> &'static str {
        "job"
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Job>> {
        let sql = format!("SELECT {JOB_COLUMNS} FROM jobs WHERE id = $1");
        let job = sqlx::query_as::<_, Job>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(job)
    }

    async fn find_all(&self, query: JobFilter) -> AppResult<Vec<Job>> {
        let (where_sql, values) = Self::where_clause(&query);
        let sql = format!("SELECT {JOB_COLUMNS} FROM jobs{where_sql} ORDER BY title, id");
        debug!(sql = %sql, "Listing jobs");

        let mut jobs = bind_values(sqlx::query_as::<_, Job>(&sql), values)
            .fetch_all(&self.pool)
            .await?;

        if let Some(title) = &query.title {
            let needle = title.to_lowercase();
            jobs.retain(|job| title_matches(&job.title, &needle));
        }
        Ok(jobs)
    }

    async fn create(&self, request: NewJob) -> AppResult<Job> {
        let sql = format!(
            "INSERT INTO jobs (title, salary, equity, company_handle)
             VALUES ($1, $2, $3, $4)
             RETURNING {JOB_COLUMNS}"
        );
        let job = sqlx::query_as::<_, Job>(&sql)
            .bind(&request.title)
            .bind(request.salary)
            .bind(&request.equity)
            .bind(&request.company_handle)
            .fetch_one(&self.pool)
            .await?;

        info!(job_id = job.id, company = %job.company_handle, "Created job");
        Ok(job)
    }

    async fn update(&self, id: i64, request: JobUpdate) -> AppResult<Job> {
        // The API field names already match the column names
        let update = sql_for_partial_update(request.into_fields(), &HashMap::new())?;
        let sql = format!(
            "UPDATE jobs SET {} WHERE id = ${} RETURNING {JOB_COLUMNS}",
            update.set_cols,
            update.next_placeholder()
        );

        let job = update
            .bind(sqlx::query_as::<_, Job>(&sql))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::not_found(self.resource_name(), id.to_string()))?;

        info!(job_id = job.id, "Updated job");
        Ok(job)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(self.resource_name(), id.to_string()));
        }

        info!(job_id = id, "Deleted job");
        Ok(())
    }
}
