//! Repository trait definitions
//!
//! The handlers talk to storage through [`Repository`], so the route layer
//! only depends on the CRUD contract and not on SQL.

use async_trait::async_trait;
use std::fmt::Display;

use crate::errors::{AppError, AppResult};

/// Core repository trait providing CRUD operations
///
/// # Type Parameters
///
/// * `T` - The entity type (e.g., Job)
/// * `ID` - The identifier type
///
/// # Examples
///
/// ```rust,ignore
/// use jobs_api::repositories::Repository;
///
/// async fn example<R: Repository<Job, i64>>(repo: R) -> AppResult<()> {
///     let job = repo.find_by_id(1).await?;
///     repo.delete(1).await?;
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait Repository<T: Send, ID: Display + Send + 'static>: Send + Sync {
    /// Request type for creating new entities
    type CreateRequest;
    /// Request type for updating existing entities
    type UpdateRequest;
    /// Query type for filtering
    type Query;

    /// Name used in `NotFound` errors
    fn resource_name(&self) -> &'static str {
        "record"
    }

    /// Find an entity by its ID
    ///
    /// # Returns
    ///
    /// * `Ok(Some(T))` - Entity found
    /// * `Ok(None)` - Entity not found
    /// * `Err(AppError)` - Database or other error
    async fn find_by_id(&self, id: ID) -> AppResult<Option<T>>;

    /// Find all entities matching a query (may be empty)
    async fn find_all(&self, query: Self::Query) -> AppResult<Vec<T>>;

    /// Create a new entity
    ///
    /// # Returns
    ///
    /// * `Ok(T)` - Created entity with its generated ID
    /// * `Err(AppError::BadRequest)` - Constraint violation
    async fn create(&self, request: Self::CreateRequest) -> AppResult<T>;

    /// Update an existing entity
    ///
    /// # Returns
    ///
    /// * `Ok(T)` - Updated entity
    /// * `Err(AppError::BadRequest)` - Nothing to update or constraint violation
    /// * `Err(AppError::NotFound)` - No entity with this ID
    async fn update(&self, id: ID, request: Self::UpdateRequest) -> AppResult<T>;

    /// Delete an entity by ID
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Entity deleted
    /// * `Err(AppError::NotFound)` - No entity with this ID
    async fn delete(&self, id: ID) -> AppResult<()>;

    /// Fetch an entity that must exist
    ///
    /// # Returns
    ///
    /// * `Ok(T)` - Entity found
    /// * `Err(AppError::NotFound)` - No entity with this ID
    async fn get(&self, id: ID) -> AppResult<T> {
        let key = id.to_string();
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(self.resource_name(), key))
    }

    /// Check if an entity exists by ID
    async fn exists(&self, id: ID) -> AppResult<bool> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}
