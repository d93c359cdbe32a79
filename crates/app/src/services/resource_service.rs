//! The five CRUD use-cases, shared by every resource type.

use std::marker::PhantomData;

use campus_domain::error::{CampusError, NotFoundError};
use campus_domain::resource::{Record, Resource};

use crate::ports::Repository;

/// Application service for CRUD operations on one resource type.
pub struct ResourceService<R, P> {
    repo: P,
    _resource: PhantomData<fn() -> R>,
}

impl<R, P> ResourceService<R, P>
where
    R: Resource,
    P: Repository<R>,
{
    /// Create a new service backed by the given repository.
    pub fn new(repo: P) -> Self {
        Self {
            repo,
            _resource: PhantomData,
        }
    }

    /// List every stored record.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self), fields(entity = R::NAME))]
    pub async fn list(&self) -> Result<Vec<Record<R>>, CampusError> {
        let records = self.repo.get_all().await?;
        tracing::debug!(count = records.len(), "records listed");
        Ok(records)
    }

    /// Persist a new record. The identifier is assigned by the store.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, fields), fields(entity = R::NAME))]
    pub async fn create(&self, fields: R) -> Result<Record<R>, CampusError> {
        let record = self.repo.create(fields).await?;
        tracing::info!(id = %record.id, "record created");
        Ok(record)
    }

    /// Look up a record by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`CampusError::NotFound`] when no record with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self), fields(entity = R::NAME))]
    pub async fn get(&self, id: R::Id) -> Result<Record<R>, CampusError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: R::NAME,
                id: id.into(),
            }
            .into()
        })
    }

    /// Delete a record by id and return what was removed.
    ///
    /// # Errors
    ///
    /// Returns [`CampusError::NotFound`] when no record with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self), fields(entity = R::NAME))]
    pub async fn delete(&self, id: R::Id) -> Result<Record<R>, CampusError> {
        let record = self.get(id).await?;
        self.repo.delete(id).await?;
        tracing::info!("record deleted");
        Ok(record)
    }

    /// Replace every field of an existing record.
    ///
    /// There is no partial update: `fields` is written as-is.
    ///
    /// # Errors
    ///
    /// Returns [`CampusError::NotFound`] when no record with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self, fields), fields(entity = R::NAME))]
    pub async fn update(&self, id: R::Id, fields: R) -> Result<Record<R>, CampusError> {
        let existing = self.get(id).await?;
        let record = self.repo.update(existing.replace(fields)).await?;
        tracing::info!("record updated");
        Ok(record)
    }
}
