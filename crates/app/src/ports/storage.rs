//! Storage port — repository trait for persistence.

use std::future::Future;

use campus_domain::error::CampusError;
use campus_domain::resource::{Record, Resource};

/// Persistence operations for one resource type.
///
/// The store assigns identifiers: [`create`](Repository::create) receives
/// bare fields and returns the identified record.
pub trait Repository<R: Resource> {
    /// Persist a new record and return it with its assigned identifier.
    fn create(&self, fields: R) -> impl Future<Output = Result<Record<R>, CampusError>> + Send;

    /// Look up a record, returning `None` when absent.
    fn get_by_id(
        &self,
        id: R::Id,
    ) -> impl Future<Output = Result<Option<Record<R>>, CampusError>> + Send;

    /// Return every stored record in ascending identifier order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Record<R>>, CampusError>> + Send;

    /// Overwrite an existing record.
    fn update(&self, record: Record<R>)
    -> impl Future<Output = Result<Record<R>, CampusError>> + Send;

    /// Remove a record. Removing an absent record is not an error.
    fn delete(&self, id: R::Id) -> impl Future<Output = Result<(), CampusError>> + Send;
}
