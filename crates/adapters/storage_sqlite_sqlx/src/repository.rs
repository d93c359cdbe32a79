//! `SQLite` implementation of [`Repository`], generic over [`SqliteResource`].

use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use campus_app::ports::Repository;
use campus_domain::error::{CampusError, NotFoundError};
use campus_domain::resource::Record;

use crate::error::StorageError;
use crate::tables::SqliteResource;

/// SQL statements for one table, rendered once from its column list.
struct Statements {
    insert: String,
    select_by_id: String,
    select_all: String,
    update: String,
    delete_by_id: String,
}

impl Statements {
    fn for_table(table: &str, columns: &[&str]) -> Self {
        let column_list = columns.join(", ");
        let placeholders = vec!["?"; columns.len()].join(", ");
        let assignments = columns
            .iter()
            .map(|column| format!("{column} = ?"))
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            insert: format!("INSERT INTO {table} ({column_list}) VALUES ({placeholders})"),
            select_by_id: format!("SELECT id, {column_list} FROM {table} WHERE id = ?"),
            select_all: format!("SELECT id, {column_list} FROM {table} ORDER BY id"),
            update: format!("UPDATE {table} SET {assignments} WHERE id = ?"),
            delete_by_id: format!("DELETE FROM {table} WHERE id = ?"),
        }
    }
}

fn decode<R: SqliteResource>(row: &SqliteRow) -> Result<Record<R>, sqlx::Error> {
    let id: i64 = row.try_get("id")?;
    Ok(Record::new(id.into(), R::from_row(row)?))
}

/// `SQLite`-backed repository for any [`SqliteResource`].
pub struct SqliteRepository<R> {
    pool: SqlitePool,
    statements: Arc<Statements>,
    _resource: PhantomData<fn() -> R>,
}

impl<R: SqliteResource> SqliteRepository<R> {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            statements: Arc::new(Statements::for_table(R::TABLE, R::COLUMNS)),
            _resource: PhantomData,
        }
    }
}

impl<R: SqliteResource> Repository<R> for SqliteRepository<R> {
    fn create(&self, fields: R) -> impl Future<Output = Result<Record<R>, CampusError>> + Send {
        let pool = self.pool.clone();
        let statements = Arc::clone(&self.statements);
        async move {
            let result = fields
                .clone()
                .bind(sqlx::query(&statements.insert))
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Record::new(result.last_insert_rowid().into(), fields))
        }
    }

    fn get_by_id(
        &self,
        id: R::Id,
    ) -> impl Future<Output = Result<Option<Record<R>>, CampusError>> + Send {
        let pool = self.pool.clone();
        let statements = Arc::clone(&self.statements);
        async move {
            let raw: i64 = id.into();
            let row = sqlx::query(&statements.select_by_id)
                .bind(raw)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            let record = row
                .as_ref()
                .map(decode::<R>)
                .transpose()
                .map_err(StorageError::from)?;
            Ok(record)
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Record<R>>, CampusError>> + Send {
        let pool = self.pool.clone();
        let statements = Arc::clone(&self.statements);
        async move {
            let rows = sqlx::query(&statements.select_all)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            let records = rows
                .iter()
                .map(decode::<R>)
                .collect::<Result<Vec<_>, _>>()
                .map_err(StorageError::from)?;
            Ok(records)
        }
    }

    fn update(
        &self,
        record: Record<R>,
    ) -> impl Future<Output = Result<Record<R>, CampusError>> + Send {
        let pool = self.pool.clone();
        let statements = Arc::clone(&self.statements);
        async move {
            let raw: i64 = record.id.into();
            let result = record
                .fields
                .clone()
                .bind(sqlx::query(&statements.update))
                .bind(raw)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                return Err(NotFoundError {
                    entity: R::NAME,
                    id: raw,
                }
                .into());
            }
            Ok(record)
        }
    }

    fn delete(&self, id: R::Id) -> impl Future<Output = Result<(), CampusError>> + Send {
        let pool = self.pool.clone();
        let statements = Arc::clone(&self.statements);
        async move {
            let raw: i64 = id.into();
            sqlx::query(&statements.delete_by_id)
                .bind(raw)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}
