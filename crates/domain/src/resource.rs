//! The shape shared by every record type exposed over the API.
//!
//! A resource is a flat set of scalar fields. Once persisted it is paired
//! with a store-assigned identifier in a [`Record`].

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;
use crate::id::RecordId;

/// A flat record type managed through the generic CRUD surface.
pub trait Resource:
    Clone + Default + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Type name used in client-facing messages (`"<NAME> with id 7 not found"`).
    const NAME: &'static str;

    /// Identifier type assigned by the store.
    type Id: RecordId;
}

/// A persisted resource: its identifier plus its fields.
///
/// Serializes flat, e.g. `{"id": 1, "name": "Apple Pie", ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(serialize = "", deserialize = ""))]
pub struct Record<R: Resource> {
    pub id: R::Id,
    #[serde(flatten)]
    pub fields: R,
}

impl<R: Resource> Record<R> {
    #[must_use]
    pub fn new(id: R::Id, fields: R) -> Self {
        Self { id, fields }
    }

    /// Overwrite every field, keeping the identifier.
    #[must_use]
    pub fn replace(self, fields: R) -> Self {
        Self {
            id: self.id,
            fields,
        }
    }
}

/// Build a full replacement for `R` from a JSON object.
///
/// Updates are full replacements: any field missing from `body` takes the
/// type's empty value rather than keeping what is stored, and so does a
/// field set to `null`. An `id` key is ignored.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidRecord`] when `body` is not an object
/// or a present field has the wrong type.
pub fn replacement_from_json<R: Resource>(body: Value) -> Result<R, ValidationError> {
    let invalid = |reason: String| ValidationError::InvalidRecord {
        entity: R::NAME,
        reason,
    };

    let Value::Object(incoming) = body else {
        return Err(invalid("expected a JSON object".to_string()));
    };

    let mut merged = match serde_json::to_value(R::default()) {
        Ok(Value::Object(map)) => map,
        Ok(_) => return Err(invalid("record is not an object".to_string())),
        Err(err) => return Err(invalid(err.to_string())),
    };

    for (key, value) in incoming {
        if key != "id" && !value.is_null() && merged.contains_key(&key) {
            merged.insert(key, value);
        }
    }

    serde_json::from_value(Value::Object(merged)).map_err(|err| invalid(err.to_string()))
}
