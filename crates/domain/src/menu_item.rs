//! A dish served at a station of a dining commons.

use serde::{Deserialize, Serialize};

use crate::id::MenuItemId;
use crate::resource::Resource;

/// A menu item served at a dining commons station.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiningCommonsMenuItem {
    pub name: String,
    /// Loose reference to a dining commons, e.g. `ortega`. Not a foreign key.
    pub dining_commons_code: String,
    pub station: String,
}

impl Resource for DiningCommonsMenuItem {
    const NAME: &'static str = "UCSBDiningCommonsMenuItem";
    type Id = MenuItemId;
}
