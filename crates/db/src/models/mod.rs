//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for partial updates
//!
//! JSON field names are camelCase on the wire (`isActive`, `categoryId`).
//! Nullable columns in update DTOs are `Option<Option<T>>`: an absent key
//! leaves the column alone, an explicit `null` clears it.

use serde::{Deserialize, Deserializer};

pub mod category;
pub mod product;

/// Deserialize a present-but-possibly-null field as `Some(inner)`.
///
/// Pair with `#[serde(default)]` so an absent key stays `None`; plain serde
/// would otherwise collapse `null` and absent into the same `None`.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
