//! HTTP handlers

pub mod categories;
pub mod health;
pub mod items;

use uuid::Uuid;

use catalog_shared::utils::parse_uuid;

use crate::error::ApiError;

/// Path segments that are not UUIDs can never name a stored record.
pub(crate) fn path_id(raw: &str, what: &str) -> Result<Uuid, ApiError> {
    parse_uuid(raw).ok_or_else(|| ApiError::NotFound(format!("{} {}", what, raw)))
}
