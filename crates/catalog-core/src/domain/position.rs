//! Display position assignment
//!
//! Categories are ordered per tenant and items per category. A new row without
//! an explicit position is appended after the current maximum of its scope;
//! gaps left by deletions are never reused.
//!
//! The maximum is read before the insert, outside of any lock, so two
//! concurrent inserts into the same scope may receive the same position.
//! Ordering falls back to creation time in that case.

/// Resolves the position for a new category or item.
///
/// A requested position of `0` counts as unspecified, like an absent one.
pub fn resolve_position(requested: Option<i32>, current_max: Option<i32>) -> i32 {
    match requested {
        Some(position) if position != 0 => position,
        _ => current_max.unwrap_or(0).saturating_add(1),
    }
}
