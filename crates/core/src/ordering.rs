//! Slide-ordering validation.
//!
//! A reorder request must name exactly the set of active slides in the target
//! project: same cardinality, no duplicates, no foreign IDs. The check runs
//! before any write so a rejected request leaves every `sort_order` untouched.

use std::collections::HashSet;

use crate::error::CoreError;
use crate::types::DbId;

/// Validate that `submitted` is exactly the set of `active` slide IDs.
///
/// Position within `submitted` becomes the slide's new zero-based order, so
/// a successful validation guarantees the applied batch yields the contiguous
/// range `0..N-1` with no slide skipped or counted twice.
pub fn validate_reorder_set(submitted: &[DbId], active: &[DbId]) -> Result<(), CoreError> {
    if submitted.is_empty() {
        return Err(CoreError::Validation(
            "At least one slide ID is required".to_string(),
        ));
    }

    let submitted_set: HashSet<DbId> = submitted.iter().copied().collect();
    if submitted_set.len() != submitted.len() {
        return Err(CoreError::Validation(
            "Duplicate slide IDs in reorder request".to_string(),
        ));
    }

    let active_set: HashSet<DbId> = active.iter().copied().collect();
    if submitted_set != active_set {
        return Err(CoreError::Validation(
            "Some slides not found or do not belong to this project".to_string(),
        ));
    }

    Ok(())
}

/// Next order value for a freshly created slide: one past the current maximum,
/// or `0` for an empty project.
pub fn next_order(max_active_order: Option<i32>) -> i32 {
    max_active_order.map_or(0, |max| max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_permutation_passes() {
        assert!(validate_reorder_set(&[3, 1, 2], &[1, 2, 3]).is_ok());
    }

    #[test]
    fn test_single_slide_passes() {
        assert!(validate_reorder_set(&[7], &[7]).is_ok());
    }

    #[test]
    fn test_empty_submission_rejected() {
        let err = validate_reorder_set(&[], &[1]).unwrap_err();
        assert!(err.to_string().contains("At least one"));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = validate_reorder_set(&[1, 2, 2], &[1, 2, 3]).unwrap_err();
        assert!(err.to_string().contains("Duplicate"));
    }

    #[test]
    fn test_missing_slide_rejected() {
        assert!(validate_reorder_set(&[1, 2], &[1, 2, 3]).is_err());
    }

    #[test]
    fn test_foreign_slide_rejected() {
        assert!(validate_reorder_set(&[1, 2, 99], &[1, 2, 3]).is_err());
    }

    #[test]
    fn test_empty_set_against_empty_project_rejected() {
        // An empty project has nothing to reorder.
        assert!(validate_reorder_set(&[], &[]).is_err());
    }

    #[test]
    fn test_next_order_empty_project_is_zero() {
        assert_eq!(next_order(None), 0);
    }

    #[test]
    fn test_next_order_appends_after_max() {
        assert_eq!(next_order(Some(2)), 3);
    }
}
