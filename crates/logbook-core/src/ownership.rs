// ABOUTME: Ownership guard applied before every read, update, and delete
// ABOUTME: Compares the caller id against the owner id stored on the fetched entity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logbook Contributors

use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// Check that `caller_id` owns a resource whose stored owner is `resource_owner_id`
///
/// `resource_owner_id` must come from the entity as loaded from storage, never
/// from the request.
///
/// # Errors
///
/// Returns a `PermissionDenied` error when the ids differ. Callers propagate it
/// and must not apply any part of the operation. Recording the rejection is
/// left to the caller.
pub fn check_ownership(caller_id: Uuid, resource_owner_id: Uuid) -> AppResult<bool> {
    if caller_id == resource_owner_id {
        return Ok(true);
    }

    Err(AppError::unauthorized_access())
}
