//! Errors of the notification pipeline.

use lodgeworks_models::ids::PrincipalId;
use thiserror::Error;

/// The principal directory could not be read.
#[derive(Debug, Error)]
#[error("principal directory query failed: {0}")]
pub struct DirectoryError(#[from] pub anyhow::Error);

/// A single notification record could not be written.
#[derive(Debug, Error)]
#[error("notification write failed: {0}")]
pub struct StoreError(#[from] pub anyhow::Error);

/// Some per-recipient writes of a dispatch failed.
///
/// Records already created stay; the caller may retry the failed subset —
/// duplicate records across retries are tolerated by design.
#[derive(Debug, Error)]
#[error("dispatched {created} of {requested} notifications; {} recipients failed", .failed.len())]
pub struct PartialDispatchFailure {
    pub requested: usize,
    pub created: usize,
    pub failed: Vec<PrincipalId>,
}
