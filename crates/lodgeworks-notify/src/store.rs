//! Collaborator trait for persisting notification records.
//!
//! The engine decides *what* record to write; the embedding application owns
//! how. Mark-read and the expiry sweep are part of the contract so recipients
//! can manage their own records through the same store.

use crate::errors::StoreError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use lodgeworks_models::ids::{NotificationId, PrincipalId};
use lodgeworks_models::notifications::NotificationRecord;

/// Write access to per-recipient notification records.
#[async_trait]
pub trait NotificationStore: Send + Sync {
    /// Persist one record. Duplicate (event, recipient) pairs from retried
    /// dispatches are acceptable and must not be rejected.
    async fn insert(&self, record: NotificationRecord) -> Result<(), StoreError>;

    /// Mark a record read, scoped to its owning recipient. Idempotent.
    async fn mark_read(
        &self,
        id: NotificationId,
        recipient: PrincipalId,
        now: DateTime<Utc>,
    ) -> Result<(), StoreError>;

    /// Remove expired records; returns how many were removed.
    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<usize, StoreError>;
}

#[async_trait]
impl<S: NotificationStore + ?Sized> NotificationStore for std::sync::Arc<S> {
    async fn insert(&self, record: NotificationRecord) -> Result<(), StoreError> {
        (**self).insert(record).await
    }

    async fn mark_read(
        &self,
        id: NotificationId,
        recipient: PrincipalId,
        now: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        (**self).mark_read(id, recipient, now).await
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<usize, StoreError> {
        (**self).delete_expired(now).await
    }
}
