//! Notification fan-out: one record per resolved recipient.
//!
//! Delivery is at-least-once. Per-recipient writes are independent and run
//! concurrently with bounded parallelism; a failed write never rolls back a
//! sibling's record. Retrying a partially-failed dispatch may duplicate
//! records for recipients that already succeeded, which the system tolerates.

use crate::errors::PartialDispatchFailure;
use crate::store::NotificationStore;
use chrono::Utc;
use futures::{StreamExt, stream};
use lodgeworks_models::ids::PrincipalId;
use lodgeworks_models::notifications::{NotificationEvent, NotificationRecord};
use std::collections::BTreeSet;
use tracing::{instrument, warn};

/// Default bound on concurrent per-recipient writes.
pub const DEFAULT_WRITE_CONCURRENCY: usize = 16;

/// Outcome of one dispatch call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchReport {
    /// Recipients the caller asked for.
    pub requested: usize,
    /// Records actually created.
    pub created: usize,
    /// Recipients whose write failed; safe to retry.
    pub failed: Vec<PrincipalId>,
}

/// Materializes per-recipient notification records through a store.
pub struct FanoutService<S> {
    store: S,
    concurrency: usize,
}

impl<S: NotificationStore> FanoutService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            concurrency: DEFAULT_WRITE_CONCURRENCY,
        }
    }

    /// Override the write-concurrency bound.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Create one record per recipient, carrying a snapshot of the event
    /// content.
    ///
    /// Returns `Ok` when every write succeeded and
    /// [`PartialDispatchFailure`] otherwise; in both cases every successful
    /// write stays. The input set already guarantees no recipient appears
    /// twice within one call.
    #[instrument(skip(self, event, recipients), fields(event = %event.id, requested = recipients.len()))]
    pub async fn dispatch(
        &self,
        event: &NotificationEvent,
        recipients: &BTreeSet<PrincipalId>,
    ) -> Result<DispatchReport, PartialDispatchFailure> {
        let now = Utc::now();
        let requested = recipients.len();

        let results: Vec<(PrincipalId, bool)> = stream::iter(recipients.iter().copied())
            .map(|recipient| {
                let record = NotificationRecord::for_recipient(event, recipient, now);
                async move {
                    match self.store.insert(record).await {
                        Ok(()) => (recipient, true),
                        Err(err) => {
                            warn!(%recipient, error = %err, "notification write failed");
                            (recipient, false)
                        }
                    }
                }
            })
            .buffer_unordered(self.concurrency)
            .collect()
            .await;

        let failed: Vec<PrincipalId> = results
            .iter()
            .filter(|(_, ok)| !ok)
            .map(|(id, _)| *id)
            .collect();
        let created = requested - failed.len();

        if failed.is_empty() {
            Ok(DispatchReport {
                requested,
                created,
                failed,
            })
        } else {
            Err(PartialDispatchFailure {
                requested,
                created,
                failed,
            })
        }
    }
}
