//! Shared in-memory collaborators for the notification integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use lodgeworks_models::ids::{NotificationId, PrincipalId};
use lodgeworks_models::notifications::{
    NotificationDraft, NotificationEvent, NotificationPriority, NotificationRecord, TargetSpec,
};
use lodgeworks_models::principal::{Grade, Office, Principal, RankTier};
use lodgeworks_notify::directory::PrincipalDirectory;
use lodgeworks_notify::errors::{DirectoryError, StoreError};
use lodgeworks_notify::store::NotificationStore;
use std::collections::BTreeSet;
use tokio::sync::Mutex;

/// Directory backed by a fixed principal list.
pub struct InMemoryDirectory {
    principals: Vec<Principal>,
}

impl InMemoryDirectory {
    pub fn new(principals: Vec<Principal>) -> Self {
        Self { principals }
    }
}

#[async_trait]
impl PrincipalDirectory for InMemoryDirectory {
    async fn active_principals(&self) -> Result<Vec<Principal>, DirectoryError> {
        Ok(self
            .principals
            .iter()
            .filter(|p| p.active)
            .cloned()
            .collect())
    }
}

/// Store backed by a mutex-guarded vector.
#[derive(Default)]
pub struct InMemoryStore {
    records: Mutex<Vec<NotificationRecord>>,
    /// Recipients whose inserts fail, for partial-failure tests.
    fail_for: BTreeSet<PrincipalId>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_for(recipients: impl IntoIterator<Item = PrincipalId>) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            fail_for: recipients.into_iter().collect(),
        }
    }

    pub async fn records(&self) -> Vec<NotificationRecord> {
        self.records.lock().await.clone()
    }

    pub async fn records_for(&self, recipient: PrincipalId) -> Vec<NotificationRecord> {
        self.records
            .lock()
            .await
            .iter()
            .filter(|r| r.recipient == recipient)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl NotificationStore for InMemoryStore {
    async fn insert(&self, record: NotificationRecord) -> Result<(), StoreError> {
        if self.fail_for.contains(&record.recipient) {
            return Err(StoreError(anyhow::anyhow!(
                "simulated write failure for {}",
                record.recipient
            )));
        }
        self.records.lock().await.push(record);
        Ok(())
    }

    async fn mark_read(
        &self,
        id: NotificationId,
        recipient: PrincipalId,
        now: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        let mut records = self.records.lock().await;
        match records
            .iter_mut()
            .find(|r| r.id == id && r.recipient == recipient)
        {
            Some(record) => {
                record.mark_read(now);
                Ok(())
            }
            None => Err(StoreError(anyhow::anyhow!("no such record for recipient"))),
        }
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<usize, StoreError> {
        let mut records = self.records.lock().await;
        let before = records.len();
        records.retain(|r| !r.is_expired(now));
        Ok(before - records.len())
    }
}

pub fn member(id: u128, grade: Grade) -> Principal {
    Principal::new(PrincipalId::from_u128(id), RankTier::General, grade)
}

pub fn officer(id: u128, grade: Grade, office: Office) -> Principal {
    member(id, grade).with_office(office)
}

pub fn admin(id: u128) -> Principal {
    Principal::new(PrincipalId::from_u128(id), RankTier::Administrator, Grade::Master)
}

pub fn inactive(mut principal: Principal) -> Principal {
    principal.active = false;
    principal
}

pub fn event(target: TargetSpec) -> NotificationEvent {
    NotificationEvent::from_draft(
        NotificationDraft {
            title: "Lodge meeting rescheduled".to_string(),
            body: "The next meeting moves to Thursday.".to_string(),
            category: "programs".to_string(),
            priority: NotificationPriority::Normal,
            link: None,
            expires_at: None,
            sender: None,
        },
        target,
    )
}

pub fn ids(list: &[u128]) -> BTreeSet<PrincipalId> {
    list.iter().map(|v| PrincipalId::from_u128(*v)).collect()
}
