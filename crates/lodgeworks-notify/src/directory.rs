//! Collaborator trait for enumerating active principals.
//!
//! The engine never owns member storage; whatever store the embedding
//! application uses (SQL, in-memory, remote service) implements this trait
//! and the target resolver filters the snapshot it returns. "Active" is a
//! boolean the engine treats opaquely.

use crate::errors::DirectoryError;
use async_trait::async_trait;
use lodgeworks_models::principal::Principal;

/// Read access to the active-principal population.
#[async_trait]
pub trait PrincipalDirectory: Send + Sync {
    /// All currently-active principals.
    ///
    /// The resolver filters this snapshot in application code; cohort
    /// resolution is deterministic for a fixed snapshot.
    async fn active_principals(&self) -> Result<Vec<Principal>, DirectoryError>;
}

#[async_trait]
impl<D: PrincipalDirectory + ?Sized> PrincipalDirectory for std::sync::Arc<D> {
    async fn active_principals(&self) -> Result<Vec<Principal>, DirectoryError> {
        (**self).active_principals().await
    }
}
