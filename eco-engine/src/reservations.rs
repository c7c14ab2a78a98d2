//! Reservation Source Collaborator
//!
//! Read-only view over the user's reservation history, supplied by the
//! booking side of the product. No pagination contract is assumed here.

use async_trait::async_trait;
use eco_core::{ReservationFact, UserKey};
use thiserror::Error;

/// Reservation source failure
#[derive(Debug, Error)]
#[error("{reason}")]
pub struct ReservationSourceError {
    pub reason: String,
}

impl ReservationSourceError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// External reservation history source
#[async_trait]
pub trait ReservationSource: Send + Sync {
    /// Fetch the user's trips, oldest-known order preserved
    async fn facts_for(&self, user: &UserKey) -> Result<Vec<ReservationFact>, ReservationSourceError>;
}
