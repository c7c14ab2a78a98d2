//! Keyed Store Trait
//!
//! The ledger persists through this capability: a user-keyed store holding
//! one JSON payload per key. A server deployment backs it with a database
//! row, a local deployment with a file; the ledger contract (append-only,
//! read-modify-write, per-user isolation) is the same either way.
//!
//! Payloads cross the trait as raw strings on purpose: a malformed payload
//! must reach the ledger layer, which degrades it deliberately instead of a
//! backend hiding the problem.

use crate::error::StoreResult;
use async_trait::async_trait;

/// Keyed persistent store
#[async_trait]
pub trait KeyedStore: Send + Sync {
    /// Fetch the payload stored under a key, if any
    async fn get_raw(&self, key: &str) -> StoreResult<Option<String>>;

    /// Replace the payload stored under a key
    async fn put_raw(&self, key: &str, payload: String) -> StoreResult<()>;
}
