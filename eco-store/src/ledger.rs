//! Redemption Ledger
//!
//! Append-only, user-scoped log of point-consuming events; the source of
//! truth for "points already spent". Persistence is read-modify-write over
//! the injected keyed store: load the full list, append in memory, write the
//! full list back.
//!
//! A payload that does not decode as a record list degrades to an empty list
//! with a warning. Earning and viewing points stay usable at the cost of
//! redemption-history integrity; a valid list, once loaded, is never
//! discarded.

use crate::error::StoreResult;
use crate::store::KeyedStore;
use chrono::{DateTime, Datelike, Utc};
use eco_core::types::{RedemptionKind, RedemptionRecord, UserKey};
use std::sync::Arc;
use tracing::warn;

/// Key namespace for ledger payloads
const LEDGER_KEY_PREFIX: &str = "eco_rewards";

/// Redemption ledger over a keyed store
pub struct RedemptionLedger {
    store: Arc<dyn KeyedStore>,
}

impl RedemptionLedger {
    pub fn new(store: Arc<dyn KeyedStore>) -> Self {
        Self { store }
    }

    fn key_for(user: &UserKey) -> String {
        format!("{LEDGER_KEY_PREFIX}:{}", user.as_str())
    }

    /// Load all records for a user, oldest first.
    ///
    /// Absent and malformed payloads both read as empty.
    pub async fn load(&self, user: &UserKey) -> StoreResult<Vec<RedemptionRecord>> {
        let Some(payload) = self.store.get_raw(&Self::key_for(user)).await? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str::<Vec<RedemptionRecord>>(&payload) {
            Ok(records) => Ok(records),
            Err(error) => {
                warn!(user = %user, error = %error, "Redemption ledger payload malformed, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    /// Append one record to a user's ledger.
    ///
    /// The only write operation: records are never updated or deleted.
    pub async fn append(&self, user: &UserKey, record: RedemptionRecord) -> StoreResult<()> {
        let mut records = self.load(user).await?;
        records.push(record);
        let payload = serde_json::to_string(&records)?;
        self.store.put_raw(&Self::key_for(user), payload).await
    }

    /// Total points ever redeemed by a user
    pub async fn redeemed_points(&self, user: &UserKey) -> StoreResult<i64> {
        Ok(self.load(user).await?.iter().map(|r| r.points).sum())
    }

    /// Wallet-conversion points consumed in the calendar month of `now`.
    ///
    /// Derived on demand, never stored as a counter. Months are compared in
    /// UTC; a record whose timestamp does not parse never matches.
    pub async fn wallet_points_in_month(
        &self,
        user: &UserKey,
        now: DateTime<Utc>,
    ) -> StoreResult<i64> {
        Ok(self
            .load(user)
            .await?
            .iter()
            .filter(|r| r.kind == RedemptionKind::Wallet)
            .filter(|r| same_utc_month(&r.timestamp_iso, now))
            .map(|r| r.points)
            .sum())
    }
}

fn same_utc_month(timestamp_iso: &str, now: DateTime<Utc>) -> bool {
    DateTime::parse_from_rfc3339(timestamp_iso)
        .map(|dt| {
            let dt = dt.with_timezone(&Utc);
            dt.year() == now.year() && dt.month() == now.month()
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use chrono::TimeZone;

    fn ledger() -> RedemptionLedger {
        RedemptionLedger::new(Arc::new(MemoryStore::new()))
    }

    fn user() -> UserKey {
        UserKey::new("user:42")
    }

    #[tokio::test]
    async fn test_fresh_user_has_empty_ledger() {
        let ledger = ledger();
        assert!(ledger.load(&user()).await.unwrap().is_empty());
        assert_eq!(ledger.redeemed_points(&user()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_append_then_load_round_trip() {
        let ledger = ledger();
        let record = RedemptionRecord::wallet(500, 5, Utc::now());

        ledger.append(&user(), record.clone()).await.unwrap();
        let records = ledger.load(&user()).await.unwrap();

        assert_eq!(records, vec![record]);
        assert_eq!(ledger.redeemed_points(&user()).await.unwrap(), 500);
    }

    #[tokio::test]
    async fn test_load_is_idempotent() {
        let ledger = ledger();
        ledger
            .append(&user(), RedemptionRecord::reward(600, "Car wash voucher", Utc::now()))
            .await
            .unwrap();

        let first = ledger.redeemed_points(&user()).await.unwrap();
        let second = ledger.redeemed_points(&user()).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_redeemed_points_sums_both_kinds() {
        let ledger = ledger();
        let now = Utc::now();
        ledger
            .append(&user(), RedemptionRecord::wallet(500, 5, now))
            .await
            .unwrap();
        ledger
            .append(&user(), RedemptionRecord::reward(300, "1 hour free parking", now))
            .await
            .unwrap();

        assert_eq!(ledger.redeemed_points(&user()).await.unwrap(), 800);
    }

    #[tokio::test]
    async fn test_malformed_payload_degrades_to_empty() {
        let store = Arc::new(MemoryStore::new());
        store
            .put_raw("eco_rewards:user:42", "{not json".to_string())
            .await
            .unwrap();
        let ledger = RedemptionLedger::new(store);

        assert!(ledger.load(&user()).await.unwrap().is_empty());
        assert_eq!(ledger.redeemed_points(&user()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_monthly_fold_only_counts_wallet_kind() {
        let ledger = ledger();
        let now = Utc::now();
        ledger
            .append(&user(), RedemptionRecord::wallet(500, 5, now))
            .await
            .unwrap();
        ledger
            .append(&user(), RedemptionRecord::reward(600, "Car wash voucher", now))
            .await
            .unwrap();

        assert_eq!(
            ledger.wallet_points_in_month(&user(), now).await.unwrap(),
            500
        );
    }

    #[tokio::test]
    async fn test_monthly_fold_excludes_other_months() {
        let ledger = ledger();
        let january = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
        let february = Utc.with_ymd_and_hms(2025, 2, 15, 12, 0, 0).unwrap();

        ledger
            .append(&user(), RedemptionRecord::wallet(500, 5, january))
            .await
            .unwrap();
        ledger
            .append(&user(), RedemptionRecord::wallet(700, 7, february))
            .await
            .unwrap();

        assert_eq!(
            ledger
                .wallet_points_in_month(&user(), february)
                .await
                .unwrap(),
            700
        );
    }

    #[tokio::test]
    async fn test_monthly_fold_skips_unparseable_timestamps() {
        let ledger = ledger();
        let now = Utc::now();
        let mut record = RedemptionRecord::wallet(500, 5, now);
        record.timestamp_iso = "sometime last week".to_string();

        ledger.append(&user(), record).await.unwrap();

        assert_eq!(ledger.wallet_points_in_month(&user(), now).await.unwrap(), 0);
        // the record still counts toward the lifetime fold
        assert_eq!(ledger.redeemed_points(&user()).await.unwrap(), 500);
    }

    #[tokio::test]
    async fn test_ledgers_are_user_scoped() {
        let ledger = ledger();
        let other = UserKey::new("user:43");
        ledger
            .append(&user(), RedemptionRecord::wallet(500, 5, Utc::now()))
            .await
            .unwrap();

        assert_eq!(ledger.redeemed_points(&other).await.unwrap(), 0);
    }
}
