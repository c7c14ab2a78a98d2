//! Eco-Rewards Engine - Redemption Orchestration Layer
//!
//! Sits between the pure domain core and the outside world:
//!
//! - pulls trip history from the [`ReservationSource`] collaborator
//! - derives the account view on demand (points, tier, monthly totals)
//! - runs conversions through the guard, the external wallet, and the
//!   append-only ledger, strictly in that order
//!
//! Failure semantics: a rejected conversion makes no external call and
//! writes nothing; a failed wallet top-up leaves the ledger untouched; a
//! ledger failure after a successful top-up is reported as
//! [`EngineError::LedgerBehindWallet`] rather than silently swallowed.

mod coordinator;
mod error;
mod reservations;
mod wallet;

pub use coordinator::{AccountSnapshot, ConversionOutcome, RewardsCoordinator};
pub use error::{EngineError, EngineResult};
pub use reservations::{ReservationSource, ReservationSourceError};
pub use wallet::{WalletBalance, WalletError, WalletService};
