//! Basic Identifier Types
//!
//! Naming conventions:
//! - `_key` suffix: external scoping keys supplied by the caller
//! - `_id` suffix: primary key identifiers
//!
//! Newtype pattern keeps the identifiers non-interchangeable.

use serde::{Deserialize, Serialize};

/// User scoping key
///
/// Everything the rewards engine persists is scoped by this key; two users
/// never share ledger state.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserKey(pub String);

impl UserKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reward catalog entry ID
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RewardId(pub String);

impl RewardId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RewardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_key_creation() {
        let key = UserKey::new("user:42");
        assert_eq!(key.as_str(), "user:42");
        assert_eq!(key.to_string(), "user:42");
    }

    #[test]
    fn test_reward_id_distinct_values() {
        assert_ne!(RewardId::new("free-hour"), RewardId::new("car-wash"));
    }
}
