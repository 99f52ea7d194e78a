// ============================================================================
// Warranty Core - Session Entity
// File: crates/warranty-core/src/domain/session.rs
// Description: Principal snapshot with fixed absolute expiry
// ============================================================================

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::principal::Principal;

/// An authenticated session.
///
/// Expiry is fixed at issue time and never extended by activity. Validity
/// is evaluated lazily wherever the session is read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub principal: Principal,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn issue(principal: Principal, ttl: Duration) -> Self {
        Self {
            principal,
            expires_at: Utc::now() + ttl,
        }
    }

    /// A session is valid only while the current time is before expiry.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}
