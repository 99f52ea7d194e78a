//! Common types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type EntityId = Uuid;

pub fn new_id() -> EntityId {
    Uuid::new_v4()
}

/// Runtime environment the server was started in.
///
/// The tenant resolver's default-tenant fallback is only reachable in
/// `Development`; a production build path never selects a tenant implicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnv {
    Development,
    Production,
}

impl RuntimeEnv {
    pub fn from_str(s: &str) -> Self {
        match s {
            "production" | "prod" => RuntimeEnv::Production,
            _ => RuntimeEnv::Development,
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, RuntimeEnv::Development)
    }
}
