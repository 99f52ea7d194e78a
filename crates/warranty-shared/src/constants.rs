//! Application-wide constants

/// Platform name used in page titles and branding.
pub const PLATFORM_NAME: &str = "WarrantyHub";

/// Path the route gate redirects unauthenticated requests to.
pub const LOGIN_PATH: &str = "/login";

/// Sessions expire this many hours after creation, fixed at issue time.
pub const SESSION_TTL_HOURS: i64 = 24;

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 128;
