//! # Warranty Security
//!
//! Security utilities: password hashing and verification.
//!
//! The source platform this core descends from kept credentials in plaintext
//! inside its persisted registry. Here every credential is hashed with Argon2
//! before it touches storage, and verification happens against the hash only.

pub mod password;

pub use password::PasswordService;
