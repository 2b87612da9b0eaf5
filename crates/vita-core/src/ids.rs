//! ID prefix constants.
//!
//! Audit record ids are `"{prefix}-{8 hex chars}"`, generated by the store.

/// Prefix for audit record ids (`aud-a3f8b2c1`).
pub const PREFIX_AUDIT: &str = "aud";
