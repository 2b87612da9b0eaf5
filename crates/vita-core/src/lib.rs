//! # vita-core
//!
//! Core types and ID helpers for Vitalog.
//!
//! This crate provides the foundational types shared across all Vitalog crates:
//! - The `AuditRecord` entity and its write-side counterpart
//! - Action and entity-type taxonomies
//! - Structured entity keys (simple and composite)
//! - Actor identity
//! - Query/stats response types

pub mod entities;
pub mod enums;
pub mod ids;
pub mod key;
pub mod responses;
