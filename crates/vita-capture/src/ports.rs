//! Ports the capture pipeline consumes.
//!
//! All collaborators are injected through these traits: the identity layer,
//! the append-only record store, and the read-only domain directory the
//! enrichment fallback queries. `vita-db` implements `RecordSink` and
//! `EntityDirectory`; the portal's auth layer implements `IdentityProvider`.

use vita_core::entities::{Actor, NewAuditRecord};

use crate::resolver::BoxFuture;

/// Resolves the authenticated operator for the current operation.
///
/// Returning `None` skips capture entirely, so no anonymous records are written.
pub trait IdentityProvider: Send + Sync {
    fn current(&self) -> Option<Actor>;
}

/// Append-only destination for finished audit records.
pub trait RecordSink: Send + Sync {
    fn append(&self, record: NewAuditRecord) -> BoxFuture<'_, anyhow::Result<()>>;
}

// ---------------------------------------------------------------------------
// Domain directory
// ---------------------------------------------------------------------------

/// Minimal projection of a user row.
#[derive(Debug, Clone)]
pub struct UserRef {
    pub name: String,
}

/// Minimal projection of a donation row.
#[derive(Debug, Clone)]
pub struct DonationRef {
    pub donor_name: Option<String>,
    pub blood_type: String,
}

/// Minimal projection of a campaign row.
#[derive(Debug, Clone)]
pub struct CampaignRef {
    /// The organizer's location, used as the campaign's fallback label.
    pub location: Option<String>,
}

/// Minimal projection of an appointment row.
#[derive(Debug, Clone)]
pub struct AppointmentRef {
    pub donor_name: Option<String>,
    /// `YYYY-MM-DD`.
    pub scheduled_date: String,
}

/// Minimal projection of a blood bank row.
#[derive(Debug, Clone)]
pub struct BloodBankRef {
    pub name: String,
}

/// Minimal projection of a message row.
#[derive(Debug, Clone)]
pub struct MessageRef {
    pub subject: String,
    pub sender_name: Option<String>,
}

/// Minimal projection of a notification row.
#[derive(Debug, Clone)]
pub struct NotificationRef {
    pub title: String,
}

/// Read-only fetch-by-id access to the portal's domain stores.
///
/// Used solely by the enrichment fallback chain; every method returns
/// `Ok(None)` when the row has vanished by capture time.
pub trait EntityDirectory: Send + Sync {
    fn user<'a>(&'a self, id: &'a str) -> BoxFuture<'a, anyhow::Result<Option<UserRef>>>;
    fn donation<'a>(&'a self, id: &'a str) -> BoxFuture<'a, anyhow::Result<Option<DonationRef>>>;
    fn campaign<'a>(&'a self, id: &'a str) -> BoxFuture<'a, anyhow::Result<Option<CampaignRef>>>;
    fn appointment<'a>(
        &'a self,
        id: &'a str,
    ) -> BoxFuture<'a, anyhow::Result<Option<AppointmentRef>>>;
    fn blood_bank<'a>(
        &'a self,
        id: &'a str,
    ) -> BoxFuture<'a, anyhow::Result<Option<BloodBankRef>>>;
    fn message<'a>(&'a self, id: &'a str) -> BoxFuture<'a, anyhow::Result<Option<MessageRef>>>;
    fn notification<'a>(
        &'a self,
        id: &'a str,
    ) -> BoxFuture<'a, anyhow::Result<Option<NotificationRef>>>;
}

/// A fixed identity, for tests and single-operator contexts.
pub struct StaticIdentity(pub Option<Actor>);

impl IdentityProvider for StaticIdentity {
    fn current(&self) -> Option<Actor> {
        self.0.clone()
    }
}
