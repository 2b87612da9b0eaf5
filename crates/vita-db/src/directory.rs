//! Read-only domain directory backing the enrichment fallback.
//!
//! Implements the `EntityDirectory` port over the portal's domain tables.
//! Fetch-by-id only; a vanished row is `Ok(None)`, never an error.

use std::sync::Arc;

use vita_capture::ports::{
    AppointmentRef, BloodBankRef, CampaignRef, DonationRef, EntityDirectory, MessageRef,
    NotificationRef, UserRef,
};
use vita_capture::resolver::BoxFuture;

use crate::VitaDb;
use crate::helpers::get_opt_string;

/// Read-only lookups over the domain tables.
pub struct DomainDirectory {
    db: Arc<VitaDb>,
}

impl DomainDirectory {
    #[must_use]
    pub const fn new(db: Arc<VitaDb>) -> Self {
        Self { db }
    }

    async fn one_string(&self, sql: &str, id: &str) -> anyhow::Result<Option<String>> {
        let mut rows = self.db.conn().query(sql, [id]).await?;
        match rows.next().await? {
            Some(row) => Ok(get_opt_string(&row, 0)?),
            None => Ok(None),
        }
    }
}

impl EntityDirectory for DomainDirectory {
    fn user<'a>(&'a self, id: &'a str) -> BoxFuture<'a, anyhow::Result<Option<UserRef>>> {
        Box::pin(async move {
            Ok(self
                .one_string("SELECT name FROM users WHERE id = ?1", id)
                .await?
                .map(|name| UserRef { name }))
        })
    }

    fn donation<'a>(&'a self, id: &'a str) -> BoxFuture<'a, anyhow::Result<Option<DonationRef>>> {
        Box::pin(async move {
            let mut rows = self
                .db
                .conn()
                .query(
                    "SELECT u.name, d.blood_type FROM donations d
                     LEFT JOIN users u ON u.id = d.donor_id WHERE d.id = ?1",
                    [id],
                )
                .await?;
            match rows.next().await? {
                Some(row) => Ok(Some(DonationRef {
                    donor_name: get_opt_string(&row, 0)?,
                    blood_type: row.get(1)?,
                })),
                None => Ok(None),
            }
        })
    }

    fn campaign<'a>(&'a self, id: &'a str) -> BoxFuture<'a, anyhow::Result<Option<CampaignRef>>> {
        Box::pin(async move {
            let mut rows = self
                .db
                .conn()
                .query(
                    "SELECT u.location FROM campaigns c
                     LEFT JOIN users u ON u.id = c.organizer_id WHERE c.id = ?1",
                    [id],
                )
                .await?;
            match rows.next().await? {
                Some(row) => Ok(Some(CampaignRef {
                    location: get_opt_string(&row, 0)?,
                })),
                None => Ok(None),
            }
        })
    }

    fn appointment<'a>(
        &'a self,
        id: &'a str,
    ) -> BoxFuture<'a, anyhow::Result<Option<AppointmentRef>>> {
        Box::pin(async move {
            let mut rows = self
                .db
                .conn()
                .query(
                    "SELECT u.name, a.scheduled_date FROM appointments a
                     LEFT JOIN users u ON u.id = a.donor_id WHERE a.id = ?1",
                    [id],
                )
                .await?;
            match rows.next().await? {
                Some(row) => Ok(Some(AppointmentRef {
                    donor_name: get_opt_string(&row, 0)?,
                    scheduled_date: row.get(1)?,
                })),
                None => Ok(None),
            }
        })
    }

    fn blood_bank<'a>(
        &'a self,
        id: &'a str,
    ) -> BoxFuture<'a, anyhow::Result<Option<BloodBankRef>>> {
        Box::pin(async move {
            Ok(self
                .one_string("SELECT name FROM blood_banks WHERE id = ?1", id)
                .await?
                .map(|name| BloodBankRef { name }))
        })
    }

    fn message<'a>(&'a self, id: &'a str) -> BoxFuture<'a, anyhow::Result<Option<MessageRef>>> {
        Box::pin(async move {
            let mut rows = self
                .db
                .conn()
                .query(
                    "SELECT m.subject, u.name FROM messages m
                     LEFT JOIN users u ON u.id = m.sender_id WHERE m.id = ?1",
                    [id],
                )
                .await?;
            match rows.next().await? {
                Some(row) => Ok(Some(MessageRef {
                    subject: row.get(0)?,
                    sender_name: get_opt_string(&row, 1)?,
                })),
                None => Ok(None),
            }
        })
    }

    fn notification<'a>(
        &'a self,
        id: &'a str,
    ) -> BoxFuture<'a, anyhow::Result<Option<NotificationRef>>> {
        Box::pin(async move {
            Ok(self
                .one_string("SELECT title FROM notifications WHERE id = ?1", id)
                .await?
                .map(|title| NotificationRef { title }))
        })
    }
}
