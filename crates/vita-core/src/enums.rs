//! Action and entity-type taxonomies for the audit log.
//!
//! `AuditAction` serializes in `SCREAMING_SNAKE_CASE` (the vocabulary used by
//! the portal's API consumers); `EntityType` serializes in `snake_case` like
//! every other stored enum. Both are closed sets; adding a variant forces
//! updating every exhaustive match that dispatches on them.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// AuditAction
// ---------------------------------------------------------------------------

/// Fixed vocabulary of mutating administrative actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditAction {
    CreateUser,
    UpdateUser,
    DeleteUser,
    ChangeUserStatus,
    CreateDonation,
    UpdateDonation,
    DeleteDonation,
    ChangeDonationStatus,
    CreateCampaign,
    UpdateCampaign,
    DeleteCampaign,
    CreateAppointment,
    UpdateAppointment,
    ChangeAppointmentStatus,
    UpdateInventory,
    DeleteMessage,
    SendNotification,
    CreateBloodBank,
    UpdateBloodBank,
    DeleteBloodBank,
}

impl AuditAction {
    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreateUser => "CREATE_USER",
            Self::UpdateUser => "UPDATE_USER",
            Self::DeleteUser => "DELETE_USER",
            Self::ChangeUserStatus => "CHANGE_USER_STATUS",
            Self::CreateDonation => "CREATE_DONATION",
            Self::UpdateDonation => "UPDATE_DONATION",
            Self::DeleteDonation => "DELETE_DONATION",
            Self::ChangeDonationStatus => "CHANGE_DONATION_STATUS",
            Self::CreateCampaign => "CREATE_CAMPAIGN",
            Self::UpdateCampaign => "UPDATE_CAMPAIGN",
            Self::DeleteCampaign => "DELETE_CAMPAIGN",
            Self::CreateAppointment => "CREATE_APPOINTMENT",
            Self::UpdateAppointment => "UPDATE_APPOINTMENT",
            Self::ChangeAppointmentStatus => "CHANGE_APPOINTMENT_STATUS",
            Self::UpdateInventory => "UPDATE_INVENTORY",
            Self::DeleteMessage => "DELETE_MESSAGE",
            Self::SendNotification => "SEND_NOTIFICATION",
            Self::CreateBloodBank => "CREATE_BLOOD_BANK",
            Self::UpdateBloodBank => "UPDATE_BLOOD_BANK",
            Self::DeleteBloodBank => "DELETE_BLOOD_BANK",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EntityType
// ---------------------------------------------------------------------------

/// Closed set of domain categories an action can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    User,
    Donation,
    Campaign,
    Appointment,
    Inventory,
    Message,
    BloodBank,
    Notification,
}

impl EntityType {
    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Donation => "donation",
            Self::Campaign => "campaign",
            Self::Appointment => "appointment",
            Self::Inventory => "inventory",
            Self::Message => "message",
            Self::BloodBank => "blood_bank",
            Self::Notification => "notification",
        }
    }

    /// Human-readable label used when synthesizing placeholder entity names.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Donation => "Donation",
            Self::Campaign => "Campaign",
            Self::Appointment => "Appointment",
            Self::Inventory => "Inventory",
            Self::Message => "Message",
            Self::BloodBank => "Blood Bank",
            Self::Notification => "Notification",
        }
    }

    /// All variants, in taxonomy order.
    pub const ALL: &'static [Self] = &[
        Self::User,
        Self::Donation,
        Self::Campaign,
        Self::Appointment,
        Self::Inventory,
        Self::Message,
        Self::BloodBank,
        Self::Notification,
    ];
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
