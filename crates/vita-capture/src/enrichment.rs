//! Entity enrichment fallback.
//!
//! Guarantees the non-empty `entity_name` invariant when no label resolver is
//! configured or it yields a blank label. A registry maps each entity type to
//! one lookup strategy over the read-only [`EntityDirectory`]; unregistered
//! types, vanished rows, lookup errors, and timeouts all degrade to the
//! synthesized placeholder `"{EntityType label} #{id|Unknown}"`.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use vita_config::CaptureConfig;
use vita_core::enums::EntityType;
use vita_core::key::EntityKey;

use crate::ports::EntityDirectory;
use crate::resolver::BoxFuture;

/// One per-entity-type lookup strategy.
///
/// `resolve` returns `Ok(None)` when the lookup found nothing usable; the
/// registry then degrades to the placeholder. Errors are treated the same
/// way, never surfaced.
pub trait LabelProvider: Send + Sync {
    fn resolve<'a>(&'a self, key: &'a EntityKey) -> BoxFuture<'a, anyhow::Result<Option<String>>>;
}

/// Synthesize the terminal placeholder label.
#[must_use]
pub fn placeholder(entity_type: EntityType, key: &EntityKey) -> String {
    format!("{} #{}", entity_type.label(), key.display_fragment())
}

/// Registry of enrichment strategies keyed by entity type.
pub struct EnrichmentRegistry {
    providers: HashMap<EntityType, Arc<dyn LabelProvider>>,
    lookup_timeout: Duration,
}

impl EnrichmentRegistry {
    /// An empty registry: every entity type degrades to the placeholder.
    #[must_use]
    pub fn new(lookup_timeout: Duration) -> Self {
        Self {
            providers: HashMap::new(),
            lookup_timeout,
        }
    }

    /// Register (or replace) the strategy for one entity type.
    pub fn register(&mut self, entity_type: EntityType, provider: Arc<dyn LabelProvider>) {
        self.providers.insert(entity_type, provider);
    }

    /// Build a registry with the built-in strategy for every entity type,
    /// all backed by the given directory.
    #[must_use]
    pub fn with_defaults(directory: Arc<dyn EntityDirectory>, config: &CaptureConfig) -> Self {
        let mut registry = Self::new(config.lookup_timeout());
        registry.register(EntityType::User, Arc::new(UserLabel(Arc::clone(&directory))));
        registry.register(
            EntityType::Donation,
            Arc::new(DonationLabel(Arc::clone(&directory))),
        );
        registry.register(
            EntityType::Campaign,
            Arc::new(CampaignLabel(Arc::clone(&directory))),
        );
        registry.register(
            EntityType::Appointment,
            Arc::new(AppointmentLabel(Arc::clone(&directory))),
        );
        registry.register(
            EntityType::Inventory,
            Arc::new(InventoryLabel(Arc::clone(&directory))),
        );
        registry.register(
            EntityType::Message,
            Arc::new(MessageLabel(Arc::clone(&directory))),
        );
        registry.register(
            EntityType::BloodBank,
            Arc::new(BloodBankLabel(Arc::clone(&directory))),
        );
        registry.register(
            EntityType::Notification,
            Arc::new(NotificationLabel(directory)),
        );
        registry
    }

    /// Resolve a guaranteed non-empty entity label.
    ///
    /// Tries the registered strategy under the configured timeout; every
    /// degraded path lands on the placeholder.
    pub async fn entity_name(&self, entity_type: EntityType, key: &EntityKey) -> String {
        let Some(provider) = self.providers.get(&entity_type) else {
            return placeholder(entity_type, key);
        };

        match tokio::time::timeout(self.lookup_timeout, provider.resolve(key)).await {
            Ok(Ok(Some(label))) if !label.trim().is_empty() => label,
            Ok(Ok(_)) => placeholder(entity_type, key),
            Ok(Err(e)) => {
                tracing::warn!(entity = %entity_type, key = %key, error = %e, "enrichment lookup failed");
                placeholder(entity_type, key)
            }
            Err(_) => {
                tracing::warn!(entity = %entity_type, key = %key, "enrichment lookup timed out");
                placeholder(entity_type, key)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Built-in strategies
// ---------------------------------------------------------------------------

fn simple_id(key: &EntityKey) -> Option<String> {
    if key.is_unknown() {
        None
    } else {
        Some(key.storage_key())
    }
}

struct UserLabel(Arc<dyn EntityDirectory>);

impl LabelProvider for UserLabel {
    fn resolve<'a>(&'a self, key: &'a EntityKey) -> BoxFuture<'a, anyhow::Result<Option<String>>> {
        Box::pin(async move {
            let Some(id) = simple_id(key) else {
                return Ok(None);
            };
            Ok(self.0.user(&id).await?.map(|user| user.name))
        })
    }
}

struct DonationLabel(Arc<dyn EntityDirectory>);

impl LabelProvider for DonationLabel {
    fn resolve<'a>(&'a self, key: &'a EntityKey) -> BoxFuture<'a, anyhow::Result<Option<String>>> {
        Box::pin(async move {
            let Some(id) = simple_id(key) else {
                return Ok(None);
            };
            Ok(self.0.donation(&id).await?.map(|donation| {
                donation.donor_name.map_or_else(
                    || format!("Donation ({})", donation.blood_type),
                    |donor| format!("{donor} ({})", donation.blood_type),
                )
            }))
        })
    }
}

struct CampaignLabel(Arc<dyn EntityDirectory>);

impl LabelProvider for CampaignLabel {
    fn resolve<'a>(&'a self, key: &'a EntityKey) -> BoxFuture<'a, anyhow::Result<Option<String>>> {
        Box::pin(async move {
            let Some(id) = simple_id(key) else {
                return Ok(None);
            };
            Ok(self.0.campaign(&id).await?.and_then(|campaign| campaign.location))
        })
    }
}

struct AppointmentLabel(Arc<dyn EntityDirectory>);

impl LabelProvider for AppointmentLabel {
    fn resolve<'a>(&'a self, key: &'a EntityKey) -> BoxFuture<'a, anyhow::Result<Option<String>>> {
        Box::pin(async move {
            let Some(id) = simple_id(key) else {
                return Ok(None);
            };
            Ok(self.0.appointment(&id).await?.map(|appt| {
                appt.donor_name.map_or_else(
                    || format!("Appointment on {}", appt.scheduled_date),
                    |donor| format!("{donor} on {}", appt.scheduled_date),
                )
            }))
        })
    }
}

/// Inventory rows are addressed by a composite `{bank_id}_{blood_type}` key;
/// the label is composed from the bank's name and the blood type.
struct InventoryLabel(Arc<dyn EntityDirectory>);

impl LabelProvider for InventoryLabel {
    fn resolve<'a>(&'a self, key: &'a EntityKey) -> BoxFuture<'a, anyhow::Result<Option<String>>> {
        Box::pin(async move {
            let storage = key.storage_key();
            let Some((bank_id, blood_type)) = EntityKey::split_composite(&storage) else {
                return Ok(None);
            };
            Ok(self
                .0
                .blood_bank(bank_id)
                .await?
                .map(|bank| format!("{} - {blood_type}", bank.name)))
        })
    }
}

struct MessageLabel(Arc<dyn EntityDirectory>);

impl LabelProvider for MessageLabel {
    fn resolve<'a>(&'a self, key: &'a EntityKey) -> BoxFuture<'a, anyhow::Result<Option<String>>> {
        Box::pin(async move {
            let Some(id) = simple_id(key) else {
                return Ok(None);
            };
            Ok(self.0.message(&id).await?.map(|message| {
                message.sender_name.map_or_else(
                    || message.subject.clone(),
                    |sender| format!("{} (from {sender})", message.subject),
                )
            }))
        })
    }
}

struct BloodBankLabel(Arc<dyn EntityDirectory>);

impl LabelProvider for BloodBankLabel {
    fn resolve<'a>(&'a self, key: &'a EntityKey) -> BoxFuture<'a, anyhow::Result<Option<String>>> {
        Box::pin(async move {
            let Some(id) = simple_id(key) else {
                return Ok(None);
            };
            Ok(self.0.blood_bank(&id).await?.map(|bank| bank.name))
        })
    }
}

struct NotificationLabel(Arc<dyn EntityDirectory>);

impl LabelProvider for NotificationLabel {
    fn resolve<'a>(&'a self, key: &'a EntityKey) -> BoxFuture<'a, anyhow::Result<Option<String>>> {
        Box::pin(async move {
            let Some(id) = simple_id(key) else {
                return Ok(None);
            };
            Ok(self.0.notification(&id).await?.map(|n| n.title))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::ports::{
        AppointmentRef, BloodBankRef, CampaignRef, DonationRef, MessageRef, NotificationRef,
        UserRef,
    };

    /// Directory stub with one blood bank and one message; everything else
    /// is absent.
    struct StubDirectory;

    impl EntityDirectory for StubDirectory {
        fn user<'a>(&'a self, _id: &'a str) -> BoxFuture<'a, anyhow::Result<Option<UserRef>>> {
            Box::pin(async { Ok(None) })
        }
        fn donation<'a>(
            &'a self,
            _id: &'a str,
        ) -> BoxFuture<'a, anyhow::Result<Option<DonationRef>>> {
            Box::pin(async { Ok(None) })
        }
        fn campaign<'a>(
            &'a self,
            _id: &'a str,
        ) -> BoxFuture<'a, anyhow::Result<Option<CampaignRef>>> {
            Box::pin(async { Ok(None) })
        }
        fn appointment<'a>(
            &'a self,
            _id: &'a str,
        ) -> BoxFuture<'a, anyhow::Result<Option<AppointmentRef>>> {
            Box::pin(async { Ok(None) })
        }
        fn blood_bank<'a>(
            &'a self,
            id: &'a str,
        ) -> BoxFuture<'a, anyhow::Result<Option<BloodBankRef>>> {
            Box::pin(async move {
                Ok((id == "5").then(|| BloodBankRef {
                    name: "Central Blood Bank".to_string(),
                }))
            })
        }
        fn message<'a>(&'a self, id: &'a str) -> BoxFuture<'a, anyhow::Result<Option<MessageRef>>> {
            Box::pin(async move {
                Ok((id == "7").then(|| MessageRef {
                    subject: "Stock request".to_string(),
                    sender_name: Some("Dana".to_string()),
                }))
            })
        }
        fn notification<'a>(
            &'a self,
            _id: &'a str,
        ) -> BoxFuture<'a, anyhow::Result<Option<NotificationRef>>> {
            Box::pin(async { Ok(None) })
        }
    }

    fn registry() -> EnrichmentRegistry {
        EnrichmentRegistry::with_defaults(Arc::new(StubDirectory), &CaptureConfig::default())
    }

    #[rstest]
    #[case(EntityType::Message, EntityKey::simple(42), "Message #42")]
    #[case(EntityType::BloodBank, EntityKey::Unknown, "Blood Bank #Unknown")]
    #[case(EntityType::Inventory, EntityKey::composite(9, "AB-"), "Inventory #9_AB-")]
    fn placeholder_format(
        #[case] entity_type: EntityType,
        #[case] key: EntityKey,
        #[case] expected: &str,
    ) {
        assert_eq!(placeholder(entity_type, &key), expected);
    }

    #[tokio::test]
    async fn inventory_label_composes_bank_and_blood_type() {
        let name = registry()
            .entity_name(EntityType::Inventory, &EntityKey::composite(5, "O+"))
            .await;
        assert_eq!(name, "Central Blood Bank - O+");
    }

    #[tokio::test]
    async fn inventory_label_degrades_when_bank_missing() {
        let name = registry()
            .entity_name(EntityType::Inventory, &EntityKey::composite(99, "O+"))
            .await;
        assert_eq!(name, "Inventory #99_O+");
    }

    #[tokio::test]
    async fn message_label_includes_sender() {
        let name = registry()
            .entity_name(EntityType::Message, &EntityKey::simple(7))
            .await;
        assert_eq!(name, "Stock request (from Dana)");
    }

    #[tokio::test]
    async fn vanished_message_degrades_to_placeholder() {
        let name = registry()
            .entity_name(EntityType::Message, &EntityKey::simple(42))
            .await;
        assert_eq!(name, "Message #42");
    }

    #[tokio::test]
    async fn unregistered_type_uses_placeholder() {
        let registry = EnrichmentRegistry::new(Duration::from_millis(100));
        let name = registry
            .entity_name(EntityType::User, &EntityKey::simple(3))
            .await;
        assert_eq!(name, "User #3");
    }

    #[tokio::test]
    async fn erroring_lookup_degrades_to_placeholder() {
        struct Failing;
        impl LabelProvider for Failing {
            fn resolve<'a>(
                &'a self,
                _key: &'a EntityKey,
            ) -> BoxFuture<'a, anyhow::Result<Option<String>>> {
                Box::pin(async { Err(anyhow::anyhow!("store unavailable")) })
            }
        }

        let mut registry = EnrichmentRegistry::new(Duration::from_millis(100));
        registry.register(EntityType::User, Arc::new(Failing));
        let name = registry
            .entity_name(EntityType::User, &EntityKey::simple(3))
            .await;
        assert_eq!(name, "User #3");
    }

    #[tokio::test]
    async fn slow_lookup_is_bounded_by_timeout() {
        struct Slow;
        impl LabelProvider for Slow {
            fn resolve<'a>(
                &'a self,
                _key: &'a EntityKey,
            ) -> BoxFuture<'a, anyhow::Result<Option<String>>> {
                Box::pin(async {
                    tokio::time::sleep(Duration::from_secs(30)).await;
                    Ok(Some("too late".to_string()))
                })
            }
        }

        let mut registry = EnrichmentRegistry::new(Duration::from_millis(20));
        registry.register(EntityType::User, Arc::new(Slow));
        let name = registry
            .entity_name(EntityType::User, &EntityKey::simple(8))
            .await;
        assert_eq!(name, "User #8");
    }

    #[tokio::test]
    async fn blank_label_counts_as_missing() {
        struct Blank;
        impl LabelProvider for Blank {
            fn resolve<'a>(
                &'a self,
                _key: &'a EntityKey,
            ) -> BoxFuture<'a, anyhow::Result<Option<String>>> {
                Box::pin(async { Ok(Some("   ".to_string())) })
            }
        }

        let mut registry = EnrichmentRegistry::new(Duration::from_millis(100));
        registry.register(EntityType::User, Arc::new(Blank));
        let name = registry
            .entity_name(EntityType::User, &EntityKey::simple(11))
            .await;
        assert_eq!(name, "User #11");
    }
}
