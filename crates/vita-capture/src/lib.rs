//! # vita-capture
//!
//! Mutation interception and audit capture for Vitalog.
//!
//! The pipeline: a caller runs a mutating operation through
//! [`MutationInterceptor::execute`] → on confirmed success the registered
//! [`ResolverSet`] computes entity key, label, and before/after snapshots →
//! the [`EnrichmentRegistry`] guarantees a non-empty entity label → the
//! finished record is handed to the [`RecordSink`]. Any capture failure is
//! logged and swallowed; the caller's result is never altered.
//!
//! All collaborators are explicit ports ([`IdentityProvider`],
//! [`EntityDirectory`], [`RecordSink`]), never ambient state.

pub mod enrichment;
pub mod error;
pub mod interceptor;
pub mod ports;
pub mod registry;
pub mod request;
pub mod resolver;

pub use enrichment::{EnrichmentRegistry, LabelProvider};
pub use error::CaptureError;
pub use interceptor::MutationInterceptor;
pub use ports::{EntityDirectory, IdentityProvider, RecordSink};
pub use registry::{DefaultResolverSet, ResolverRegistry};
pub use request::{CaptureRequest, MutationOutcome};
pub use resolver::{BoxFuture, ResolverSet};
