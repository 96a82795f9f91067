//! dns-planner core library
//!
//! Declares DNS record sets into a zone plan and opportunistically resolves a
//! hostname to populate the declared value:
//!
//! - Record set construct ([`RecordSet`]) over the
//!   [`ZoneBackend`](dns_planner_backend::ZoneBackend) seam
//! - Planner service ([`ZonePlanner`]) with single, settled, and batch
//!   declaration
//! - Hostname resolution seam ([`HostResolver`]) with a hickory-backed
//!   default ([`SystemResolver`])
//! - Service hosted-zone naming table ([`service_zone_name`])
//!
//! Resolution is explicit and awaitable. A declared record keeps the
//! `"placeholder"` sentinel until [`RecordSet::resolve_and_update`] settles,
//! and lookup failures are returned as data
//! ([`ResolutionOutcome::KeptPlaceholder`]), never raised.

pub mod error;
pub mod naming;
pub mod planner;
pub mod record_set;
pub mod resolver;
pub mod types;

// Re-export common types
pub use dns_planner_backend::RecordType;
pub use error::{CoreError, CoreResult};
pub use naming::service_zone_name;
pub use planner::{BatchDeclareFailure, BatchDeclareResult, ZonePlanner};
pub use record_set::RecordSet;
pub use resolver::{HostResolver, ResolveError, ResolveResult, SystemResolver};
pub use types::{PLACEHOLDER_VALUE, RecordSetRequest, ResolutionOutcome};
