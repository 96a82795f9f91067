//! Record set construct: declare with a placeholder, then resolve and patch.

use std::sync::Arc;

use dns_planner_backend::{
    DEFAULT_TTL, RESOURCE_RECORDS, RecordSetDeclaration, RecordSetHandle, ZoneBackend,
};

use crate::error::{CoreError, CoreResult};
use crate::resolver::{HostResolver, ResolveError};
use crate::types::{PLACEHOLDER_VALUE, RecordSetRequest, ResolutionOutcome};

/// A declared record set.
///
/// Declaration always establishes the record with the
/// [`PLACEHOLDER_VALUE`] sentinel. Populating it from DNS is a separate,
/// explicit step: callers that need the final value await
/// [`resolve_and_update`](Self::resolve_and_update) before synthesizing the
/// plan. Nothing runs in the background, so there is no window in which the
/// plan could be captured mid-update.
pub struct RecordSet {
    backend: Arc<dyn ZoneBackend>,
    resolver: Arc<dyn HostResolver>,
    handle: RecordSetHandle,
    dns_name: Option<String>,
}

impl RecordSet {
    /// Declare `request` on `backend` with the placeholder value.
    ///
    /// The record name doubles as the plan logical id, so declaring the same
    /// name twice on one backend is rejected. DNS is not touched here;
    /// construction cannot fail because of resolver behavior.
    pub async fn declare(
        backend: Arc<dyn ZoneBackend>,
        resolver: Arc<dyn HostResolver>,
        request: RecordSetRequest,
    ) -> CoreResult<Self> {
        log::debug!(
            "Declaring record set {} {} in zone {} (dns name: {})",
            request.record_type,
            request.name,
            request.hosted_zone_id,
            request.dns_name.as_deref().unwrap_or("none"),
        );

        let declaration = RecordSetDeclaration {
            logical_id: request.name.clone(),
            record_type: request.record_type,
            name: request.name,
            hosted_zone_id: request.hosted_zone_id,
            ttl: request.ttl.unwrap_or(DEFAULT_TTL),
            resource_records: vec![PLACEHOLDER_VALUE.to_string()],
        };
        let handle = backend.declare_record_set(&declaration).await?;

        Ok(Self {
            backend,
            resolver,
            handle,
            dns_name: request.dns_name,
        })
    }

    /// Backend-assigned identifier of the declared record set.
    #[must_use]
    pub fn record_set_id(&self) -> &str {
        &self.handle.record_set_id
    }

    /// Handle to the declared record set.
    #[must_use]
    pub fn handle(&self) -> &RecordSetHandle {
        &self.handle
    }

    /// Hostname this record set resolves, if one was requested.
    #[must_use]
    pub fn dns_name(&self) -> Option<&str> {
        self.dns_name.as_deref()
    }

    /// Resolve the requested hostname and patch the record value.
    ///
    /// Best effort: resolution failures never surface as errors. They come
    /// back as [`ResolutionOutcome::KeptPlaceholder`] with the placeholder
    /// left in place; only backend failures while applying the override
    /// propagate as `Err`. Calling this again with the same answer replaces
    /// the value with the same list, so repetition is harmless.
    pub async fn resolve_and_update(&self) -> CoreResult<ResolutionOutcome> {
        let Some(host) = self.dns_name.as_deref() else {
            log::debug!(
                "Record set {} has no dns name, keeping placeholder",
                self.handle.record_set_id
            );
            return Ok(ResolutionOutcome::Skipped);
        };

        let addresses = match self.resolver.resolve_ipv4(host).await {
            Ok(addresses) if !addresses.is_empty() => addresses,
            Ok(_) => return Ok(self.keep_placeholder(ResolveError::Empty(host.to_string()))),
            Err(reason) => return Ok(self.keep_placeholder(reason)),
        };

        let values: Vec<String> = addresses.iter().map(ToString::to_string).collect();
        let value = serde_json::to_value(&values)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;
        self.backend
            .override_property(&self.handle, RESOURCE_RECORDS, value)
            .await?;

        log::info!(
            "Record set {} updated from {host}: {}",
            self.handle.record_set_id,
            values.join(", ")
        );
        Ok(ResolutionOutcome::Updated { addresses })
    }

    fn keep_placeholder(&self, reason: ResolveError) -> ResolutionOutcome {
        log::warn!(
            "Record set {} keeps placeholder: {reason}",
            self.handle.record_set_id
        );
        ResolutionOutcome::KeptPlaceholder { reason }
    }
}

impl std::fmt::Debug for RecordSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordSet")
            .field("handle", &self.handle)
            .field("dns_name", &self.dns_name)
            .finish_non_exhaustive()
    }
}
