//! Zone planner service.

use std::sync::Arc;

use futures::future::join_all;
use serde::Serialize;

use dns_planner_backend::ZoneBackend;

use crate::error::CoreResult;
use crate::record_set::RecordSet;
use crate::resolver::HostResolver;
use crate::types::{RecordSetRequest, ResolutionOutcome};

/// Declares record sets against one backend with one resolver.
pub struct ZonePlanner {
    backend: Arc<dyn ZoneBackend>,
    resolver: Arc<dyn HostResolver>,
}

impl ZonePlanner {
    /// Create a planner over the given backend and resolver.
    #[must_use]
    pub fn new(backend: Arc<dyn ZoneBackend>, resolver: Arc<dyn HostResolver>) -> Self {
        Self { backend, resolver }
    }

    /// Declare a record set with its placeholder value.
    ///
    /// Resolution is left to the caller via
    /// [`RecordSet::resolve_and_update`].
    pub async fn declare(&self, request: RecordSetRequest) -> CoreResult<RecordSet> {
        RecordSet::declare(self.backend.clone(), self.resolver.clone(), request).await
    }

    /// Declare a record set and settle its resolution before returning.
    ///
    /// By the time this returns, the record value is final: the resolved
    /// addresses, or the placeholder together with the reported reason.
    pub async fn declare_resolved(
        &self,
        request: RecordSetRequest,
    ) -> CoreResult<(RecordSet, ResolutionOutcome)> {
        let record_set = self.declare(request).await?;
        let outcome = record_set.resolve_and_update().await?;
        Ok((record_set, outcome))
    }

    /// Declare several record sets concurrently, collecting per-item failures.
    pub async fn declare_all(&self, requests: Vec<RecordSetRequest>) -> BatchDeclareResult {
        let names: Vec<String> = requests.iter().map(|r| r.name.clone()).collect();
        let futures: Vec<_> = requests.into_iter().map(|r| self.declare(r)).collect();
        let results = join_all(futures).await;

        let mut declared = Vec::new();
        let mut failures = Vec::new();
        for (i, result) in results.into_iter().enumerate() {
            match result {
                Ok(record_set) => declared.push(record_set),
                Err(e) => failures.push(BatchDeclareFailure {
                    request_index: i,
                    record_name: names[i].clone(),
                    reason: e.to_string(),
                }),
            }
        }

        BatchDeclareResult {
            success_count: declared.len(),
            failed_count: failures.len(),
            declared,
            failures,
        }
    }
}

/// Result of a batch declaration.
///
/// Contains the successfully declared record sets and any per-item failures.
pub struct BatchDeclareResult {
    /// Number of record sets successfully declared.
    pub success_count: usize,
    /// Number of requests that failed.
    pub failed_count: usize,
    /// Successfully declared record sets.
    pub declared: Vec<RecordSet>,
    /// Details about each failed declaration.
    pub failures: Vec<BatchDeclareFailure>,
}

/// Information about a single failed declaration in a batch.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchDeclareFailure {
    /// Index of the failed request in the original request list.
    pub request_index: usize,
    /// Name of the record set that failed.
    pub record_name: String,
    /// Human-readable reason for the failure.
    pub reason: String,
}
