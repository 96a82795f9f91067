//! Shared test helpers: resolver stubs, backend stubs, request factories.

#![allow(dead_code, clippy::expect_used)]

use std::net::Ipv4Addr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::Value;

use dns_planner_backend::{
    BackendError, BackendResult, RecordSetDeclaration, RecordSetHandle, RecordType, ZoneBackend,
};
use dns_planner_core::{HostResolver, RecordSetRequest, ResolveError, ResolveResult};

/// Assert that `Result` is `Ok` and unwrap it (fail the test otherwise).
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Resolver stub returning a fixed address list, counting invocations.
pub struct StubResolver {
    addresses: Vec<Ipv4Addr>,
    calls: AtomicUsize,
}

impl StubResolver {
    pub fn returning(addresses: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            addresses: addresses
                .iter()
                .map(|a| a.parse().expect("valid test address"))
                .collect(),
            calls: AtomicUsize::new(0),
        })
    }

    /// How many lookups this stub has served.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HostResolver for StubResolver {
    async fn resolve_ipv4(&self, _host: &str) -> ResolveResult<Vec<Ipv4Addr>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.addresses.clone())
    }
}

/// Resolver stub whose lookups always fail.
pub struct FailingResolver;

#[async_trait]
impl HostResolver for FailingResolver {
    async fn resolve_ipv4(&self, host: &str) -> ResolveResult<Vec<Ipv4Addr>> {
        Err(ResolveError::Lookup {
            host: host.to_string(),
            detail: "simulated NXDOMAIN".to_string(),
        })
    }
}

/// Backend stub that accepts declarations but rejects every override.
pub struct RejectingBackend;

#[async_trait]
impl ZoneBackend for RejectingBackend {
    async fn declare_record_set(
        &self,
        declaration: &RecordSetDeclaration,
    ) -> BackendResult<RecordSetHandle> {
        Ok(RecordSetHandle {
            record_set_id: "rs-stub".to_string(),
            logical_id: declaration.logical_id.clone(),
        })
    }

    async fn override_property(
        &self,
        handle: &RecordSetHandle,
        _property: &str,
        _value: Value,
    ) -> BackendResult<()> {
        Err(BackendError::RecordSetNotFound(
            handle.record_set_id.clone(),
        ))
    }
}

/// A-record request for `name`, optionally resolving `dns_name`.
pub fn a_record_request(name: &str, dns_name: Option<&str>) -> RecordSetRequest {
    RecordSetRequest {
        record_type: RecordType::A,
        name: name.to_string(),
        gov_cloud: None,
        hosted_zone_id: "zone-test".to_string(),
        dns_name: dns_name.map(String::from),
        alias_hosted_zone_id: None,
        ttl: None,
    }
}
