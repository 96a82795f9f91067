//! Hostname resolution seam and the hickory-backed default resolver.

use std::net::{IpAddr, Ipv4Addr};

use async_trait::async_trait;
use hickory_resolver::{
    TokioResolver,
    config::{NameServerConfigGroup, ResolverConfig, ResolverOpts},
    name_server::TokioConnectionProvider,
};
use serde::Serialize;
use thiserror::Error;

/// Resolution failure.
///
/// Covers NXDOMAIN, timeouts, network errors, and empty answer sets. Never
/// propagated out of the record set construct; carried in
/// [`ResolutionOutcome::KeptPlaceholder`](crate::ResolutionOutcome::KeptPlaceholder).
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum ResolveError {
    /// The lookup succeeded but the answer contained no addresses
    #[error("No A records returned for '{0}'")]
    Empty(String),

    /// The lookup itself failed
    #[error("Lookup for '{host}' failed: {detail}")]
    Lookup {
        /// Hostname that was queried.
        host: String,
        /// Underlying resolver error.
        detail: String,
    },
}

/// Resolver Result type alias
pub type ResolveResult<T> = std::result::Result<T, ResolveError>;

/// Hostname to IPv4 address resolution.
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Resolve the A records of `host`, in answer order.
    async fn resolve_ipv4(&self, host: &str) -> ResolveResult<Vec<Ipv4Addr>>;
}

/// [`HostResolver`] backed by hickory's tokio resolver.
pub struct SystemResolver {
    inner: TokioResolver,
}

impl SystemResolver {
    /// Build from the host system configuration (e.g. `/etc/resolv.conf`).
    ///
    /// If the system configuration cannot be loaded, falls back to Hickory's
    /// default upstream set.
    #[must_use]
    pub fn from_system_conf() -> Self {
        Self {
            inner: build_system_resolver(),
        }
    }

    /// Build a resolver that targets one specific nameserver on port 53.
    #[must_use]
    pub fn for_nameserver(ns_ip: IpAddr) -> Self {
        let config = ResolverConfig::from_parts(
            None,
            vec![],
            NameServerConfigGroup::from_ips_clear(&[ns_ip], 53, true),
        );
        let provider = TokioConnectionProvider::default();
        let inner = TokioResolver::builder_with_config(config, provider)
            .with_options(ResolverOpts::default())
            .build();
        Self { inner }
    }
}

#[async_trait]
impl HostResolver for SystemResolver {
    async fn resolve_ipv4(&self, host: &str) -> ResolveResult<Vec<Ipv4Addr>> {
        let response = self
            .inner
            .ipv4_lookup(host)
            .await
            .map_err(|e| ResolveError::Lookup {
                host: host.to_string(),
                detail: e.to_string(),
            })?;

        let addresses: Vec<Ipv4Addr> = response.iter().map(|a| a.0).collect();
        if addresses.is_empty() {
            return Err(ResolveError::Empty(host.to_string()));
        }
        Ok(addresses)
    }
}

/// Build a resolver using the host system DNS configuration (with fallback).
fn build_system_resolver() -> TokioResolver {
    #[cfg(any(unix, target_os = "windows"))]
    {
        match TokioResolver::builder_tokio() {
            Ok(builder) => return builder.build(),
            Err(e) => {
                log::warn!(
                    "Failed to load system DNS configuration, falling back to defaults: {e}"
                );
            }
        }
    }

    let provider = TokioConnectionProvider::default();
    TokioResolver::builder_with_config(ResolverConfig::default(), provider)
        .with_options(ResolverOpts::default())
        .build()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn system_resolver_builds() {
        // Should not panic -- falls back to defaults when system conf is absent
        let _resolver = SystemResolver::from_system_conf();
    }

    #[test]
    fn nameserver_resolver_builds() {
        let ip: IpAddr = "8.8.8.8".parse().unwrap();
        let _resolver = SystemResolver::for_nameserver(ip);
    }

    #[test]
    fn display_empty() {
        let e = ResolveError::Empty("host.example.com".to_string());
        assert_eq!(e.to_string(), "No A records returned for 'host.example.com'");
    }

    #[test]
    fn display_lookup() {
        let e = ResolveError::Lookup {
            host: "host.example.com".to_string(),
            detail: "no records found".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Lookup for 'host.example.com' failed: no records found"
        );
    }

    #[test]
    fn serialize_tagged_by_code() {
        let e = ResolveError::Empty("h".to_string());
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"Empty\""));
    }
}
