//! DNS resolver initialization.

use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

use crate::config::{DNS_ATTEMPTS, DNS_PORT};

/// Initializes the DNS resolver used for every lookup in a run.
///
/// Queries go to the single configured nameserver (UDP with TCP fallback),
/// Google's `8.8.8.8` unless `--dns-server` says otherwise. Timeouts are
/// aggressive so a dead resolver fails the
/// lookup rather than hanging the batch, and `ndots = 0` prevents search
/// domain appending. Lookups are plain insecure DNS; unsigned zones are the
/// common case for the records this tool audits.
///
/// # Arguments
///
/// * `dns_server` - Resolver address to query
/// * `timeout_seconds` - Per-query timeout
///
/// # Returns
///
/// A configured `TokioAsyncResolver` wrapped in `Arc` for sharing across
/// concurrent domain tasks.
pub fn init_resolver(dns_server: IpAddr, timeout_seconds: u64) -> Arc<TokioAsyncResolver> {
    let mut opts = ResolverOpts::default();
    opts.timeout = Duration::from_secs(timeout_seconds);
    opts.attempts = DNS_ATTEMPTS;
    opts.ndots = 0;

    let nameservers = NameServerConfigGroup::from_ips_clear(&[dns_server], DNS_PORT, true);
    let config = ResolverConfig::from_parts(None, vec![], nameservers);

    Arc::new(TokioAsyncResolver::tokio(config, opts))
}
