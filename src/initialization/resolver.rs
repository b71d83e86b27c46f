//! DNS resolver initialization.
//!
//! This module provides functions to initialize the DNS resolver with proper
//! timeout configuration.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

use crate::config::DNS_ATTEMPTS;

/// Initializes a DNS resolver that queries exactly one server.
///
/// All A and MX queries go to `server` over UDP, falling back to TCP for
/// truncated answers. The system configuration, hosts file and search domains
/// are ignored so results depend only on the configured server.
///
/// Answers are not cached; every extraction sees the TTLs the server reports.
///
/// # Arguments
///
/// * `server` - Resolver address, e.g. `8.8.8.8:53`
/// * `timeout` - Per-attempt query timeout
pub fn init_resolver(server: SocketAddr, timeout: Duration) -> Arc<TokioAsyncResolver> {
    let name_servers = NameServerConfigGroup::from_ips_clear(&[server.ip()], server.port(), true);
    let config = ResolverConfig::from_parts(None, Vec::new(), name_servers);

    let mut opts = ResolverOpts::default();
    opts.timeout = timeout;
    opts.attempts = DNS_ATTEMPTS;
    // Queries are already fully qualified
    opts.ndots = 0;
    opts.cache_size = 0;
    opts.use_hosts_file = false;

    Arc::new(TokioAsyncResolver::tokio(config, opts))
}
