//! Remote host resolution to a canonical IPv4 address
//!
//! The kernel recent-list interface only tracks IPv4, so whatever the host
//! framework hands us (hostname, dotted quad, or an IPv4 address wrapped in
//! IPv6 mixed notation) is funneled down to a single `Ipv4Addr` here.

use crate::error::{RecentError, Result};
use std::io;
use std::net::{IpAddr, Ipv4Addr, ToSocketAddrs};

/// Name-resolution backend for remote host identifiers.
///
/// Injectable so tests can substitute deterministic lookups for real ones.
pub trait HostResolver: Send + Sync {
    /// Resolve an identifier to candidate addresses, in preference order.
    ///
    /// An empty list and an error both count as a failed lookup.
    fn resolve(&self, host: &str) -> io::Result<Vec<IpAddr>>;
}

/// Resolver backed by the system name service.
///
/// Lookups are IPv4-oriented: IPv6 candidates are discarded, so a dual-stack
/// hostname yields its IPv4 address and a plain IPv6 literal yields nothing.
/// A lookup may block for as long as the system resolver takes; no extra
/// timeout is layered on top.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl HostResolver for SystemResolver {
    fn resolve(&self, host: &str) -> io::Result<Vec<IpAddr>> {
        let addrs = (host, 0u16).to_socket_addrs()?;
        Ok(addrs.map(|sa| sa.ip()).filter(|ip| ip.is_ipv4()).collect())
    }
}

/// Resolve a raw remote host identifier to a canonical IPv4 address.
///
/// A direct lookup runs first. If it yields nothing and the identifier looks
/// like IPv6 syntax, one more lookup runs over the bare suffix extracted by
/// [`mapped_ipv4_suffix`]; that retry happens at most once and is never
/// chained. Whatever still fails to come back as an IPv4 address is an
/// error: the recent list cannot hold any other family.
pub fn resolve_ipv4(resolver: &dyn HostResolver, host: &str) -> Result<Ipv4Addr> {
    let resolved = match first_candidate(resolver, host) {
        Ok(addr) => addr,
        Err(direct_err) => {
            let retry = if host.contains(':') {
                mapped_ipv4_suffix(host)
            } else {
                None
            };
            match retry {
                Some(suffix) => first_candidate(resolver, suffix).map_err(|retry_err| {
                    RecentError::AddressResolution {
                        host: host.to_string(),
                        source: retry_err,
                    }
                })?,
                None => {
                    return Err(RecentError::AddressResolution {
                        host: host.to_string(),
                        source: direct_err,
                    })
                }
            }
        }
    };

    match resolved {
        IpAddr::V4(addr) => Ok(addr),
        other => Err(RecentError::AddressFormat {
            host: host.to_string(),
            address: other,
        }),
    }
}

/// Extract the embedded IPv4 part of an RFC 1884 §2.2.3 mixed-notation
/// literal.
///
/// Name-resolution calls generally refuse `::1.2.3.4`, `::ffff:1.2.3.4` and
/// the spelled-out `0:0:0:0:0:ffff:1.2.3.4` forms even though the trailing
/// dotted quad resolves fine on its own, so the prefix is stripped by hand.
/// Matching is case-insensitive. Returns `None` when the identifier does not
/// carry one of those prefixes.
pub fn mapped_ipv4_suffix(host: &str) -> Option<&str> {
    if let Some(rest) = host.strip_prefix("::") {
        Some(strip_prefix_ignore_case(rest, "ffff:").unwrap_or(rest))
    } else if let Some(rest) = strip_prefix_ignore_case(host, "0:0:0:0:0:") {
        if let Some(tail) = strip_prefix_ignore_case(rest, "0:") {
            Some(tail)
        } else if let Some(tail) = strip_prefix_ignore_case(rest, "ffff:") {
            Some(tail)
        } else {
            Some(rest)
        }
    } else {
        None
    }
}

/// Case-insensitive `str::strip_prefix` for ASCII prefixes.
fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let len = prefix.len();
    if s.len() >= len && s.as_bytes()[..len].eq_ignore_ascii_case(prefix.as_bytes()) {
        // Matched bytes are ASCII, so `len` is a char boundary.
        Some(&s[len..])
    } else {
        None
    }
}

/// First candidate from the backend, with an empty result mapped to an error.
fn first_candidate(resolver: &dyn HostResolver, host: &str) -> io::Result<IpAddr> {
    let candidates = resolver.resolve(host)?;
    candidates
        .into_iter()
        .next()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no addresses found"))
}
