use crate::error::{LookupError, Result};
use address::Address;
use std::net::SocketAddr;
use tokio::net::lookup_host;
use tracing::debug;

/// Resolves a hostname to its first IPv4 address.
///
/// Dotted-decimal input takes a fast path that never reaches the resolver.
/// The port passed to the lookup is meaningless; the API requires one.
pub async fn resolve_host(host: &str) -> Result<Address> {
    if let Ok(addr) = host.parse::<Address>() {
        return Ok(addr);
    }
    let mut addrs = lookup_host((host, 0u16)).await?;
    addrs
        .find_map(|addr| match addr {
            SocketAddr::V4(v4) => Some(Address::from(*v4.ip())),
            SocketAddr::V6(_) => None,
        })
        .ok_or(LookupError::NoAddress)
}

/// Sentinel wrapper around [`resolve_host`].
///
/// The empty string and the exact token `localhost` follow the same
/// shortcuts as `Address::resolve`; every failure degrades to
/// [`Address::NONE`].
pub async fn host_address(host: &str) -> Address {
    if host.is_empty() {
        return Address::ANY;
    }
    if host == "localhost" {
        return Address::LOCALHOST;
    }
    match resolve_host(host).await {
        Ok(addr) => addr,
        Err(err) => {
            debug!("Hostname resolution for {:?} failed: {}", host, err);
            Address::NONE
        }
    }
}
