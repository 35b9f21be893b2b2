use crate::error::{LookupError, Result};
use address::Address;
use std::net::{Ipv4Addr, SocketAddr};
use tokio::net::UdpSocket;
use tracing::debug;

/// Destination used to pick an outbound route. Connecting a UDP socket
/// sends no datagram; it only asks the stack which source address it would
/// use for this destination.
const PROBE_DEST: (Ipv4Addr, u16) = (Ipv4Addr::new(8, 8, 8, 8), 80);

/// The address of the interface the local stack would use to reach the
/// internet, or [`Address::NONE`] when no route is available.
///
/// Each call probes the stack anew; results are not cached.
pub async fn local_address() -> Address {
    match try_local_address().await {
        Ok(addr) => addr,
        Err(err) => {
            debug!("Local address discovery failed: {}", err);
            Address::NONE
        }
    }
}

/// Fallible variant of [`local_address`].
pub async fn try_local_address() -> Result<Address> {
    let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0)).await?;
    socket.connect(PROBE_DEST).await?;
    match socket.local_addr()? {
        SocketAddr::V4(v4) => Ok(Address::from(*v4.ip())),
        SocketAddr::V6(_) => Err(LookupError::NoAddress),
    }
}
