use crate::error::ParseAddressError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{Ipv4Addr, SocketAddr, ToSocketAddrs};
use std::str::FromStr;

/// An IPv4 address stored as one packed 32-bit integer.
///
/// The four octets `A.B.C.D` are packed most-significant-octet-first, in
/// host byte order: `(A << 24) | (B << 16) | (C << 8) | D`. Equality and
/// ordering compare the packed integer, which is the same as comparing the
/// octets left to right.
///
/// Values are immutable once constructed and freely shareable across
/// threads.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Address(u32);

impl Address {
    /// The sentinel returned when parsing or resolution fails.
    ///
    /// Numerically identical to [`Address::ANY`]: a failed lookup cannot be
    /// told apart from an explicitly configured `0.0.0.0`.
    pub const NONE: Address = Address(0);

    /// The wildcard address `0.0.0.0`.
    pub const ANY: Address = Address(0);

    /// The loopback address `127.0.0.1`.
    pub const LOCALHOST: Address = Address(0x7F00_0001);

    /// The limited broadcast address `255.255.255.255`.
    pub const BROADCAST: Address = Address(0xFFFF_FFFF);

    /// Packs four octets, most significant first.
    pub const fn from_octets(a: u8, b: u8, c: u8, d: u8) -> Self {
        Address(u32::from_be_bytes([a, b, c, d]))
    }

    /// Wraps a packed 32-bit value verbatim.
    pub const fn from_bits(bits: u32) -> Self {
        Address(bits)
    }

    /// Returns the packed 32-bit value verbatim, host byte order.
    pub const fn to_bits(self) -> u32 {
        self.0
    }

    /// Returns the four octets, most significant first.
    pub const fn octets(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// Parses `input` with full degradation semantics.
    ///
    /// The empty string maps to [`Address::ANY`] and the exact token
    /// `localhost` maps to [`Address::LOCALHOST`], neither touching the
    /// network. Anything that parses as strict dotted-decimal is packed
    /// directly and never sent to the resolver. Every remaining input is
    /// treated as a hostname and handed to the system resolver; the first
    /// IPv4 result wins. All failures collapse to [`Address::NONE`] and
    /// this function never errors. Callers that need to distinguish
    /// failures use the [`FromStr`] surface instead.
    ///
    /// Hostname resolution blocks the calling thread.
    pub fn resolve(input: &str) -> Self {
        if input.is_empty() {
            return Address::ANY;
        }
        if input == "localhost" {
            return Address::LOCALHOST;
        }
        if let Ok(addr) = input.parse::<Address>() {
            return addr;
        }
        resolve_hostname(input).unwrap_or(Address::NONE)
    }
}

/// Blocking lookup through the system resolver. The port is meaningless
/// here; `ToSocketAddrs` requires one.
fn resolve_hostname(host: &str) -> Option<Address> {
    (host, 0u16).to_socket_addrs().ok()?.find_map(|addr| match addr {
        SocketAddr::V4(v4) => Some(Address::from(*v4.ip())),
        SocketAddr::V6(_) => None,
    })
}

impl FromStr for Address {
    type Err = ParseAddressError;

    /// Strict dotted-decimal parse: exactly four decimal groups, each in
    /// `[0, 255]`, separated by `.`, with no other characters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseAddressError::Empty);
        }
        let mut octets = [0u8; 4];
        let mut count = 0usize;
        for group in s.split('.') {
            if count == 4 {
                return Err(ParseAddressError::GroupCount);
            }
            if group.is_empty() || !group.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ParseAddressError::InvalidGroup(group.to_string()));
            }
            let value: u32 = group
                .parse()
                .map_err(|_| ParseAddressError::InvalidGroup(group.to_string()))?;
            if value > 255 {
                return Err(ParseAddressError::OctetRange(value));
            }
            octets[count] = value as u8;
            count += 1;
        }
        if count != 4 {
            return Err(ParseAddressError::GroupCount);
        }
        Ok(Address::from(octets))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.octets();
        write!(f, "{}.{}.{}.{}", a, b, c, d)
    }
}

impl From<u32> for Address {
    fn from(bits: u32) -> Self {
        Address(bits)
    }
}

impl From<Address> for u32 {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

impl From<[u8; 4]> for Address {
    fn from(octets: [u8; 4]) -> Self {
        Address(u32::from_be_bytes(octets))
    }
}

impl From<Address> for [u8; 4] {
    fn from(addr: Address) -> Self {
        addr.octets()
    }
}

impl From<Ipv4Addr> for Address {
    fn from(ip: Ipv4Addr) -> Self {
        Address(u32::from(ip))
    }
}

impl From<Address> for Ipv4Addr {
    fn from(addr: Address) -> Self {
        Ipv4Addr::from(addr.0)
    }
}
