use thiserror::Error;

/// Errors produced by the strict dotted-decimal parser.
///
/// Only the fallible [`FromStr`](std::str::FromStr) surface reports these;
/// the sentinel-returning [`Address::resolve`](crate::Address::resolve)
/// swallows every failure and degrades to [`Address::NONE`](crate::Address::NONE).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseAddressError {
    #[error("empty address string")]
    Empty,

    #[error("expected exactly four dotted-decimal groups")]
    GroupCount,

    #[error("invalid octet group: {0:?}")]
    InvalidGroup(String),

    #[error("octet out of range: {0}")]
    OctetRange(u32),
}

pub type Result<T> = std::result::Result<T, ParseAddressError>;
