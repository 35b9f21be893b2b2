pub mod addr;
pub mod codec;
pub mod error;

pub use addr::Address;
pub use codec::AddressCodec;
pub use error::{ParseAddressError, Result};
