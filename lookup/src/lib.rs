pub mod error;
pub mod local;
pub mod public;
pub mod resolve;

pub use error::{LookupError, Result};
pub use local::{local_address, try_local_address};
pub use public::{
    DEFAULT_SERVICE_URL, public_address, public_address_from, try_public_address_from,
};
pub use resolve::{host_address, resolve_host};
