//! Domain models for the IPv4 address report.
//!
//! - [`Ipv4Info`] - a parsed address with its derived subnet fields
//! - [`AddressError`] - the reasons an input string can be rejected

mod error;
mod ipv4;

pub use error::AddressError;
pub use ipv4::{
    broadcast_addr, default_prefix, max_hosts, network_addr, prefix_mask, Ipv4Info, MAX_LENGTH,
};
