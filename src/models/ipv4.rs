//! IPv4 address parsing and subnet derivation.
//!
//! Provides [`Ipv4Info`], an immutable value parsed from user input, plus the
//! free subnet-math helpers it is built from.

use lazy_static::lazy_static;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;

use super::AddressError;

/// Maximum length for an IPv4 subnet prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

lazy_static! {
    static ref DOTTED_QUAD: Regex =
        Regex::new(r"^(\d+)\.(\d+)\.(\d+)\.(\d+)$").expect("Invalid Regex?");
}

/// Convert a prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use ipv4_address_info::models::prefix_mask;
/// assert_eq!(prefix_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn prefix_mask(len: u8) -> Result<u32, AddressError> {
    if len > MAX_LENGTH {
        Err(AddressError::InvalidPrefix)
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Clear the host bits of an address, leaving the network address.
pub fn network_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, AddressError> {
    let mask = prefix_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Set the host bits of an address, giving the broadcast address.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, AddressError> {
    let mask = prefix_mask(len)?;
    let network_bits = u32::from(addr) & mask;
    Ok(Ipv4Addr::from(network_bits | !mask))
}

/// Number of usable host addresses for a prefix length.
///
/// Keeps the historical arithmetic `2^(32-len) - 2` as-is, so /31 yields 0
/// and /32 yields -1.
pub fn max_hosts(len: u8) -> i64 {
    assert!(len <= MAX_LENGTH, "Prefix length exceeds 32 bits");
    (1i64 << (MAX_LENGTH - len)) - 2
}

/// Default prefix length by address class of the first octet.
pub fn default_prefix(first_octet: u32) -> Result<u8, AddressError> {
    match first_octet {
        1..=126 => Ok(8),    // class A
        128..=191 => Ok(16), // class B
        192..=223 => Ok(24), // class C
        _ => Err(AddressError::UnsupportedAddressClass),
    }
}

/// An IPv4 address with its derived subnet fields.
///
/// Built once from an input string; every field is fixed after construction.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Ipv4Info {
    /// The IPv4 address as entered.
    pub addr: Ipv4Addr,
    /// The subnet prefix length (0-32).
    pub prefix: u8,
    /// Subnet mask derived from the prefix length.
    pub mask: Ipv4Addr,
    /// The address with all host bits cleared.
    pub network: Ipv4Addr,
}

impl Ipv4Info {
    /// Parse an address string with an optional `/prefix`.
    ///
    /// Without an explicit prefix the length defaults by address class of the
    /// first octet (A/B/C). All validation runs before any derived field is
    /// computed, so a failure never leaves a half-built value.
    pub fn new(input: &str) -> Result<Ipv4Info, AddressError> {
        let input = input.trim();

        let (addr_part, prefix) = match input.split_once('/') {
            Some((addr_part, prefix_part)) => {
                let prefix: u8 = prefix_part
                    .parse()
                    .map_err(|_| AddressError::InvalidPrefix)?;
                if prefix > MAX_LENGTH {
                    return Err(AddressError::InvalidPrefix);
                }
                (addr_part, prefix)
            }
            None => {
                // Class inference runs on the raw first field, before the
                // full address is validated, matching the original order.
                let first: u32 = input
                    .split('.')
                    .next()
                    .unwrap_or("")
                    .parse()
                    .map_err(|_| AddressError::InvalidFormat)?;
                (input, default_prefix(first)?)
            }
        };

        let caps = DOTTED_QUAD
            .captures(addr_part)
            .ok_or(AddressError::InvalidFormat)?;
        let mut octets = [0u8; 4];
        for (i, octet) in octets.iter_mut().enumerate() {
            // The regex only admits digits, so a parse failure means the
            // value does not fit in u32 and is out of range either way.
            let field: u32 = caps[i + 1]
                .parse()
                .map_err(|_| AddressError::OctetOutOfRange)?;
            *octet = u8::try_from(field).map_err(|_| AddressError::OctetOutOfRange)?;
        }

        let addr = Ipv4Addr::from(octets);
        let mask = Ipv4Addr::from(prefix_mask(prefix)?);
        let network = network_addr(addr, prefix)?;

        Ok(Ipv4Info {
            addr,
            prefix,
            mask,
            network,
        })
    }

    /// The address with all host bits set.
    pub fn broadcast(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.network) | !u32::from(self.mask))
    }

    /// First address of the usable host range (network + 1).
    pub fn first_usable(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.network).wrapping_add(1))
    }

    /// Last address of the usable host range (broadcast - 1).
    pub fn last_usable(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.broadcast()).wrapping_sub(1))
    }

    /// Number of usable hosts; /31 gives 0 and /32 gives -1.
    pub fn max_hosts(&self) -> i64 {
        max_hosts(self.prefix)
    }

    /// Whether the address falls in an RFC1918 private range.
    pub fn is_private(&self) -> bool {
        let o = self.addr.octets();
        o[0] == 10 || (o[0] == 172 && (16..=31).contains(&o[1])) || (o[0] == 192 && o[1] == 168)
    }

    pub fn is_public(&self) -> bool {
        !self.is_private()
    }
}

impl std::fmt::Display for Ipv4Info {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

impl Serialize for Ipv4Info {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.addr, self.prefix);
        serializer.serialize_str(&cidr)
    }
}

impl<'de> Deserialize<'de> for Ipv4Info {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4Info, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4Info::new(&s).map_err(|e| de::Error::custom(format!("invalid CIDR {s}: {e}")))
    }
}
