//!Address module

use core::{cmp, fmt, net};

use crate::parser::{self, AddressError};

#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
///Possible errors constructing address from octets sequence
pub enum OctetsError {
    ///Sequence must have exactly 4 elements, contains actual length
    #[error("invalid octets for address: expected 4 but got {0}")]
    InvalidLength(usize),
    ///Octet is outside of 0..=255 range
    #[error("invalid octets for address: '{value}' at idx={idx} is outside of 0..=255")]
    Overflow {
        ///Position of the octet
        idx: usize,
        ///Octet value
        value: i64,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
///IPv4 address, stored as octets with most significant first
pub struct Address([u8; 4]);

impl Address {
    ///`0.0.0.0`
    pub const UNSPECIFIED: Self = Self([0; 4]);
    ///`255.255.255.255`
    pub const BROADCAST: Self = Self([u8::MAX; 4]);

    #[inline(always)]
    ///Creates new address from its octets
    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Self {
        Self([a, b, c, d])
    }

    #[inline]
    ///Parses dotted-quad `text`
    ///
    ///Rejected input is logged at debug level.
    pub fn parse(text: &str) -> Result<Self, AddressError<'_>> {
        parser::parse_address(text).inspect_err(|error| {
            log::debug!("Rejected address '{text}': {error}");
        })
    }

    ///Creates address from sequence of integers
    ///
    ///Returns `Err` unless `octets` has exactly 4 elements within `0..=255`
    pub fn from_octets(octets: &[i64]) -> Result<Self, OctetsError> {
        let result = match <&[i64; 4]>::try_from(octets) {
            Ok(octets) => Self::try_from_array(octets),
            Err(_) => Err(OctetsError::InvalidLength(octets.len())),
        };
        result.inspect_err(|error| log::debug!("Rejected octets {octets:?}: {error}"))
    }

    fn try_from_array(octets: &[i64; 4]) -> Result<Self, OctetsError> {
        let mut result = [0u8; 4];
        for (idx, (octet, value)) in result.iter_mut().zip(octets).enumerate() {
            *octet = u8::try_from(*value).map_err(|_| OctetsError::Overflow { idx, value: *value })?;
        }
        Ok(Self(result))
    }

    #[inline(always)]
    ///Creates address from its big-endian integer form
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits.to_be_bytes())
    }

    #[inline(always)]
    ///Returns big-endian integer form of the address
    pub const fn to_bits(&self) -> u32 {
        u32::from_be_bytes(self.0)
    }

    #[inline(always)]
    ///Returns octets, most significant first
    pub const fn octets(&self) -> [u8; 4] {
        self.0
    }
}

impl PartialOrd for Address {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Address {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.to_bits().cmp(&other.to_bits())
    }
}

impl fmt::Display for Address {
    #[inline]
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        fmt.write_fmt(format_args!("{a}.{b}.{c}.{d}"))
    }
}

impl From<[u8; 4]> for Address {
    #[inline(always)]
    fn from(octets: [u8; 4]) -> Self {
        Self(octets)
    }
}

impl From<u32> for Address {
    #[inline(always)]
    fn from(bits: u32) -> Self {
        Self::from_bits(bits)
    }
}

impl From<Address> for u32 {
    #[inline(always)]
    fn from(addr: Address) -> Self {
        addr.to_bits()
    }
}

impl From<net::Ipv4Addr> for Address {
    #[inline(always)]
    fn from(addr: net::Ipv4Addr) -> Self {
        Self(addr.octets())
    }
}

impl From<Address> for net::Ipv4Addr {
    #[inline(always)]
    fn from(addr: Address) -> Self {
        let [a, b, c, d] = addr.0;
        net::Ipv4Addr::new(a, b, c, d)
    }
}
