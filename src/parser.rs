use core::str;

use crate::addr::Address;
use crate::network::Network;
use crate::v4::BITS_LEN;

const OCTETS_LEN: usize = 4;
const ADDR_SEP: u8 = b'.';
const PREFIX_SEP: u8 = b'/';

#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
///Possible errors parsing dotted-quad address
pub enum AddressError<'a> {
    ///Address is not specified
    #[error("invalid address string")]
    Missing,
    ///Address must have 4 components, contains number of components found
    #[error("invalid address string")]
    InvalidComponentSize(usize),
    ///Component is not decimal number within 0..=255
    ///
    ///Empty component, as in `1..2.3`, is reported with empty text.
    #[error("invalid address part: {0}")]
    InvalidComponent(&'a str),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
///Possible errors parsing network in CIDR notation
pub enum NetworkError<'a> {
    ///Network is not specified
    #[error("invalid network string")]
    Missing,
    ///Network must have exactly one `/`, contains number of `/` separated parts found
    #[error("invalid network string")]
    InvalidSeparatorCount(usize),
    ///Address part is invalid
    #[error(transparent)]
    Address(AddressError<'a>),
    ///Prefix is not specified
    #[error("invalid prefix")]
    MissingPrefix,
    ///Prefix is not decimal number
    #[error("invalid prefix")]
    InvalidPrefix(&'a str),
    ///Prefix is greater than 32
    #[error("invalid prefix")]
    PrefixOverflow(u32),
}

#[inline(always)]
const fn component(text: &[u8], start: usize, end: usize) -> &[u8] {
    let (head, _) = text.split_at(end);
    let (_, component) = head.split_at(start);
    component
}

#[inline(always)]
const fn as_str(text: &[u8]) -> &str {
    //Input is always sliced around ASCII separators of valid `str`
    unsafe {
        str::from_utf8_unchecked(text)
    }
}

const fn count(text: &[u8], sep: u8) -> usize {
    let mut result = 0;
    let mut idx = 0;
    while idx < text.len() {
        if text[idx] == sep {
            result += 1;
        }
        idx += 1;
    }
    result
}

//Plain base 10 digits, no sign and no whitespace.
//Returns `None` on empty input or on overflow.
const fn parse_decimal(text: &[u8]) -> Option<u32> {
    if text.is_empty() {
        return None;
    }

    let mut result: u32 = 0;
    let mut idx = 0;
    while idx < text.len() {
        let ch = text[idx];
        if !ch.is_ascii_digit() {
            return None;
        }

        result = match result.checked_mul(10) {
            Some(result) => match result.checked_add((ch - b'0') as u32) {
                Some(result) => result,
                None => return None,
            },
            None => return None,
        };
        idx += 1;
    }

    Some(result)
}

///Parses dotted-quad `text` into [Address](struct.Address.html)
///
///Number of components is verified before any component is inspected, so `10.0.0` is reported as
///invalid string while `10.0.0.x` reports `x` as invalid component.
pub const fn parse_address(text: &str) -> Result<Address, AddressError<'_>> {
    let text = text.as_bytes();
    if text.is_empty() {
        return Err(AddressError::Missing);
    }

    let components_size = count(text, ADDR_SEP) + 1;
    if components_size != OCTETS_LEN {
        return Err(AddressError::InvalidComponentSize(components_size));
    }

    let mut octets = [0u8; OCTETS_LEN];
    let mut octet_idx = 0;
    let mut start = 0;
    let mut idx = 0;
    while idx <= text.len() {
        if idx == text.len() || text[idx] == ADDR_SEP {
            let component = component(text, start, idx);
            match parse_decimal(component) {
                Some(octet) if octet <= u8::MAX as u32 => octets[octet_idx] = octet as u8,
                _ => return Err(AddressError::InvalidComponent(as_str(component))),
            }
            octet_idx += 1;
            start = idx + 1;
        }
        idx += 1;
    }

    Ok(Address::new(octets[0], octets[1], octets[2], octets[3]))
}

///Parses `text` in `address/prefix` notation into [Network](struct.Network.html)
///
///Address is retained as written, it is not truncated to network address.
pub const fn parse_network(text: &str) -> Result<Network, NetworkError<'_>> {
    let text = text.as_bytes();
    if text.is_empty() {
        return Err(NetworkError::Missing);
    }

    let parts_size = count(text, PREFIX_SEP) + 1;
    if parts_size != 2 {
        return Err(NetworkError::InvalidSeparatorCount(parts_size));
    }

    let mut sep_pos = 0;
    while text[sep_pos] != PREFIX_SEP {
        sep_pos += 1;
    }

    let (addr, prefix) = text.split_at(sep_pos);
    let addr = match parse_address(as_str(addr)) {
        Ok(addr) => addr,
        Err(error) => return Err(NetworkError::Address(error)),
    };

    let (_, prefix) = prefix.split_at(1);
    if prefix.is_empty() {
        return Err(NetworkError::MissingPrefix);
    }

    match parse_decimal(prefix) {
        Some(prefix) if prefix <= BITS_LEN as u32 => Ok(Network::new_unchecked(addr, prefix as u8)),
        Some(prefix) => Err(NetworkError::PrefixOverflow(prefix)),
        None => Err(NetworkError::InvalidPrefix(as_str(prefix))),
    }
}
