//!IPv4 block arithmetic
//!
//!All computations are performed on unsigned 32-bit integer form of the address.

use crate::addr::Address;

///Number of bits within IPv4 address
pub const BITS_LEN: u8 = u32::BITS as u8;

#[inline]
///Computes network mask for provided `prefix`, assuming `prefix` is valid prefix
///
///For `prefix == 0` mask is empty, for `prefix == 32` all bits are set.
pub const fn mask(prefix: u8) -> u32 {
    match prefix {
        0 => 0,
        prefix => u32::MAX << (BITS_LEN.saturating_sub(prefix)),
    }
}

#[inline]
///Computes network address from provided `addr` and `prefix`, which is lowest possible address within CIDR block
pub const fn network_addr(addr: Address, prefix: u8) -> Address {
    Address::from_bits(addr.to_bits() & mask(prefix))
}

#[inline]
///Computes broadcast address from provided `addr` and `prefix`, which is highest possible address within CIDR block
pub const fn broadcast_addr(addr: Address, prefix: u8) -> Address {
    Address::from_bits(addr.to_bits() | !mask(prefix))
}

#[inline]
///Returns number of possible addresses within block of `prefix`
pub const fn size(prefix: u8) -> u64 {
    1u64 << (BITS_LEN.saturating_sub(prefix))
}
