//!Network module

use core::{fmt, iter};

use crate::addr::Address;
use crate::parser::{self, NetworkError};
use crate::v4;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
///IPv4 network in CIDR notation
///
///Address is kept exactly as supplied, derived addresses are computed on demand.
pub struct Network {
    addr: Address,
    prefix: u8,
}

impl Network {
    #[inline]
    ///Constructs new network verifying that `prefix` is within `0..=32`
    pub fn new(addr: Address, prefix: u8) -> Result<Self, NetworkError<'static>> {
        if prefix > v4::BITS_LEN {
            log::debug!("Rejected network {addr}/{prefix}: prefix is greater than {}", v4::BITS_LEN);
            Err(NetworkError::PrefixOverflow(prefix.into()))
        } else {
            Ok(Self::new_unchecked(addr, prefix))
        }
    }

    #[inline(always)]
    pub(crate) const fn new_unchecked(addr: Address, prefix: u8) -> Self {
        Self {
            addr,
            prefix,
        }
    }

    #[inline]
    ///Parses `text` in `address/prefix` notation
    ///
    ///Rejected input is logged at debug level.
    pub fn parse(text: &str) -> Result<Self, NetworkError<'_>> {
        parser::parse_network(text).inspect_err(|error| {
            log::debug!("Rejected network '{text}': {error}");
        })
    }

    #[inline(always)]
    ///Returns address as it was supplied
    pub const fn addr(&self) -> Address {
        self.addr
    }

    #[inline(always)]
    ///Returns prefix
    pub const fn prefix(&self) -> u8 {
        self.prefix
    }

    #[inline(always)]
    ///Returns network mask as address, e.g. `255.255.255.0` for `/24`
    pub const fn netmask(&self) -> Address {
        Address::from_bits(v4::mask(self.prefix))
    }

    #[inline(always)]
    ///Computes network address, which is lowest possible address within CIDR block
    pub const fn network_addr(&self) -> Address {
        v4::network_addr(self.addr, self.prefix)
    }

    #[inline(always)]
    ///Computes broadcast address, which is highest possible address within CIDR block
    pub const fn broadcast_addr(&self) -> Address {
        v4::broadcast_addr(self.addr, self.prefix)
    }

    #[inline]
    ///Returns lowest usable host address
    ///
    ///Point-to-point (`/31`) and single host (`/32`) networks have no reserved network address,
    ///hence network address itself is returned.
    pub const fn min_host_addr(&self) -> Address {
        let network = self.network_addr();
        match self.prefix {
            31 | 32 => network,
            _ => Address::from_bits(network.to_bits() + 1),
        }
    }

    #[inline]
    ///Returns highest usable host address
    ///
    ///Point-to-point (`/31`) and single host (`/32`) networks have no reserved broadcast address,
    ///hence broadcast address itself is returned.
    pub const fn max_host_addr(&self) -> Address {
        let broadcast = self.broadcast_addr();
        match self.prefix {
            31 | 32 => broadcast,
            _ => Address::from_bits(broadcast.to_bits() - 1),
        }
    }

    #[inline(always)]
    ///Checks whether own address is network address
    pub const fn is_network_addr(&self) -> bool {
        self.addr.to_bits() == self.network_addr().to_bits()
    }

    #[inline(always)]
    ///Checks whether own address is broadcast address
    pub const fn is_broadcast_addr(&self) -> bool {
        self.addr.to_bits() == self.broadcast_addr().to_bits()
    }

    #[inline(always)]
    ///Checks whether own address is lowest usable host address
    pub const fn is_min_host(&self) -> bool {
        self.addr.to_bits() == self.min_host_addr().to_bits()
    }

    #[inline(always)]
    ///Checks whether own address is highest usable host address
    pub const fn is_max_host(&self) -> bool {
        self.addr.to_bits() == self.max_host_addr().to_bits()
    }

    #[inline(always)]
    ///Checks if a given `addr` shares network bits with `self`
    ///
    ///Every address is contained within `/0`
    pub const fn contains(&self, addr: Address) -> bool {
        let mask = v4::mask(self.prefix);
        (addr.to_bits() & mask) == (self.addr.to_bits() & mask)
    }

    #[inline(always)]
    ///Returns number of addresses within the block, including network and broadcast addresses
    pub const fn size(&self) -> u64 {
        v4::size(self.prefix)
    }

    #[inline]
    ///Returns number of usable host addresses
    pub const fn host_count(&self) -> u64 {
        match self.prefix {
            31 | 32 => self.size(),
            _ => self.size() - 2,
        }
    }

    #[inline]
    ///Attempts to fetch address by `idx` within the block, starting from network address
    pub const fn get(&self, idx: u64) -> Option<Address> {
        if idx >= self.size() {
            return None;
        }

        Some(Address::from_bits(self.network_addr().to_bits() + idx as u32))
    }

    #[inline]
    ///Returns iterator over usable host addresses, from lowest to highest
    pub const fn hosts(&self) -> Hosts {
        Hosts {
            next: self.min_host_addr().to_bits() as u64,
            end: self.max_host_addr().to_bits() as u64 + 1,
        }
    }
}

impl fmt::Display for Network {
    #[inline(always)]
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { addr, prefix } = self;
        fmt.write_fmt(format_args!("{addr}/{prefix}"))
    }
}

#[derive(Clone, Debug)]
///Iterator over usable host addresses of [Network](struct.Network.html)
pub struct Hosts {
    //Half-open range, wide enough to hold one past 255.255.255.255
    next: u64,
    end: u64,
}

impl Iterator for Hosts {
    type Item = Address;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }

        let addr = Address::from_bits(self.next as u32);
        self.next += 1;
        Some(addr)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end.saturating_sub(self.next);
        match usize::try_from(remaining) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl DoubleEndedIterator for Hosts {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }

        self.end -= 1;
        Some(Address::from_bits(self.end as u32))
    }
}

impl ExactSizeIterator for Hosts {}

impl iter::FusedIterator for Hosts {}
