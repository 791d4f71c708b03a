//! IPv4 address and CIDR utilities
//!
//! Parsing of dotted-quad addresses and `address/prefix` networks, conversion to and from
//! 32-bit integer form and derivation of network, broadcast and host range addresses.
//!
//! ```
//! use ipv4_cidr::{Address, Network};
//!
//! let network = Network::parse("192.168.0.125/24").expect("valid network");
//! assert_eq!(network.network_addr().to_string(), "192.168.0.0");
//! assert_eq!(network.broadcast_addr().to_string(), "192.168.0.255");
//! assert!(network.contains(Address::new(192, 168, 0, 1)));
//! ```
//!
//! ## Features
//!
//! - `serde` - Enables `Serialize` and `Deserialize` for [Address] and [Network] in textual form.

#![no_std]
#![warn(missing_docs)]
#![allow(clippy::style)]

mod addr;
pub use addr::{Address, OctetsError};
mod network;
pub use network::{Hosts, Network};
mod parser;
pub use parser::{parse_address, parse_network, AddressError, NetworkError};
pub mod v4;
#[cfg(feature = "serde")]
mod serialize;
