//! Receiving Multicast DNS messages from the network.
//!
//! This module provides the [`Listener`] which receives datagrams sent to
//! the Multicast DNS group and decodes them. It is the only part of the
//! crate that performs I/O and it requires the `net` feature as well as a
//! [Tokio](https://tokio.rs/) runtime.
#![cfg(feature = "net")]
#![cfg_attr(docsrs, doc(cfg(feature = "net")))]

pub use self::listener::{Config, Listener, MDNS_GROUP_V4, MDNS_PORT};

pub mod listener;
