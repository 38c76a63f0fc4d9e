//! Shared types and HTTP client for the coin shop API.
//!
//! The [`objects`] module holds the wire types exchanged with the remote
//! package service and the host shell. The [`client`] module (behind the
//! `client` feature) is a typed `reqwest` client for the two endpoints.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![forbid(unsafe_code)]

#[cfg(feature = "client")]
pub mod client;
pub mod config;
pub mod objects;
