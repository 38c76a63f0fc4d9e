#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![forbid(unsafe_code)]

pub mod api;
pub mod bridge;
pub mod catalog;
pub mod events;
pub mod feedback;
pub mod identity;
pub mod purchase;
pub mod screen;

#[cfg(test)]
pub(crate) mod testing;
