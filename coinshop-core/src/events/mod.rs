//! Event system for the purchase screen.
//!
//! # Event Flow
//!
//! 1. Host shell sends `HostMessage` -> `HostMessageBridge` -> identity cell
//! 2. Front end sends `UserAction` -> `CoinPurchaseScreen::dispatch`
//!
//! The two flows share nothing but the identity cell, which the purchase
//! flow reads at submission time.

pub mod channels;
pub mod types;

pub use channels::{
    DEFAULT_CHANNEL_BUFFER, HostMessageReceiver, HostMessageSender, host_message_channel,
};

pub use types::{HostMessage, UserAction};
