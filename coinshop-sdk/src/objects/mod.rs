pub mod coin_package;
pub mod host;
pub mod purchase;

pub use coin_package::{CoinPackage, PriceLabel};
pub use host::{HostMessage, HostPayload};
pub use purchase::{ApiMessage, BuyCoinPackageRequest};
