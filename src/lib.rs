//! This crate is split in 2 main modules:
//!
//! - [payin] (signed payment-initiation URL construction)
//! - [verify] (callback response authentication)
#![doc = include_str!("../README.md")]

/// Callback payload delivered on the gateway's redirect back to the merchant
pub mod callback;
pub mod config;
mod error;
/// Payment initiation request and its signed URL
pub mod payin;
pub mod secret;
mod sign;
/// Callback response verification
pub mod verify;

pub use callback::ResponsePayload;
pub use config::MerchantConfig;
pub use payin::{PaymentParams, payment_url};
pub use secret::SecretKey;
pub use verify::verify;
