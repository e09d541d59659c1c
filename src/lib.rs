//! Typed Rust client for the Unifonic REST API.
//!
//! The crate has three layers: a domain layer of validated types, a transport
//! layer for wire-format quirks, and a small client layer that sends requests
//! and unwraps Unifonic's `{success, errorCode, message, data}` envelope.
//!
//! ```rust,no_run
//! use serde::Deserialize;
//! use unifonic::{Request, UnifonicClient};
//!
//! #[derive(Debug, Default, Deserialize)]
//! #[serde(rename_all = "PascalCase")]
//! struct Balance {
//!     balance: String,
//!     currency_code: String,
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), unifonic::UnifonicError> {
//!     let client = UnifonicClient::new("...")?;
//!     let request = Request::post("Account/GetBalance")?;
//!     let balance: Balance = client.execute(request).await?;
//!     println!("{} {}", balance.balance, balance.currency_code);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    ClientConfig, DEFAULT_TIMEOUT, USER_AGENT, UnifonicClient, UnifonicClientBuilder,
    UnifonicError,
};
pub use domain::{AppSid, BaseUrl, Method, Request, Resource, ResponseEnvelope, ValidationError};
