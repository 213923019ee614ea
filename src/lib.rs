//! Client core for the Eduverse course marketplace.
//!
//! Wallet session handling, a contract client for the deployed course
//! contract (queries and transactions), catalog state synchronization and a
//! small realtime chat channel. Presentation lives elsewhere; this crate is
//! the workflow and its state machines.

pub mod abi;
pub mod app;
pub mod chat;
pub mod client;
pub mod config;
pub mod error;
pub mod interface;
pub mod model;

#[cfg(feature = "no-wasm")]
pub use reqwest::Client;
#[cfg(feature = "no-wasm")]
pub use tokio;
