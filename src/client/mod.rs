//! Transport implementations of the wallet and contract boundaries.
//!
//! `no-wasm` talks HTTP via reqwest to the wallet signer service and the node
//! gateway; the `wasm` variant (gloo_net) is a placeholder.

#[cfg(feature = "no-wasm")]
pub mod request;
#[cfg(feature = "no-wasm")]
pub use request::*;

#[cfg(feature = "wasm")]
pub mod gloo;
#[cfg(feature = "wasm")]
pub use gloo::*;
