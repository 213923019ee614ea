#![allow(async_fn_in_trait)] // internal traits, not exposed for dyn dispatch

use crate::abi::ContractHandle;
use crate::error::Result;
use crate::model::structs::{Account, ExtensionInfo};
use serde_json::Value;

/// Wallet extension boundary: authorization and account discovery.
///
/// The extension owns the keys; this side only learns addresses.
pub trait WalletApi {
    /// Request authorization for a named application. Returns the extensions
    /// that responded; an empty list means none is installed.
    async fn enable(&self, app_name: &str) -> Result<Vec<ExtensionInfo>>;

    /// All accounts the authorized extension exposes.
    async fn accounts(&self) -> Result<Vec<Account>>;
}

/// Contract call boundary.
///
/// Both methods return the raw JSON envelope; the workflow layer interprets
/// it (`result.isErr`, `output.Ok`, receipt fields). No retry happens here
/// beyond transport bootstrap: a failed call surfaces immediately.
pub trait ContractApi {
    /// Read-only call, dry-run as `caller`. Envelope shape:
    /// `{ "result": { "isErr": bool }, "output": { "Ok": ... } }`.
    async fn query(
        &self,
        caller: &str,
        handle: &ContractHandle,
        method: &str,
        args: &[Value],
    ) -> Result<Value>;

    /// State-changing call signed by `signer`, transferring `value`. Returns
    /// the submission receipt.
    async fn transact(
        &self,
        signer: &str,
        handle: &ContractHandle,
        method: &str,
        value: u128,
        args: &[Value],
    ) -> Result<Value>;
}
