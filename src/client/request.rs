//! No-WASM transport using reqwest.
//!
//! Endpoints: the wallet signer service answers `enable`/`accounts`, the node
//! gateway answers contract queries and submissions. Responses come back as
//! raw `serde_json::Value`; the workflow layer interprets the envelopes.

use crate::abi::ContractHandle;
use crate::config::AppConfig;
use crate::error::{ErrorKind, Result};
use crate::interface::{ContractApi, WalletApi};
use crate::model::structs::{Account, ExtensionInfo};
use reqwest::Client;
use serde_json::{json, Value};

/// HTTP client for no-WASM environments.
#[derive(Debug, Clone)]
pub struct NodeClient {
    client: Client,
    node_url: String,
    wallet_url: String,
}

impl NodeClient {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            node_url: config.node_url.trim_end_matches('/').to_string(),
            wallet_url: config.wallet_url.trim_end_matches('/').to_string(),
        })
    }
}

impl WalletApi for NodeClient {
    async fn enable(&self, app_name: &str) -> Result<Vec<ExtensionInfo>> {
        let url = format!("{}/enable", self.wallet_url);
        let body = json!({ "origin": app_name });

        // The handshake is idempotent, so transient network failures get a
        // few attempts before surfacing. Everything past this point is
        // single-shot.
        for attempt in 1..=3 {
            match self.client.post(&url).json(&body).send().await {
                Ok(resp) => {
                    let payload = resp.json::<Value>().await?;
                    let extensions: Vec<ExtensionInfo> =
                        serde_json::from_value(payload["extensions"].clone())?;
                    return Ok(extensions);
                }
                Err(e) => {
                    eprintln!("Wallet handshake failed (attempt {attempt}/3): {e}");
                    if attempt == 3 {
                        return Err(e.into());
                    }
                    tokio::time::sleep(std::time::Duration::from_millis(500)).await;
                }
            }
        }

        unreachable!()
    }

    async fn accounts(&self) -> Result<Vec<Account>> {
        let url = format!("{}/accounts", self.wallet_url);
        let resp = self.client.get(&url).send().await?;
        let payload = resp.json::<Value>().await?;

        let accounts: Vec<Account> = serde_json::from_value(payload["accounts"].clone())?;
        Ok(accounts)
    }
}

impl ContractApi for NodeClient {
    async fn query(
        &self,
        caller: &str,
        handle: &ContractHandle,
        method: &str,
        args: &[Value],
    ) -> Result<Value> {
        let selector = handle.abi.selector(method)?;
        let url = format!("{}/contract/query", self.node_url);

        let resp = self
            .client
            .post(&url)
            .json(&json!({
                "address": handle.address,
                "caller": caller,
                "method": method,
                "selector": format!("0x{}", hex::encode(selector)),
                "args": args,
            }))
            .send()
            .await?;

        Ok(resp.json::<Value>().await?)
    }

    async fn transact(
        &self,
        signer: &str,
        handle: &ContractHandle,
        method: &str,
        value: u128,
        args: &[Value],
    ) -> Result<Value> {
        let spec = handle.abi.message(method)?;
        if !spec.mutates {
            return Err(ErrorKind::ParseError(format!(
                "{method} is read-only, submit it as a query"
            ))
            .into());
        }
        let selector = handle.abi.selector(method)?;
        let url = format!("{}/contract/call", self.node_url);

        let resp = self
            .client
            .post(&url)
            .json(&json!({
                "address": handle.address,
                "signer": signer,
                "method": method,
                "selector": format!("0x{}", hex::encode(selector)),
                "value": value.to_string(),
                "args": args,
            }))
            .send()
            .await?;

        let receipt = resp.json::<Value>().await?;
        if receipt["result"]["isErr"].as_bool().unwrap_or(false) {
            return Err(ErrorKind::TransactionFailed(format!(
                "Transaction {method} was rejected"
            ))
            .into());
        }
        Ok(receipt)
    }
}
