/// Explicit configuration for one client instance.
///
/// Initialization order is fixed: build the transport client from this,
/// construct the contract handle, then (optionally) open a wallet session.
/// Nothing here is ambient or global.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Name presented to the wallet during the authorization handshake.
    pub app_name: String,
    /// Node gateway for contract queries and transactions.
    pub node_url: String,
    /// Wallet signer service handling enable/accounts.
    pub wallet_url: String,
    /// Realtime demo channel endpoint.
    pub ws_url: String,
    /// Deployed contract address.
    pub contract_address: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "Eduverse".to_string(),
            node_url: "https://rpc2.paseo.popnetwork.xyz".to_string(),
            wallet_url: "http://127.0.0.1:8425".to_string(),
            ws_url: "ws://127.0.0.1:8080".to_string(),
            contract_address: "5H9gbZrr87kaFTqbksmJBAX19oFsUYG2uNCSeD4HMon5G5ES".to_string(),
        }
    }
}
