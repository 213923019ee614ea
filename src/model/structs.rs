use serde::{Deserialize, Serialize};

/// On-chain balance unit. Values on this network fit well inside u64, but the
/// chain type is 128-bit.
pub type Balance = u128;

/// A wallet account: opaque public address plus a display name. Owned by the
/// wallet extension; the session only holds a reference for its lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Account {
    pub address: String,
    #[serde(default)]
    pub name: String,
}

/// One extension that answered the authorization handshake.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExtensionInfo {
    pub name: String,
    #[serde(default)]
    pub version: String,
}

/// Read-only cache of an on-chain course record, decoded from query output.
///
/// The contract is the source of truth: the client never checks
/// `enrolled_count <= max_students`, it only renders what the chain returned.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Course {
    pub id: u32,
    pub teacher: String,
    pub title: String,
    pub description: String,
    pub max_students: u32,
    pub enrolled_count: u32,
    pub start_time: u64,
    pub end_time: u64,
    pub price: Balance,
    pub active: bool,
    pub metadata_hash: String,
}
