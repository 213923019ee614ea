//! Application workflow: wallet session, catalog synchronization and the two
//! state-changing actions against the course contract.
//!
//! Everything here is transport-agnostic: functions take the `interface.rs`
//! traits so the same logic drives the reqwest client and test doubles.

pub mod catalog;
pub mod session;

pub use catalog::CatalogState;
pub use session::{SessionState, WalletSession};

use crate::abi::ContractHandle;
use crate::error::{ErrorKind, Result};
use crate::interface::ContractApi;
use crate::model::dtos::{CreateCourseParams, EnrollParams};
use serde_json::{json, Value};

/// Submit an enroll transaction for the active account. Single attempt, no
/// retry, no optimistic update: the enrolled badge changes on the next
/// manual refresh. Callers disable this action for courses already present
/// in the enrolled snapshot instead of relying on the contract rejection.
pub async fn enroll(
    api: &impl ContractApi,
    handle: &ContractHandle,
    signer: &str,
    params: EnrollParams,
) -> Result<Value> {
    api.transact(
        signer,
        handle,
        "enroll",
        params.value,
        &[json!(params.course_id)],
    )
    .await
    .map_err(|_| {
        ErrorKind::TransactionFailed("Failed to enroll in course. Please try again.".to_string())
            .into()
    })
}

/// Submit a create_course transaction, mirroring the enroll call pattern.
/// The contract assigns the id, enrolled count and active flag.
pub async fn create_course(
    api: &impl ContractApi,
    handle: &ContractHandle,
    signer: &str,
    params: CreateCourseParams,
) -> Result<Value> {
    api.transact(
        signer,
        handle,
        "create_course",
        0,
        &[
            json!(params.title),
            json!(params.description),
            json!(params.max_students),
            json!(params.start_time),
            json!(params.end_time),
            json!(params.price),
            json!(params.metadata_hash),
        ],
    )
    .await
    .map_err(|_| {
        ErrorKind::TransactionFailed("Failed to create course. Please try again.".to_string())
            .into()
    })
}
