//! Course catalog synchronization.
//!
//! Two independent reads feed the view: the full course list and the active
//! account's enrolled list. "Is enrolled" is a join over those two
//! independently fetched snapshots, so it can be stale between refreshes;
//! the chain remains authoritative. In-flight fetches are not cancelled when
//! the account changes, so a stale response may overwrite a newer one.

use crate::abi::ContractHandle;
use crate::error::{ErrorKind, Result};
use crate::interface::ContractApi;
use crate::model::structs::Course;
use serde_json::{json, Value};

#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    pub courses: Vec<Course>,
    pub enrolled: Vec<Course>,
    pub loading_courses: bool,
    pub loading_enrolled: bool,
    /// Shared error slot; whichever fetch fails last wins.
    pub error: Option<String>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derived membership check against the enrolled snapshot. Callers use
    /// this to disable the enroll action rather than relying on a
    /// contract-side rejection.
    pub fn is_enrolled(&self, course_id: u32) -> bool {
        self.enrolled.iter().any(|c| c.id == course_id)
    }

    /// Fetch the full course list. On failure the previous snapshot is kept
    /// untouched; only the error slot changes.
    pub async fn fetch_courses(
        &mut self,
        api: &impl ContractApi,
        handle: &ContractHandle,
        caller: &str,
    ) {
        self.loading_courses = true;
        match query_all_courses(api, handle, caller).await {
            Ok(courses) => self.courses = courses,
            Err(e) => self.error = Some(e.to_string()),
        }
        self.loading_courses = false;
    }

    /// Fetch the active account's enrolled courses. Same failure contract as
    /// `fetch_courses`.
    pub async fn fetch_enrolled(
        &mut self,
        api: &impl ContractApi,
        handle: &ContractHandle,
        student: &str,
    ) {
        self.loading_enrolled = true;
        match query_student_courses(api, handle, student).await {
            Ok(courses) => self.enrolled = courses,
            Err(e) => self.error = Some(e.to_string()),
        }
        self.loading_enrolled = false;
    }

    /// Run both fetches for the active account. They are independent: one
    /// failing does not stop the other.
    pub async fn refresh(
        &mut self,
        api: &impl ContractApi,
        handle: &ContractHandle,
        address: &str,
    ) {
        self.fetch_courses(api, handle, address).await;
        self.fetch_enrolled(api, handle, address).await;
    }
}

pub async fn query_all_courses(
    api: &impl ContractApi,
    handle: &ContractHandle,
    caller: &str,
) -> Result<Vec<Course>> {
    let resp = api.query(caller, handle, "get_all_courses", &[]).await?;
    decode_course_list(&resp, "Failed to load courses")
}

pub async fn query_student_courses(
    api: &impl ContractApi,
    handle: &ContractHandle,
    student: &str,
) -> Result<Vec<Course>> {
    let resp = api
        .query(student, handle, "get_student_courses", &[json!(student)])
        .await?;
    decode_course_list(&resp, "Failed to load enrolled courses")
}

/// Interpret a query envelope: `result.isErr` means the contract reported an
/// error; a successful result must decode to an array of course records.
fn decode_course_list(resp: &Value, failure_msg: &str) -> Result<Vec<Course>> {
    if resp["result"]["isErr"].as_bool().unwrap_or(true) {
        return Err(ErrorKind::QueryFailed(failure_msg.to_string()).into());
    }

    let output = resp["output"]["Ok"].clone();
    if !output.is_array() {
        return Err(
            ErrorKind::UnexpectedOutputShape("Unexpected output format".to_string()).into(),
        );
    }

    Ok(serde_json::from_value(output)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn course_record(id: u32, enrolled_count: u32, max_students: u32) -> Value {
        json!({
            "id": id,
            "teacher": "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY",
            "title": format!("Course {id}"),
            "description": "desc",
            "max_students": max_students,
            "enrolled_count": enrolled_count,
            "start_time": 1_700_000_000u64,
            "end_time": 1_700_086_400u64,
            "price": 1_000_000_000_000u64,
            "active": true,
            "metadata_hash": "0xabcd",
        })
    }

    fn ok_envelope(records: Vec<Value>) -> Value {
        json!({ "result": { "isErr": false }, "output": { "Ok": records } })
    }

    struct MockContract {
        /// Response per method label.
        responses: RefCell<std::collections::HashMap<String, Value>>,
        queries: RefCell<Vec<String>>,
    }

    impl MockContract {
        fn new() -> Self {
            Self {
                responses: RefCell::new(std::collections::HashMap::new()),
                queries: RefCell::new(Vec::new()),
            }
        }

        fn respond(&self, method: &str, value: Value) {
            self.responses.borrow_mut().insert(method.to_string(), value);
        }
    }

    impl ContractApi for MockContract {
        async fn query(
            &self,
            _caller: &str,
            _handle: &ContractHandle,
            method: &str,
            _args: &[Value],
        ) -> Result<Value> {
            self.queries.borrow_mut().push(method.to_string());
            Ok(self
                .responses
                .borrow()
                .get(method)
                .cloned()
                .unwrap_or_else(|| ok_envelope(vec![])))
        }

        async fn transact(
            &self,
            _signer: &str,
            _handle: &ContractHandle,
            _method: &str,
            _value: u128,
            _args: &[Value],
        ) -> Result<Value> {
            unreachable!("catalog never submits transactions")
        }
    }

    fn handle() -> ContractHandle {
        ContractHandle::from_artifact("5H9gbZrr87kaFTqbksmJBAX19oFsUYG2uNCSeD4HMon5G5ES").unwrap()
    }

    #[tokio::test]
    async fn refresh_fills_both_snapshots() {
        let api = MockContract::new();
        api.respond("get_all_courses", ok_envelope(vec![course_record(1, 0, 30)]));
        api.respond("get_student_courses", ok_envelope(vec![course_record(1, 0, 30)]));

        let mut catalog = CatalogState::new();
        catalog.refresh(&api, &handle(), "5Alice").await;

        assert_eq!(catalog.courses.len(), 1);
        assert_eq!(catalog.enrolled.len(), 1);
        assert!(!catalog.loading_courses);
        assert!(!catalog.loading_enrolled);
        assert!(catalog.error.is_none());
        assert_eq!(
            *api.queries.borrow(),
            ["get_all_courses", "get_student_courses"]
        );
    }

    #[tokio::test]
    async fn over_capacity_counts_pass_through_unmodified() {
        let api = MockContract::new();
        api.respond("get_all_courses", ok_envelope(vec![course_record(1, 45, 30)]));

        let mut catalog = CatalogState::new();
        catalog.fetch_courses(&api, &handle(), "5Alice").await;

        // The contract invariant is not this layer's to enforce or hide.
        assert_eq!(catalog.courses[0].enrolled_count, 45);
        assert_eq!(catalog.courses[0].max_students, 30);
    }

    #[tokio::test]
    async fn is_enrolled_joins_over_the_enrolled_snapshot() {
        let api = MockContract::new();
        api.respond(
            "get_all_courses",
            ok_envelope(vec![course_record(1, 1, 30), course_record(2, 0, 30)]),
        );
        api.respond("get_student_courses", ok_envelope(vec![course_record(1, 1, 30)]));

        let mut catalog = CatalogState::new();
        catalog.refresh(&api, &handle(), "5Alice").await;

        assert!(catalog.is_enrolled(1));
        assert!(!catalog.is_enrolled(2));
    }

    #[tokio::test]
    async fn err_result_keeps_previous_snapshot_and_reports_message() {
        let api = MockContract::new();
        api.respond("get_all_courses", ok_envelope(vec![course_record(1, 0, 30)]));

        let mut catalog = CatalogState::new();
        catalog.fetch_courses(&api, &handle(), "5Alice").await;
        assert_eq!(catalog.courses.len(), 1);

        api.respond("get_all_courses", json!({ "result": { "isErr": true } }));
        catalog.fetch_courses(&api, &handle(), "5Alice").await;

        assert_eq!(catalog.error.as_deref(), Some("Failed to load courses"));
        assert_eq!(catalog.courses.len(), 1, "no partial overwrite with empty data");
        assert!(!catalog.loading_courses);
    }

    #[tokio::test]
    async fn non_array_output_is_an_unexpected_shape() {
        let api = MockContract::new();
        api.respond(
            "get_all_courses",
            json!({ "result": { "isErr": false }, "output": { "Ok": 42 } }),
        );

        let mut catalog = CatalogState::new();
        catalog.fetch_courses(&api, &handle(), "5Alice").await;

        assert_eq!(catalog.error.as_deref(), Some("Unexpected output format"));
        assert!(catalog.courses.is_empty());
    }

    #[tokio::test]
    async fn last_error_wins_across_the_two_fetches() {
        let api = MockContract::new();
        api.respond("get_all_courses", json!({ "result": { "isErr": true } }));
        api.respond("get_student_courses", json!({ "result": { "isErr": true } }));

        let mut catalog = CatalogState::new();
        catalog.refresh(&api, &handle(), "5Alice").await;

        assert_eq!(
            catalog.error.as_deref(),
            Some("Failed to load enrolled courses")
        );
    }
}
