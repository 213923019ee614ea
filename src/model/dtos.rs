use crate::model::structs::Balance;

/// Parameters for the enroll transaction.
#[derive(Debug, Clone)]
pub struct EnrollParams {
    pub course_id: u32,
    /// Payment sent with the call; must cover the course price.
    pub value: Balance,
}

/// Parameters for the create_course transaction. Identifier, enrolled count
/// and active flag are contract-assigned and therefore absent here.
#[derive(Debug, Clone)]
pub struct CreateCourseParams {
    pub title: String,
    pub description: String,
    pub max_students: u32,
    pub start_time: u64,
    pub end_time: u64,
    pub price: Balance,
    pub metadata_hash: String,
}
