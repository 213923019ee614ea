//! Contract handle and ABI metadata.
//!
//! The ABI artifact is fixed at build time: message selectors and event
//! signature topics for the deployed course marketplace contract. A handle
//! pairs that metadata with the deployment address and is constructed once,
//! before any session exists.

use crate::error::{ErrorKind, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const CONTRACT_ARTIFACT: &str = include_str!("../artifacts/contract.json");

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MessageSpec {
    pub label: String,
    pub selector: String,
    pub mutates: bool,
    pub payable: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EventArg {
    pub label: String,
    pub indexed: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EventSpec {
    pub label: String,
    pub signature_topic: String,
    #[serde(default)]
    pub args: Vec<EventArg>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AbiMetadata {
    pub messages: Vec<MessageSpec>,
    pub events: Vec<EventSpec>,
}

fn decode_hex_field(value: &str, expected_len: usize, what: &str) -> Result<Vec<u8>> {
    let stripped = value.strip_prefix("0x").unwrap_or(value);
    let bytes = hex::decode(stripped)?;
    if bytes.len() != expected_len {
        return Err(ErrorKind::ParseError(format!(
            "{what} must be {expected_len} bytes, got {}",
            bytes.len()
        ))
        .into());
    }
    Ok(bytes)
}

impl AbiMetadata {
    pub fn from_artifact() -> Result<Self> {
        Ok(serde_json::from_str(CONTRACT_ARTIFACT)?)
    }

    pub fn message(&self, label: &str) -> Result<&MessageSpec> {
        self.messages
            .iter()
            .find(|m| m.label == label)
            .ok_or_else(|| ErrorKind::ParseError(format!("unknown message: {label}")).into())
    }

    /// 4-byte call selector for a message label.
    pub fn selector(&self, label: &str) -> Result<[u8; 4]> {
        let spec = self.message(label)?;
        let bytes = decode_hex_field(&spec.selector, 4, "selector")?;
        let mut selector = [0u8; 4];
        selector.copy_from_slice(&bytes);
        Ok(selector)
    }

    /// 32-byte signature topic for an event label.
    pub fn event_topic(&self, label: &str) -> Result<[u8; 32]> {
        let spec = self
            .events
            .iter()
            .find(|e| e.label == label)
            .ok_or_else(|| {
                crate::error::Error::new(ErrorKind::ParseError(format!("unknown event: {label}")))
            })?;
        let bytes = decode_hex_field(&spec.signature_topic, 32, "signature topic")?;
        let mut topic = [0u8; 32];
        topic.copy_from_slice(&bytes);
        Ok(topic)
    }
}

/// Immutable pairing of a deployed address with parsed ABI metadata.
#[derive(Debug, Clone)]
pub struct ContractHandle {
    pub address: String,
    pub abi: AbiMetadata,
}

impl ContractHandle {
    pub fn new(address: &str, abi: AbiMetadata) -> Self {
        Self {
            address: address.to_string(),
            abi,
        }
    }

    pub fn from_artifact(address: &str) -> Result<Self> {
        Ok(Self::new(address, AbiMetadata::from_artifact()?))
    }
}

/// Events the contract emits. The client can decode them from a JSON event
/// record but nothing subscribes at runtime; catalog refresh stays manual.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractEvent {
    CourseCreated {
        course_id: u32,
        teacher: String,
        title: String,
    },
    StudentEnrolled {
        course_id: u32,
        student: String,
    },
}

impl ContractEvent {
    pub fn decode(record: &Value) -> Result<ContractEvent> {
        let label = record["event"]
            .as_str()
            .ok_or_else(|| ErrorKind::ParseError("event record without label".to_string()))?;

        let course_id = record["course_id"].as_u64().and_then(|id| u32::try_from(id).ok());

        match label {
            "CourseCreated" => Ok(ContractEvent::CourseCreated {
                course_id: course_id
                    .ok_or_else(|| bad_field("CourseCreated", "course_id"))?,
                teacher: record["teacher"]
                    .as_str()
                    .ok_or_else(|| bad_field("CourseCreated", "teacher"))?
                    .to_string(),
                title: record["title"]
                    .as_str()
                    .ok_or_else(|| bad_field("CourseCreated", "title"))?
                    .to_string(),
            }),
            "StudentEnrolled" => Ok(ContractEvent::StudentEnrolled {
                course_id: course_id
                    .ok_or_else(|| bad_field("StudentEnrolled", "course_id"))?,
                student: record["student"]
                    .as_str()
                    .ok_or_else(|| bad_field("StudentEnrolled", "student"))?
                    .to_string(),
            }),
            other => Err(ErrorKind::ParseError(format!("unknown event: {other}")).into()),
        }
    }
}

fn bad_field(event: &str, field: &str) -> crate::error::Error {
    ErrorKind::ParseError(format!("{event} record missing {field}")).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn artifact_parses_with_all_messages() {
        let abi = AbiMetadata::from_artifact().unwrap();
        for label in [
            "get_all_courses",
            "get_student_courses",
            "enroll",
            "create_course",
            "verify_enrollment",
        ] {
            assert_eq!(abi.selector(label).unwrap().len(), 4);
        }
        assert!(abi.message("enroll").unwrap().payable);
        assert!(!abi.message("get_all_courses").unwrap().mutates);
    }

    #[test]
    fn event_topics_resolve() {
        let abi = AbiMetadata::from_artifact().unwrap();
        let created = abi.event_topic("CourseCreated").unwrap();
        let enrolled = abi.event_topic("StudentEnrolled").unwrap();
        assert_eq!(created[0], 0x7f);
        assert_eq!(enrolled[0], 0x41);
        assert_ne!(created, enrolled);
    }

    #[test]
    fn indexed_flags_match_declared_shape() {
        let abi = AbiMetadata::from_artifact().unwrap();
        let created = abi.events.iter().find(|e| e.label == "CourseCreated").unwrap();
        let indexed: Vec<&str> = created
            .args
            .iter()
            .filter(|a| a.indexed)
            .map(|a| a.label.as_str())
            .collect();
        assert_eq!(indexed, ["course_id", "teacher"]);
    }

    #[test]
    fn unknown_message_is_an_error() {
        let abi = AbiMetadata::from_artifact().unwrap();
        assert!(abi.selector("flip").is_err());
    }

    #[test]
    fn decodes_course_created_record() {
        let record = json!({
            "event": "CourseCreated",
            "course_id": 7,
            "teacher": "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY",
            "title": "Intro to ink!",
        });
        let event = ContractEvent::decode(&record).unwrap();
        assert_eq!(
            event,
            ContractEvent::CourseCreated {
                course_id: 7,
                teacher: "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY".to_string(),
                title: "Intro to ink!".to_string(),
            }
        );
    }

    #[test]
    fn decodes_student_enrolled_and_rejects_unknown() {
        let record = json!({
            "event": "StudentEnrolled",
            "course_id": 3,
            "student": "5FHneW46xGXgs5mUiveU4sbTyGBzmstUspZC92UhjJM694ty",
        });
        assert!(matches!(
            ContractEvent::decode(&record).unwrap(),
            ContractEvent::StudentEnrolled { course_id: 3, .. }
        ));

        let unknown = json!({ "event": "CourseRetired", "course_id": 1 });
        assert!(ContractEvent::decode(&unknown).is_err());
    }
}
