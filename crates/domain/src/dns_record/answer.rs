use super::RecordType;
use serde::{Deserialize, Serialize};

/// One decoded resource record.
///
/// `ttl` carries the measured round-trip time of the exchange in
/// milliseconds for answers obtained over UDP. Answers coming from the
/// JSON fallback keep the protocol TTL reported by that service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub name: String,

    #[serde(rename = "type")]
    pub record_type: u16,

    #[serde(rename = "TTL", default)]
    pub ttl: u32,

    #[serde(default)]
    pub data: String,
}

impl Answer {
    pub fn new(
        name: impl Into<String>,
        record_type: RecordType,
        ttl: u32,
        data: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            record_type: record_type.to_u16(),
            ttl,
            data: data.into(),
        }
    }

    pub fn kind(&self) -> Option<RecordType> {
        RecordType::from_u16(self.record_type)
    }

    pub fn is_address(&self) -> bool {
        self.kind().is_some_and(|rt| rt.is_address())
    }
}

/// Data of the first A or AAAA answer, if any.
pub fn first_address(answers: &[Answer]) -> Option<&str> {
    answers
        .iter()
        .find(|a| a.is_address())
        .map(|a| a.data.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_new_stores_wire_code() {
        let answer = Answer::new("example.com", RecordType::MX, 12, "mail.example.com.");
        assert_eq!(answer.record_type, 15);
        assert_eq!(answer.kind(), Some(RecordType::MX));
        assert!(!answer.is_address());
    }

    #[test]
    fn test_first_address_skips_non_address_records() {
        let answers = vec![
            Answer::new("www.example.com", RecordType::CNAME, 3, "example.com."),
            Answer::new("example.com", RecordType::AAAA, 3, "2001:db8::1"),
            Answer::new("example.com", RecordType::A, 3, "192.0.2.1"),
        ];

        assert_eq!(first_address(&answers), Some("2001:db8::1"));
    }

    #[test]
    fn test_first_address_empty() {
        let answers = vec![Answer::new("example.com", RecordType::TXT, 1, "hello")];
        assert_eq!(first_address(&answers), None);
        assert_eq!(first_address(&[]), None);
    }
}
