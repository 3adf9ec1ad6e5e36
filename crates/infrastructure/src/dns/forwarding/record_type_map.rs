//! Mapping between `ferrous_recon_domain::RecordType` and `hickory_proto::rr::RecordType`

use ferrous_recon_domain::RecordType;
use hickory_proto::rr::RecordType as HickoryRecordType;

/// SPF (RFC 4408) has no dedicated hickory variant; it travels as an unknown code.
const SPF_CODE: u16 = 99;

/// Bidirectional mapper between domain and hickory record types
pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Convert domain RecordType → hickory RecordType (for building queries)
    pub fn to_hickory(record_type: &RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::A => HickoryRecordType::A,
            RecordType::AAAA => HickoryRecordType::AAAA,
            RecordType::CNAME => HickoryRecordType::CNAME,
            RecordType::PTR => HickoryRecordType::PTR,
            RecordType::NS => HickoryRecordType::NS,
            RecordType::MX => HickoryRecordType::MX,
            RecordType::TXT => HickoryRecordType::TXT,
            RecordType::SOA => HickoryRecordType::SOA,
            RecordType::SRV => HickoryRecordType::SRV,
            RecordType::SPF => HickoryRecordType::from(SPF_CODE),
        }
    }

    /// Convert hickory RecordType → domain RecordType
    ///
    /// Returns `None` for types the resolver does not decode.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> Option<RecordType> {
        RecordType::from_u16(u16::from(hickory_type))
    }
}
