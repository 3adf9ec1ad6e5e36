//! DNS Message Builder
//!
//! Constructs recursive query messages in wire format using `hickory-proto`,
//! then appends an EDNS0 OPT pseudo-record carrying a zeroed client-subnet
//! option (RFC 7871) so upstream resolvers do not tailor answers to our
//! network location.

use super::record_type_map::RecordTypeMapper;
use ferrous_recon_domain::{DomainError, RecordType};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;

const OPT_TYPE: u16 = 41;
const EDNS_OPTION_CLIENT_SUBNET: u16 = 8;
const ECS_FAMILY_IPV4: u16 = 1;

/// OPTION-CODE + OPTION-LENGTH + FAMILY + SOURCE PREFIX + SCOPE PREFIX.
/// A /0 source prefix carries no address bytes.
const ECS_OPTION_LEN: usize = 8;

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a query and return its id together with the wire bytes.
    ///
    /// The message carries:
    /// - a random 16-bit id for response matching
    /// - the RD (Recursion Desired) flag
    /// - one question `{fqdn(domain), record_type, IN}`
    /// - an OPT record advertising `edns_payload` with ECS `0.0.0.0/0`
    pub fn build_query_with_id(
        domain: &str,
        record_type: &RecordType,
        edns_payload: u16,
    ) -> Result<(u16, Vec<u8>), DomainError> {
        let mut name = Name::from_str(domain).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", domain, e))
        })?;
        name.set_fqdn(true);

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(RecordTypeMapper::to_hickory(record_type));
        query.set_query_class(DNSClass::IN);

        let id = fastrand::u16(..);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(query);

        let mut bytes = Self::serialize_message(&message)?;
        Self::append_client_subnet_opt(&mut bytes, edns_payload)?;
        Ok((id, bytes))
    }

    /// Serialize a Message to wire format bytes
    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDomainName(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }

    /// Appends the OPT record to an already-serialized query and bumps ARCOUNT.
    fn append_client_subnet_opt(buf: &mut Vec<u8>, payload: u16) -> Result<(), DomainError> {
        if buf.len() < 12 {
            return Err(DomainError::InvalidDomainName(
                "Serialized DNS message shorter than a header".to_string(),
            ));
        }

        let arcount = u16::from_be_bytes([buf[10], buf[11]]) + 1;
        buf[10..12].copy_from_slice(&arcount.to_be_bytes());

        buf.push(0x00); // NAME = root
        buf.extend_from_slice(&OPT_TYPE.to_be_bytes());
        buf.extend_from_slice(&payload.to_be_bytes()); // CLASS = UDP payload size
        buf.push(0x00); // extended RCODE
        buf.push(0x00); // EDNS version
        buf.extend_from_slice(&[0x00, 0x00]); // DO + Z flags
        buf.extend_from_slice(&(ECS_OPTION_LEN as u16).to_be_bytes()); // RDLEN

        buf.extend_from_slice(&EDNS_OPTION_CLIENT_SUBNET.to_be_bytes());
        buf.extend_from_slice(&((ECS_OPTION_LEN - 4) as u16).to_be_bytes());
        buf.extend_from_slice(&ECS_FAMILY_IPV4.to_be_bytes());
        buf.push(0x00); // SOURCE PREFIX-LENGTH
        buf.push(0x00); // SCOPE PREFIX-LENGTH

        Ok(())
    }
}
