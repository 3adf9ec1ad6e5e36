//! Turns answer-section records into domain `Answer`s.

use super::record_type_map::RecordTypeMapper;
use ferrous_recon_domain::{Answer, RecordType};
use hickory_proto::rr::{RData, Record};

/// Extracts the textual payload of `record` when it is of the `requested` kind.
///
/// Returns `None` for records of any other type, or whose data does not
/// match the type code they carry.
pub fn decode(record: &Record, requested: RecordType) -> Option<String> {
    if RecordTypeMapper::from_hickory(record.record_type()) != Some(requested) {
        return None;
    }

    let data = match (requested, record.data()) {
        (RecordType::A, RData::A(a)) => a.0.to_string(),
        (RecordType::AAAA, RData::AAAA(aaaa)) => aaaa.0.to_string(),
        (RecordType::CNAME, RData::CNAME(cname)) => cname.to_utf8(),
        (RecordType::NS, RData::NS(ns)) => ns.to_utf8(),
        (RecordType::PTR, RData::PTR(ptr)) => ptr.to_utf8(),
        (RecordType::MX, RData::MX(mx)) => mx.exchange().to_utf8(),
        (RecordType::SRV, RData::SRV(srv)) => srv.target().to_utf8(),
        (RecordType::SOA, RData::SOA(soa)) => {
            format!("{} {}", soa.mname().to_utf8(), soa.rname().to_utf8())
        }
        (RecordType::TXT, RData::TXT(txt)) => join_strings(txt.txt_data().iter().map(|s| &s[..])),
        (RecordType::SPF, RData::Unknown { rdata, .. }) => {
            join_strings(character_strings(rdata.anything()))
        }
        _ => return None,
    };

    Some(data.trim().to_string())
}

/// Decodes every record of the requested kind, in answer-section order.
///
/// All answers carry the request `name` as given and the exchange `rtt_ms`.
pub fn decode_answers<'a>(
    name: &str,
    requested: RecordType,
    records: impl IntoIterator<Item = &'a Record>,
    rtt_ms: u32,
) -> Vec<Answer> {
    records
        .into_iter()
        .filter_map(|record| decode(record, requested))
        .map(|data| Answer::new(name, requested, rtt_ms, data))
        .collect()
}

fn join_strings<'a>(pieces: impl Iterator<Item = &'a [u8]>) -> String {
    pieces
        .map(String::from_utf8_lossy)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Splits RFC 1035 `<character-string>`s (length octet + bytes).
/// A length running past the end keeps whatever bytes remain.
fn character_strings(mut raw: &[u8]) -> impl Iterator<Item = &[u8]> {
    std::iter::from_fn(move || {
        let (&len, rest) = raw.split_first()?;
        let end = (len as usize).min(rest.len());
        let (piece, tail) = rest.split_at(end);
        raw = tail;
        Some(piece)
    })
}
