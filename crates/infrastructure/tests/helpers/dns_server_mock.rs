#![allow(dead_code)]
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

pub const NOERROR: u8 = 0;
pub const SERVFAIL: u8 = 2;
pub const NXDOMAIN: u8 = 3;

/// Question as the mock server saw it.
#[derive(Debug, Clone)]
pub struct MockQuery {
    pub id: u16,
    pub name: String,
    pub qtype: u16,
    pub raw: Vec<u8>,
}

/// What to answer with; every answer reuses the question name.
#[derive(Debug, Clone, Default)]
pub struct MockReply {
    pub rcode: u8,
    pub answers: Vec<(u16, Vec<u8>)>,
}

impl MockReply {
    pub fn answer(rtype: u16, rdata: Vec<u8>) -> Self {
        Self {
            rcode: NOERROR,
            answers: vec![(rtype, rdata)],
        }
    }

    pub fn rcode(rcode: u8) -> Self {
        Self {
            rcode,
            answers: Vec::new(),
        }
    }
}

/// Returning `None` drops the query without a reply.
pub type Handler = Arc<dyn Fn(&MockQuery) -> Option<MockReply> + Send + Sync>;

pub struct MockDnsServer {
    addr: SocketAddr,
    received: Arc<Mutex<Vec<MockQuery>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start<F>(handler: F) -> Result<Self, std::io::Error>
    where
        F: Fn(&MockQuery) -> Option<MockReply> + Send + Sync + 'static,
    {
        let handler: Handler = Arc::new(handler);
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let addr = socket.local_addr()?;
        let received = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&received);

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            let Some(query) = parse_query(&buf[..len]) else {
                                continue;
                            };
                            log.lock().unwrap().push(query.clone());

                            if let Some(reply) = handler(&query) {
                                let response = build_response(&query, &reply);
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            received,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn server(&self) -> String {
        self.addr.to_string()
    }

    pub fn received(&self) -> Vec<MockQuery> {
        self.received.lock().unwrap().clone()
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

fn parse_query(buf: &[u8]) -> Option<MockQuery> {
    if buf.len() < 17 {
        return None;
    }

    let mut labels = Vec::new();
    let mut pos = 12;
    loop {
        let len = *buf.get(pos)? as usize;
        pos += 1;
        if len == 0 {
            break;
        }
        labels.push(String::from_utf8_lossy(buf.get(pos..pos + len)?).into_owned());
        pos += len;
    }

    let qtype = u16::from_be_bytes([*buf.get(pos)?, *buf.get(pos + 1)?]);

    Some(MockQuery {
        id: u16::from_be_bytes([buf[0], buf[1]]),
        name: labels.join("."),
        qtype,
        raw: buf.to_vec(),
    })
}

fn question_end(raw: &[u8]) -> usize {
    let mut pos = 12;
    while raw[pos] != 0 {
        pos += raw[pos] as usize + 1;
    }
    pos + 1 + 4
}

fn build_response(query: &MockQuery, reply: &MockReply) -> Vec<u8> {
    let raw = &query.raw;
    let mut response = Vec::with_capacity(512);

    response.extend_from_slice(&raw[0..2]);
    response.push(0x81);
    response.push(0x80 | (reply.rcode & 0x0F));
    response.extend_from_slice(&[0x00, 0x01]);
    response.extend_from_slice(&(reply.answers.len() as u16).to_be_bytes());
    response.extend_from_slice(&[0x00, 0x00]);
    response.extend_from_slice(&[0x00, 0x00]);

    response.extend_from_slice(&raw[12..question_end(raw)]);

    for (rtype, rdata) in &reply.answers {
        response.extend_from_slice(&[0xc0, 0x0c]);
        response.extend_from_slice(&rtype.to_be_bytes());
        response.extend_from_slice(&[0x00, 0x01]);
        response.extend_from_slice(&[0x00, 0x00, 0x00, 0x3c]);
        response.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        response.extend_from_slice(rdata);
    }

    response
}

/// RDATA encoders for the record types the resolver decodes.
pub mod rdata {
    pub fn name(name: &str) -> Vec<u8> {
        let mut out = Vec::new();
        for label in name.trim_end_matches('.').split('.').filter(|l| !l.is_empty()) {
            out.push(label.len() as u8);
            out.extend_from_slice(label.as_bytes());
        }
        out.push(0);
        out
    }

    pub fn a(octets: [u8; 4]) -> Vec<u8> {
        octets.to_vec()
    }

    pub fn aaaa(addr: std::net::Ipv6Addr) -> Vec<u8> {
        addr.octets().to_vec()
    }

    pub fn mx(preference: u16, exchange: &str) -> Vec<u8> {
        let mut out = preference.to_be_bytes().to_vec();
        out.extend(name(exchange));
        out
    }

    pub fn srv(priority: u16, weight: u16, port: u16, target: &str) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&priority.to_be_bytes());
        out.extend_from_slice(&weight.to_be_bytes());
        out.extend_from_slice(&port.to_be_bytes());
        out.extend(name(target));
        out
    }

    pub fn soa(mname: &str, rname: &str) -> Vec<u8> {
        let mut out = name(mname);
        out.extend(name(rname));
        for value in [2024010101u32, 7200, 3600, 1209600, 300] {
            out.extend_from_slice(&value.to_be_bytes());
        }
        out
    }

    pub fn txt(pieces: &[&str]) -> Vec<u8> {
        let mut out = Vec::new();
        for piece in pieces {
            out.push(piece.len() as u8);
            out.extend_from_slice(piece.as_bytes());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rdata_name_encoding() {
        assert_eq!(
            rdata::name("dns.google."),
            vec![3, b'd', b'n', b's', 6, b'g', b'o', b'o', b'g', b'l', b'e', 0]
        );
        assert_eq!(rdata::name("."), vec![0]);
    }
}
