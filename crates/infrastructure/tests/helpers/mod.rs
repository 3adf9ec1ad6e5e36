#![allow(dead_code)]
#![allow(unused_imports)]

pub mod dns_server_mock;
pub mod mock_ports;

pub use dns_server_mock::{rdata, MockDnsServer, MockQuery, MockReply};
pub use mock_ports::{MockExecutor, MockPageFetcher};
