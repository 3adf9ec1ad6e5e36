pub mod dispatcher;
pub mod executor;
pub mod forwarding;
pub mod json_resolver;
pub mod transport;

pub use dispatcher::ResolverService;
pub use executor::UdpQueryExecutor;
pub use json_resolver::JsonDnsResolver;
