mod dns_resolver;
mod page_fetcher;
mod query_executor;

pub use dns_resolver::DnsResolver;
pub use page_fetcher::PageFetcher;
pub use query_executor::QueryExecutor;
