pub mod page_fetcher;

pub use page_fetcher::ReqwestPageFetcher;
