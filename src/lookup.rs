pub mod fetcher;
pub mod query;
pub mod worker;

// Re-export public types
pub use fetcher::{LookupClient, LookupError, fetch_country_names, parse_country_names};
pub use query::build_lookup_url;
pub use worker::{LookupRequest, LookupResponse, spawn_worker};
