pub mod record_loader;

pub use record_loader::{load_query_records, parse_query_pair, parse_query_records};
