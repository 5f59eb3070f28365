pub mod admission;
pub mod examinee;
pub mod loaders;

pub use admission::{decode_admission, AdmissionRecord};
pub use examinee::{QueryRecord, ResolutionResult};
pub use loaders::{load_query_records, parse_query_pair, parse_query_records};
