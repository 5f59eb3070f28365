pub mod admission_client;

pub use admission_client::{AdmissionLookup, LookupClient};
