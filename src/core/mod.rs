//! Status collection: report retrieval, parsing and the per-tunnel query pass.

pub mod extractor;
pub mod ipsec_conf;
pub mod provider;
pub mod query;
