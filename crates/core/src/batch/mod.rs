//! Chunked batch recompute over a host-provided store.
//!
//! Upstream change-notification hooks hand over the set of cost centers
//! whose data changed; this module resolves them to projects and recomputes
//! each affected summary as a whole.

pub mod service;
pub mod store;


pub use service::{RecomputeService, RECOMPUTE_CHUNK_SIZE};
pub use store::SummaryStore;
