//! Adapters for the domain ports: the HTTP backend, the SDK script fetcher,
//! and in-memory doubles used by tests and demos.

pub mod http;
pub mod in_memory;
pub mod sdk;
