//! Longtail Key-Value Storage
//!
//! Backends for the `KeyValueStore` trait from `longtail-core`: an in-memory
//! map for tests and single-process use, and Upstash Redis over its REST API
//! for deployments that share settings and cached responses.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Re-exports
pub use longtail_core;

pub mod memory;
pub mod upstash;

// Re-export stores
pub use memory::MemoryKvStore;
pub use upstash::UpstashRedisStore;
