//! Storage abstractions used by the token services.

pub mod cache;

pub use cache::{CacheBackend, InMemoryCache};
