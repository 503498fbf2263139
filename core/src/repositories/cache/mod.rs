//! Cache backend abstraction and in-memory implementation

mod memory;
mod r#trait;

#[cfg(test)]
mod tests;

pub use memory::InMemoryCache;
pub use r#trait::CacheBackend;
