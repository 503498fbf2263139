//! Error types for the token lifecycle.

mod types;

#[cfg(test)]
mod tests;

pub use types::{CacheError, TokenError};

pub type TokenResult<T> = Result<T, TokenError>;
