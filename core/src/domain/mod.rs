//! Domain layer containing the token lifecycle entities.

pub mod entities;

pub use entities::*;
