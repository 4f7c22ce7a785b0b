//! # nest-core
//!
//! Namespaced key construction for Redis.
//! Keys are built from a type name or literal prefix followed by any number of
//! segments, all joined by `:` (for example `User:5:email`).
//! This crate has zero dependencies on infrastructure (Redis client, runtime, etc.).

pub mod key;
pub mod type_name;

// Re-export commonly used types at crate root
pub use key::{Key, KeyBuilder, KeyState, DELIMITER};
pub use type_name::simple_type_name;
