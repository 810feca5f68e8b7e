//! Shared types for repository layer.

mod envelope;

pub use envelope::{FORMAT_VERSION, decode, encode};
