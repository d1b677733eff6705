//! Transport implementations.

pub mod canned;
pub mod http;
