//! Wire formats: form-encoded requests, XML replies and CSV order batches.

pub mod csv;
pub mod form;
pub mod xml;
