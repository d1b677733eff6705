//! Gateway vocabulary: orders, replies, status codes and the transport port.

pub mod order;
pub mod ports;
pub mod response;
pub mod status;
