//! Application layer orchestrating a gateway submission.
//!
//! `GatewayClient` encodes an order, hands it to the injected transport,
//! decodes the XML reply and classifies its status code.

pub mod client;
