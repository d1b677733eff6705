use crate::domain::order::{Credentials, OrderRequest};
use crate::error::Result;
use serde::Serialize;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// An order merged with the merchant credentials, in wire order: order
/// fields first, then `Dcvc`, `Rvg2c` and `Verify_key`.
#[derive(Serialize)]
struct FormBody<'a> {
    #[serde(flatten)]
    order: &'a OrderRequest,
    #[serde(flatten)]
    credentials: &'a Credentials,
}

/// Encodes an order as `application/x-www-form-urlencoded`.
///
/// Absent fields are left out; empty strings are sent as empty values.
pub fn encode_order(order: &OrderRequest, credentials: &Credentials) -> Result<String> {
    let body = serde_urlencoded::to_string(FormBody { order, credentials })?;
    Ok(body)
}
