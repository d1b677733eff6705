#![allow(dead_code)]

use smilepay::application::client::GatewayClient;
use smilepay::domain::order::{Credentials, OrderRequest, PaymentMode};
use smilepay::infrastructure::canned::CannedTransport;
use std::sync::Arc;

pub const SUCCESS_XML: &str = r#"
  <SmilePay>
    <Status>1</Status>
    <Desc>Succeeded</Desc>
    <Rvg2c>1</Rvg2c>
    <Dcvc>107</Dcvc>
    <SmilePayNO>00E0001000002913643</SmilePayNO>
    <Data_id></Data_id>
    <Amount>500</Amount>
    <AtmBankNo>004</AtmBankNo>
    <AtmNo>31905792913643</AtmNo>
  </SmilePay>
"#;

pub fn rejected_xml(code: &str, description: &str) -> String {
    format!("<SmilePay><Status>{code}</Status><Desc>{description}</Desc></SmilePay>")
}

pub fn credentials() -> Credentials {
    Credentials::new("107", "1", "789")
}

pub fn atm_order(order_id: &str, amount: u64) -> OrderRequest {
    OrderRequest {
        payment_mode: Some(PaymentMode::VirtualAccountAtm),
        order_id: Some(order_id.to_string()),
        amount: Some(amount),
        ..Default::default()
    }
}

/// A client answered by `transport`, plus a handle on its request log.
pub fn client_with(transport: CannedTransport) -> (GatewayClient, CannedTransport) {
    let client = GatewayClient::new(credentials(), Arc::new(transport.clone()));
    (client, transport)
}
