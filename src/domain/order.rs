use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Merchant credentials sent with every request.
#[derive(Clone, Serialize, PartialEq, Eq)]
pub struct Credentials {
    /// Merchant code.
    #[serde(rename = "Dcvc")]
    dcvc: String,
    /// Parameter code.
    #[serde(rename = "Rvg2c")]
    rvg2c: String,
    /// Verification key.
    #[serde(rename = "Verify_key")]
    verify_key: String,
}

impl Credentials {
    pub fn new(
        dcvc: impl Into<String>,
        rvg2c: impl Into<String>,
        verify_key: impl Into<String>,
    ) -> Self {
        Self {
            dcvc: dcvc.into(),
            rvg2c: rvg2c.into(),
            verify_key: verify_key.into(),
        }
    }

    pub fn dcvc(&self) -> &str {
        &self.dcvc
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("dcvc", &self.dcvc)
            .field("rvg2c", &self.rvg2c)
            .field("verify_key", &"***")
            .finish()
    }
}

/// Payment mode (`Pay_zg`), sent as its integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMode {
    /// Virtual account / ATM.
    VirtualAccountAtm,
    /// Convenience-store bill.
    CvsBill,
    Ibon,
    FamiPort,
    C2CPickupPayment,
    C2CPickupOnly,
    B2CPickupPayment,
    B2CPickupOnly,
    /// T-Cat cash on delivery.
    BlackCatCod,
    BlackCatDelivery,
    BlackCatReverseLogistics,
}

impl PaymentMode {
    pub fn code(self) -> u8 {
        match self {
            Self::VirtualAccountAtm => 2,
            Self::CvsBill => 3,
            Self::Ibon => 4,
            Self::FamiPort => 6,
            Self::C2CPickupPayment => 51,
            Self::C2CPickupOnly => 52,
            Self::B2CPickupPayment => 55,
            Self::B2CPickupOnly => 56,
            Self::BlackCatCod => 81,
            Self::BlackCatDelivery => 82,
            Self::BlackCatReverseLogistics => 83,
        }
    }

    /// Modes where the customer pays at the pickup point.
    pub fn is_pickup_and_pay(self) -> bool {
        matches!(
            self,
            Self::C2CPickupPayment | Self::B2CPickupPayment | Self::BlackCatCod
        )
    }
}

impl TryFrom<u8> for PaymentMode {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Ok(match code {
            2 => Self::VirtualAccountAtm,
            3 => Self::CvsBill,
            4 => Self::Ibon,
            6 => Self::FamiPort,
            51 => Self::C2CPickupPayment,
            52 => Self::C2CPickupOnly,
            55 => Self::B2CPickupPayment,
            56 => Self::B2CPickupOnly,
            81 => Self::BlackCatCod,
            82 => Self::BlackCatDelivery,
            83 => Self::BlackCatReverseLogistics,
            other => return Err(format!("unknown payment mode: {other}")),
        })
    }
}

impl Serialize for PaymentMode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for PaymentMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = u8::deserialize(deserializer)?;
        PaymentMode::try_from(code).map_err(serde::de::Error::custom)
    }
}

/// Convenience store or logistics company handling delivery (`Pay_subzg`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Carrier {
    #[serde(rename = "7NET")]
    Seven,
    #[serde(rename = "TCAT")]
    Tcat,
    #[serde(rename = "FAMI")]
    FamiMart,
}

/// One order submission. Every field is optional; the gateway enforces
/// cross-field rules and values are passed through unchanged.
///
/// Field order here is the order of the encoded form body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Item description, required by the gateway for pickup-and-pay modes.
    #[serde(rename = "Od_sob", skip_serializing_if = "Option::is_none")]
    pub item_description: Option<String>,
    #[serde(rename = "Pay_zg", skip_serializing_if = "Option::is_none")]
    pub payment_mode: Option<PaymentMode>,
    #[serde(rename = "Pay_subzg", skip_serializing_if = "Option::is_none")]
    pub carrier: Option<Carrier>,
    #[serde(rename = "Data_id", skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// `yyyy/mm/dd`
    #[serde(rename = "Deadline_date", skip_serializing_if = "Option::is_none")]
    pub deadline_date: Option<String>,
    /// `HH:mm:ss`
    #[serde(rename = "Deadline_time", skip_serializing_if = "Option::is_none")]
    pub deadline_time: Option<String>,
    #[serde(rename = "Amount", skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,
    #[serde(rename = "Pur_name", skip_serializing_if = "Option::is_none")]
    pub purchaser_name: Option<String>,
    #[serde(rename = "Tel_number", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "Mobile_number", skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(rename = "Address", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "Logistics_store", skip_serializing_if = "Option::is_none")]
    pub logistics_store: Option<String>,
    #[serde(rename = "Email", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "Invoice_name", skip_serializing_if = "Option::is_none")]
    pub invoice_name: Option<String>,
    #[serde(rename = "Invoice_num", skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
    #[serde(rename = "Remark", skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    #[serde(rename = "Roturl", skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
    #[serde(rename = "Logistics_Roturl", skip_serializing_if = "Option::is_none")]
    pub logistics_return_url: Option<String>,
    #[serde(rename = "Roturl_status", skip_serializing_if = "Option::is_none")]
    pub return_status_url: Option<String>,
}

impl OrderRequest {
    /// Number of fields that will be sent.
    pub fn present_fields(&self) -> usize {
        serde_json::to_value(self)
            .ok()
            .and_then(|value| value.as_object().map(|fields| fields.len()))
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_hides_verify_key() {
        let credentials = Credentials::new("107", "1", "secret-key");
        let debug = format!("{credentials:?}");
        assert!(debug.contains("107"));
        assert!(!debug.contains("secret-key"));
        assert_eq!(credentials.dcvc(), "107");
    }

    #[test]
    fn test_payment_mode_codes_round_trip() {
        for code in [2u8, 3, 4, 6, 51, 52, 55, 56, 81, 82, 83] {
            let mode = PaymentMode::try_from(code).unwrap();
            assert_eq!(mode.code(), code);
        }
        assert!(PaymentMode::try_from(5).is_err());
    }

    #[test]
    fn test_order_deserializes_from_wire_names() {
        let json = r#"{"Od_sob":"book","Pay_zg":51,"Pay_subzg":"7NET","Amount":500,"Remark":""}"#;
        let order: OrderRequest = serde_json::from_str(json).unwrap();

        assert_eq!(order.item_description.as_deref(), Some("book"));
        assert_eq!(order.payment_mode, Some(PaymentMode::C2CPickupPayment));
        assert!(order.payment_mode.unwrap().is_pickup_and_pay());
        assert_eq!(order.carrier, Some(Carrier::Seven));
        assert_eq!(order.amount, Some(500));
        assert_eq!(order.remark.as_deref(), Some(""));
        assert_eq!(order.order_id, None);
    }

    #[test]
    fn test_present_fields_counts_empty_strings() {
        let order = OrderRequest {
            order_id: Some(String::new()),
            amount: Some(0),
            ..Default::default()
        };
        assert_eq!(order.present_fields(), 2);
        assert_eq!(OrderRequest::default().present_fields(), 0);
    }
}
