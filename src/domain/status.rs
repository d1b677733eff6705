use std::collections::HashMap;
use std::sync::LazyLock;

/// Status codes returned by the gateway in the `Status` element.
///
/// Codes are compared by identity, never by magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCode {
    Succeeded,
    DcvcOrRvg2cError,
    VerifyKeyError,
    PayZgError,
    DeadlineDateOrTimeError,
    AmountIsEmpty,
    C2CItemError,
    OrderParameterError,
    TradingControlFail,
    DcvcFail,
    DcvcOffline,
    PayZgServiceStore,
    AmountFail,
    PayZgServiceSmilePay,
    AtmPaymentFail,
    GetIbonFamiportFail,
    SmseServiceFail,
    IbonServiceFail,
    FamiportServiceFail,
    SmseBalanceFail,
    SmseExecuteFail,
    IbonExecuteFail,
    FamiportExecuteFail,
    C2CServiceFail,
    PaymentError,
    DataIdError,
    PurNameError,
    AddressError,
    MobileOrTelError,
    PackageSizeError,
    TemperatureError,
    DateOrTimeError,
    RemarkError,
    AmountError,
    EzcatServiceError,
}

/// The only code that denotes success.
pub const SUCCESS_CODE: &str = "1";

/// Code and description for every status, one row per variant in declaration
/// order, so `status as usize` indexes its own row.
static STATUS_TABLE: [(StatusCode, &str, &str); 35] = [
    (StatusCode::Succeeded, "1", "取號成功"),
    (StatusCode::DcvcOrRvg2cError, "-2001", "無參數碼及商家代號錯誤"),
    (StatusCode::VerifyKeyError, "-2002", "檢查碼錯誤"),
    (StatusCode::PayZgError, "-2003", "無付款模式"),
    (StatusCode::DeadlineDateOrTimeError, "-2004", "日期格式錯誤"),
    (StatusCode::AmountIsEmpty, "-2005", "無交易金額"),
    (StatusCode::C2CItemError, "-2006", "7-11超商取貨付款相關參數錯誤"),
    (StatusCode::OrderParameterError, "-2007", "訂單參數錯誤(內容字數過多)"),
    (StatusCode::TradingControlFail, "-2009", "SmielPay限制交易，無法建立訂單"),
    (StatusCode::DcvcFail, "-3001", "無此商家代號"),
    (StatusCode::DcvcOffline, "-3002", "商家使用期限已到期"),
    (StatusCode::PayZgServiceStore, "-3003", "商家未開啟此付款方式"),
    (StatusCode::AmountFail, "-3004", "超過付款模式設定金額"),
    (StatusCode::PayZgServiceSmilePay, "-3005", "SmielPay關閉此付款方式"),
    (StatusCode::AtmPaymentFail, "-4000", "此銀行不提供ATM帳號"),
    (StatusCode::GetIbonFamiportFail, "-4001", "超商代碼取號錯誤"),
    (StatusCode::SmseServiceFail, "-4002", "簡訊服務忙錄中"),
    (StatusCode::IbonServiceFail, "-4003", "ibon 服務忙錄中"),
    (StatusCode::FamiportServiceFail, "-4004", "Fami 服務忙錄中"),
    (StatusCode::SmseBalanceFail, "-4005", "簡訊餘額不足"),
    (StatusCode::SmseExecuteFail, "-5000", "Smse 執行錯誤"),
    (StatusCode::IbonExecuteFail, "-5001", "ibon 執行錯誤"),
    (StatusCode::FamiportExecuteFail, "-5002", "fami 執行錯誤"),
    (StatusCode::C2CServiceFail, "-5003", "7-11超商取貨付款 執行錯誤"),
    (StatusCode::PaymentError, "-6001", "Payment error"),
    (StatusCode::DataIdError, "-8001", "『訂單編號』資料錯誤"),
    (StatusCode::PurNameError, "-8002", "『購買者姓名』資料錯誤"),
    (StatusCode::AddressError, "-8004", "『地址』資料錯誤"),
    (StatusCode::MobileOrTelError, "-8005", "『聯絡電話』、『行動電話』資料錯誤"),
    (StatusCode::PackageSizeError, "-8006", "『尺寸』資料錯誤"),
    (StatusCode::TemperatureError, "-8007", "『溫層』資料錯誤"),
    (StatusCode::DateOrTimeError, "-8008", "『日期/時段』資料錯誤"),
    (StatusCode::RemarkError, "-8013", "『備註』資料錯誤"),
    (StatusCode::AmountError, "-8014", "『金額』資料錯誤"),
    (StatusCode::EzcatServiceError, "-8100", "黑貓服務錯誤"),
];

static BY_CODE: LazyLock<HashMap<&'static str, (StatusCode, &'static str)>> =
    LazyLock::new(|| {
        STATUS_TABLE
            .iter()
            .map(|&(status, code, description)| (code, (status, description)))
            .collect()
    });

impl StatusCode {
    pub const ALL: [StatusCode; 35] = [
        Self::Succeeded,
        Self::DcvcOrRvg2cError,
        Self::VerifyKeyError,
        Self::PayZgError,
        Self::DeadlineDateOrTimeError,
        Self::AmountIsEmpty,
        Self::C2CItemError,
        Self::OrderParameterError,
        Self::TradingControlFail,
        Self::DcvcFail,
        Self::DcvcOffline,
        Self::PayZgServiceStore,
        Self::AmountFail,
        Self::PayZgServiceSmilePay,
        Self::AtmPaymentFail,
        Self::GetIbonFamiportFail,
        Self::SmseServiceFail,
        Self::IbonServiceFail,
        Self::FamiportServiceFail,
        Self::SmseBalanceFail,
        Self::SmseExecuteFail,
        Self::IbonExecuteFail,
        Self::FamiportExecuteFail,
        Self::C2CServiceFail,
        Self::PaymentError,
        Self::DataIdError,
        Self::PurNameError,
        Self::AddressError,
        Self::MobileOrTelError,
        Self::PackageSizeError,
        Self::TemperatureError,
        Self::DateOrTimeError,
        Self::RemarkError,
        Self::AmountError,
        Self::EzcatServiceError,
    ];

    /// Finds the status for a raw code. Unknown codes yield `None`.
    pub fn lookup(code: &str) -> Option<Self> {
        BY_CODE.get(code).map(|&(status, _)| status)
    }

    pub fn code(self) -> &'static str {
        self.entry().0
    }

    pub fn description(self) -> &'static str {
        self.entry().1
    }

    pub fn is_success(self) -> bool {
        self == Self::Succeeded
    }

    fn entry(self) -> (&'static str, &'static str) {
        let (_, code, description) = STATUS_TABLE[self as usize];
        (code, description)
    }
}

/// Returns the documented description for a raw status code.
pub fn describe(code: &str) -> Option<&'static str> {
    BY_CODE.get(code).map(|&(_, description)| description)
}
