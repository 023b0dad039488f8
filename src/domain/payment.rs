use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_CURRENCY: &str = "USD";

/// Payment form fields as entered. Missing keys read as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentForm {
    pub amount: String,
    pub currency_code: String,
    pub cardholder_name: String,
    pub card_number: String,
    pub expiry: String,
    pub security_code: String,
    pub address_line1: String,
    pub address_line2: String,
    pub admin_area1: String,
    pub admin_area2: String,
    pub postal_code: String,
    pub country_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingAddress {
    pub address_line1: String,
    pub address_line2: String,
    pub admin_area1: String,
    pub admin_area2: String,
    pub postal_code: String,
    pub country_code: String,
}

impl BillingAddress {
    /// Returns `None` unless at least one billing field was filled in.
    pub fn from_form(form: &PaymentForm) -> Option<Self> {
        let address = Self {
            address_line1: form.address_line1.clone(),
            address_line2: form.address_line2.clone(),
            admin_area1: form.admin_area1.clone(),
            admin_area2: form.admin_area2.clone(),
            postal_code: form.postal_code.clone(),
            country_code: form.country_code.to_uppercase(),
        };

        (!address.is_blank()).then_some(address)
    }

    fn is_blank(&self) -> bool {
        [
            &self.address_line1,
            &self.address_line2,
            &self.admin_area1,
            &self.admin_area2,
            &self.postal_code,
            &self.country_code,
        ]
        .iter()
        .all(|field| field.is_empty())
    }
}

/// Body of `POST /api/payment/process`.
///
/// `billing_address` serializes as `null` when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub credential_token: String,
    pub amount: String,
    pub currency_code: String,
    pub cardholder_name: String,
    pub card_number: String,
    pub expiry: String,
    pub security_code: String,
    pub billing_address: Option<BillingAddress>,
}

impl PaymentRequest {
    /// Assembles a request from the form. Card fields and the amount pass through untouched.
    pub fn assemble(credential_token: &str, form: &PaymentForm) -> Self {
        Self {
            credential_token: credential_token.to_string(),
            amount: form.amount.clone(),
            currency_code: normalize_currency(&form.currency_code),
            cardholder_name: form.cardholder_name.clone(),
            card_number: form.card_number.clone(),
            expiry: form.expiry.clone(),
            security_code: form.security_code.clone(),
            billing_address: BillingAddress::from_form(form),
        }
    }
}

fn normalize_currency(code: &str) -> String {
    if code.is_empty() {
        DEFAULT_CURRENCY.to_string()
    } else {
        code.to_uppercase()
    }
}

/// Body returned by the payment endpoint on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResult {
    pub status: String,
    pub order_id: String,
}

impl fmt::Display for PaymentResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Payment status: {} (Order {})", self.status, self.order_id)
    }
}
