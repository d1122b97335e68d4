//! Core types for the merchant one-time payment exchange

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A one-time payment submitted on behalf of a payer
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Payer's account email
    pub customer_email: String,
    /// Payer's account password, sent in-band with the payment
    pub password: String,
    /// Amount to charge, serialized as a JSON number
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// Free-form note attached to the payment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl std::fmt::Debug for PaymentRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentRequest")
            .field("customer_email", &self.customer_email)
            .field("password", &"<redacted>")
            .field("amount", &self.amount)
            .field("description", &self.description)
            .finish()
    }
}

impl PaymentRequest {
    /// Create a new payment request without a description
    pub fn new(
        customer_email: impl Into<String>,
        password: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Self {
            customer_email: customer_email.into(),
            password: password.into(),
            amount,
            description: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Success payload returned by the payment service.
///
/// The shape is owned by the service, so the body is kept as-is. The accessors
/// below are conveniences for display and never fail on unexpected shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentResult(Value);

impl PaymentResult {
    /// Wrap a raw response body
    pub fn new(body: Value) -> Self {
        Self(body)
    }

    /// Borrow the raw response body
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Take the raw response body
    pub fn into_inner(self) -> Value {
        self.0
    }

    /// Top-level `message` string, if present
    pub fn message(&self) -> Option<&str> {
        self.0.get("message").and_then(Value::as_str)
    }

    /// Transaction identifier, if the body carries one.
    ///
    /// Service revisions have used both `one_time_tx_id` and `transaction_id`
    /// inside the `transaction` object; both are accepted.
    pub fn transaction_id(&self) -> Option<String> {
        let transaction = self.0.get("transaction")?;
        ["one_time_tx_id", "transaction_id"]
            .iter()
            .filter_map(|key| transaction.get(*key))
            .find_map(|id| match id {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
    }
}

impl From<Value> for PaymentResult {
    fn from(body: Value) -> Self {
        Self::new(body)
    }
}

impl From<PaymentResult> for Value {
    fn from(result: PaymentResult) -> Self {
        result.into_inner()
    }
}

/// Body of a rejected payment; only `message` is meaningful
#[derive(Debug, Deserialize)]
pub(crate) struct FailureBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    #[test]
    fn test_request_serializes_amount_as_number() {
        let request = PaymentRequest::new("a@b.com", "p", Decimal::from_str("10.50").unwrap());
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["customer_email"], "a@b.com");
        assert_eq!(body["password"], "p");
        assert_eq!(body["amount"], json!(10.5));
        assert!(body.get("description").is_none());
    }

    #[test]
    fn test_request_description_is_sent_when_set() {
        let request = PaymentRequest::new("a@b.com", "p", Decimal::new(1, 0))
            .with_description("Coffee");
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["description"], "Coffee");
    }

    #[test]
    fn test_request_debug_hides_password() {
        let request = PaymentRequest::new("a@b.com", "hunter2", Decimal::new(5, 0));
        let debug = format!("{:?}", request);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("a@b.com"));
    }

    #[test]
    fn test_transaction_id_variants() {
        let newer = PaymentResult::new(json!({"transaction": {"one_time_tx_id": "T1"}}));
        assert_eq!(newer.transaction_id().as_deref(), Some("T1"));

        let older = PaymentResult::new(json!({"transaction": {"transaction_id": 42}}));
        assert_eq!(older.transaction_id().as_deref(), Some("42"));

        let neither = PaymentResult::new(json!({"message": "ok"}));
        assert_eq!(neither.transaction_id(), None);
        assert_eq!(neither.message(), Some("ok"));
    }

    #[test]
    fn test_result_is_transparent() {
        let body = json!({"message": "ok", "transaction": {"one_time_tx_id": "T1"}});
        let result = PaymentResult::from(body.clone());
        assert_eq!(serde_json::to_value(&result).unwrap(), body);
        assert_eq!(Value::from(result), body);
    }
}
