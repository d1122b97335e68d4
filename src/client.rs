//! HTTP client for the merchant one-time payment endpoint

use crate::config::{ClientConfig, API_KEY_HEADER};
use crate::error::PAYMENT_FAILED_FALLBACK;
use crate::types::{FailureBody, PaymentRequest, PaymentResult};
use crate::{MzuniPayError, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

/// Anything that can carry a payment request to the payment service.
///
/// [`MzuniPayClient`] is the production implementation; the form presenter is
/// generic over this trait so it can be driven by a stand-in in tests.
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    /// Submit a one-time merchant payment and return the service's payload
    async fn submit_payment(&self, request: &PaymentRequest) -> Result<PaymentResult>;
}

#[async_trait]
impl<T: PaymentProcessor + ?Sized> PaymentProcessor for &T {
    async fn submit_payment(&self, request: &PaymentRequest) -> Result<PaymentResult> {
        (**self).submit_payment(request).await
    }
}

#[async_trait]
impl<T: PaymentProcessor + ?Sized> PaymentProcessor for Arc<T> {
    async fn submit_payment(&self, request: &PaymentRequest) -> Result<PaymentResult> {
        (**self).submit_payment(request).await
    }
}

/// Client for the MzuniPay transaction service.
///
/// Holds only static configuration; every call is independent, so one client
/// can be shared across tasks.
#[derive(Clone)]
pub struct MzuniPayClient {
    /// Underlying HTTP client
    client: Client,
    /// Static configuration
    config: ClientConfig,
    /// Resolved `{base_url}/merchant/one-time`
    endpoint: Url,
}

impl std::fmt::Debug for MzuniPayClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MzuniPayClient")
            .field("config", &self.config)
            .field("endpoint", &self.endpoint.as_str())
            .finish()
    }
}

impl MzuniPayClient {
    /// Create a client for the default base URL
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(api_key))
    }

    /// Create a client for a custom base URL
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(api_key).with_base_url(base_url))
    }

    /// Create a client from a full configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| MzuniPayError::config(format!("Failed to create HTTP client: {}", e)))?;
        Self::with_http_client(config, client)
    }

    /// Create a client that sends through a caller-built `reqwest::Client`.
    ///
    /// Timeouts, proxies and TLS settings are configured on that client.
    pub fn with_http_client(config: ClientConfig, client: Client) -> Result<Self> {
        config.validate()?;
        let endpoint = config.payment_endpoint()?;

        Ok(Self {
            client,
            config,
            endpoint,
        })
    }

    /// Get the configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the resolved payment endpoint
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Submit a one-time merchant payment.
    ///
    /// A non-success status becomes [`MzuniPayError::Payment`] carrying the
    /// body's `message`, or `"Payment failed."` when there is none. Transport
    /// failures, including a body that cannot be read, are returned unchanged
    /// and never retried.
    pub async fn submit_payment(&self, request: &PaymentRequest) -> Result<PaymentResult> {
        debug!(endpoint = %self.endpoint, amount = %request.amount, "Submitting one-time payment");

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await?;
            let message = failure_message(&body);
            warn!(status = %status, message = %message, "Payment rejected");
            return Err(MzuniPayError::payment(message));
        }

        let body = response.bytes().await?;
        let result: PaymentResult = serde_json::from_slice(&body)?;
        debug!(status = %status, "Payment accepted");
        Ok(result)
    }
}

#[async_trait]
impl PaymentProcessor for MzuniPayClient {
    async fn submit_payment(&self, request: &PaymentRequest) -> Result<PaymentResult> {
        MzuniPayClient::submit_payment(self, request).await
    }
}

/// Pull the `message` out of a failure body, falling back when absent or unusable
fn failure_message(body: &[u8]) -> String {
    serde_json::from_slice::<FailureBody>(body)
        .ok()
        .and_then(|failure| failure.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| PAYMENT_FAILED_FALLBACK.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = MzuniPayClient::new("key").unwrap();
        assert_eq!(
            client.endpoint().as_str(),
            "http://localhost:5000/api/transaction/merchant/one-time"
        );
        assert_eq!(client.config().api_key, "key");
    }

    #[test]
    fn test_client_with_base_url() {
        let client = MzuniPayClient::with_base_url("key", "https://pay.example.com").unwrap();
        assert_eq!(
            client.endpoint().as_str(),
            "https://pay.example.com/merchant/one-time"
        );
    }

    #[test]
    fn test_client_requires_api_key() {
        let err = MzuniPayClient::new("   ").unwrap_err();
        assert!(matches!(err, MzuniPayError::Config { .. }));
    }

    #[test]
    fn test_failure_message_extraction() {
        assert_eq!(failure_message(br#"{"message":"Insufficient funds"}"#), "Insufficient funds");
        assert_eq!(failure_message(br#"{"message":""}"#), PAYMENT_FAILED_FALLBACK);
        assert_eq!(failure_message(br#"{"message":7}"#), PAYMENT_FAILED_FALLBACK);
        assert_eq!(failure_message(br#"{"error":"nope"}"#), PAYMENT_FAILED_FALLBACK);
        assert_eq!(failure_message(b"<html>502</html>"), PAYMENT_FAILED_FALLBACK);
        assert_eq!(failure_message(b""), PAYMENT_FAILED_FALLBACK);
    }

    #[test]
    fn test_debug_hides_api_key() {
        let client = MzuniPayClient::new("super-secret").unwrap();
        assert!(!format!("{:?}", client).contains("super-secret"));
    }
}
