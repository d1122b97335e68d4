//! # mzunipay - merchant one-time payments
//!
//! A client for the MzuniPay transaction service together with an embeddable
//! payment form. The client submits a single payment to
//! `{base_url}/merchant/one-time` and normalizes the outcome; the form
//! collects payer credentials, drives the client and reflects the result.
//!
//! ```no_run
//! use mzunipay::{MzuniPayClient, PaymentRequest};
//! use rust_decimal::Decimal;
//!
//! # async fn run() -> mzunipay::Result<()> {
//! let client = MzuniPayClient::new("merchant-api-key")?;
//! let request = PaymentRequest::new("payer@example.com", "secret", Decimal::new(1050, 2))
//!     .with_description("Order #42");
//!
//! match client.submit_payment(&request).await {
//!     Ok(result) => println!("paid: {:?}", result.transaction_id()),
//!     Err(error) => eprintln!("payment failed: {}", error),
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod types;

// Re-exports for convenience
pub use client::{MzuniPayClient, PaymentProcessor};
pub use config::ClientConfig;
pub use error::{MzuniPayError, Result};
pub use form::{FormOptions, FormStyles, PaymentForm};
pub use types::{PaymentRequest, PaymentResult};

// Feature-gated framework support
#[cfg(feature = "axum")]
pub mod axum;

/// Current version of the mzunipay library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
