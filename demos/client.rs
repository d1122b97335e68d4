//! Example client submitting a one-time merchant payment
//!
//! Usage: cargo run --example client -- <api-key> [base-url]

use mzunipay::{MzuniPayClient, PaymentRequest};
use rust_decimal::Decimal;
use std::str::FromStr;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let api_key = args.next().unwrap_or_default();
    let client = match args.next() {
        Some(base_url) => MzuniPayClient::with_base_url(api_key, base_url)?,
        None => MzuniPayClient::new(api_key)?,
    };

    println!("💳 Submitting payment to {}", client.endpoint());

    let request = PaymentRequest::new("payer@example.com", "payer-password", Decimal::from_str("10.50")?)
        .with_description("Library fine");

    match client.submit_payment(&request).await {
        Ok(result) => {
            println!("✅ Payment accepted");
            if let Some(id) = result.transaction_id() {
                println!("   Transaction ID: {}", id);
            }
            println!("{}", serde_json::to_string_pretty(result.as_value())?);
        }
        Err(error) if error.is_payment_rejection() => {
            println!("❌ Payment rejected: {}", error);
        }
        Err(error) => return Err(error.into()),
    }

    Ok(())
}
